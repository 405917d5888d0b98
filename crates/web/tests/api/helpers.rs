use dealership::{
    configuration::{get_configuration, Settings},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::Secret;
use serde_json::{json, Value};
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub admin: TestAdmin,
}

pub struct TestAdmin {
    pub password: String,
    pub hmac_secret: String,
}

impl TestAdmin {
    pub fn generate() -> Self {
        Self {
            password: Uuid::new_v4().to_string(),
            hmac_secret: Uuid::new_v4().to_string(),
        }
    }
}

impl TestApp {
    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/api/auth", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Log in with the configured password and return the credential.
    pub async fn login(&self) -> String {
        let response = self
            .post_login(&json!({ "password": self.admin.password }))
            .await;
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("Failed to parse login body");
        body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", &self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", &self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(&format!("{}{}", &self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(&format!("{}{}", &self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(&format!("{}{}", &self.address, path))
    }

    /// GET a public route and parse its JSON body.
    pub async fn get_json<T>(&self, path: &str) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        self.get(path)
            .send()
            .await
            .expect("Failed to execute request.")
            .json()
            .await
            .expect("Failed to parse response body.")
    }

    /// Create a vehicle through the admin API and return its JSON.
    pub async fn create_vehicle(&self, token: &str, model: &str) -> Value {
        let response = self
            .post("/api/admin/vehicles")
            .bearer_auth(token)
            .json(&vehicle_body(model))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        body["vehicle"].clone()
    }
}

pub fn vehicle_body(model: &str) -> Value {
    json!({
        "make": "Toyota",
        "model": model,
        "year": 2020,
        "price": 21000000,
        "mileage": 35000,
        "engine": "2.0",
        "transmission": "Manual",
        "fuelType": "Nafta",
        "description": "Único dueño",
        "images": []
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn the application after letting the caller tweak the configuration.
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    // Singleton Pattern
    Lazy::force(&TRACING);

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let admin = TestAdmin::generate();
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        // Wildcard port, the system will find available port
        c.application.port = 0;
        c.authentication.admin_password = Secret::new(admin.password.clone());
        c.authentication.hmac_secret = Secret::new(admin.hmac_secret.clone());
        customise(&mut c);
        c
    };
    let app = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);

    // Run the application
    let _ = tokio::spawn(app.run_until_stopped());
    TestApp {
        address,
        port,
        api_client,
        admin,
    }
}
