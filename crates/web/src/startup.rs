use actix_cors::Cors;
use actix_web::{dev::Server, web, web::Data, App, HttpServer};
use anyhow::Context;
use credential::CredentialSigner;
use secrecy::Secret;
use std::{io::Error, net::TcpListener};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    error::ApiError,
    routes::{
        delete_review, delete_vehicle, get_financing_settings, get_setting, health_check,
        list_all_reviews, list_approved_reviews, list_events, list_vehicles, login,
        quote_financing, record_event, reorder_vehicles, reset_events, save_vehicle,
        submit_review, update_financing_settings, update_review, update_setting,
    },
    store::SiteStore,
};

pub struct AdminPassword(pub Secret<String>);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let signer = CredentialSigner::new(configuration.authentication.hmac_secret);
        if !signer.is_configured() {
            tracing::warn!("No HMAC secret configured: admin login and admin routes will fail");
        }

        let server = run(
            listener,
            signer,
            configuration.authentication.admin_password,
            SiteStore::default(),
        )
        .await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), Error> {
        self.server.await
    }
}

async fn run(
    listener: TcpListener,
    signer: CredentialSigner,
    admin_password: Secret<String>,
    store: SiteStore,
) -> Result<Server, anyhow::Error> {
    let signer = Data::new(signer);
    let admin_password = Data::new(AdminPassword(admin_password));
    let store = Data::new(store);
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());
        App::new()
            // Logger middleware
            // Sent active-web log to log subscriber
            .wrap(TracingLogger::default())
            .wrap(cors)
            .service(health_check)
            .service(
                web::scope("/api")
                    .service(login)
                    .service(list_vehicles)
                    .service(save_vehicle)
                    .service(reorder_vehicles)
                    .service(delete_vehicle)
                    .service(list_approved_reviews)
                    .service(submit_review)
                    .service(list_all_reviews)
                    .service(update_review)
                    .service(delete_review)
                    .service(record_event)
                    .service(list_events)
                    .service(reset_events)
                    .service(get_setting)
                    .service(update_setting)
                    .service(get_financing_settings)
                    .service(update_financing_settings)
                    .service(quote_financing),
            )
            .app_data(json_config)
            .app_data(signer.clone())
            .app_data(admin_password.clone())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
