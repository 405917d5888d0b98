use dealership::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    // Redirect all `log`'s event to our subscriber
    let subscriber = get_subscriber("dealership".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    let app = Application::build(configuration).await?;
    app.run_until_stopped().await?;

    Ok(())
}
