use aquatrash::startup::Application;
use aquatrash::{configuration::get_configuration, telemetry::*};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("aquatrash".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration()?;
    Application::build(configuration)
        .await?
        .run_until_stopped()
        .await?;
    Ok(())
}
