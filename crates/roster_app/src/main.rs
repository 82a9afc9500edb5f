use roster_infrastructure::{services::ServiceRegistry, settings::Settings};

use roster_routing::logger;
use roster_routing::router::ApplicationController;

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Could not parse settings");

    logger::setup(&settings.logger.level);
    tracing::info!("starting in the '{}' environment", settings.environment);

    let services = ServiceRegistry::from_settings(&settings)
        .await
        .expect("Could not initialize the players store");

    ApplicationController::run(settings, services)
        .await
        .expect("Failed to start the server");
}
