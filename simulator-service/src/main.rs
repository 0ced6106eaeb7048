use service_core::observability::logging::init_tracing;
use simulator_service::{Application, config::Config, services::init_metrics};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config.service_name, &config.log_level);
    init_metrics();

    tracing::info!(
        service = %config.service_name,
        port = config.server.port,
        root_behavior = ?config.root_behavior,
        "Starting transaction simulator"
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
