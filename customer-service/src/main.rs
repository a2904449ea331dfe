use customer_service::config::{CustomerConfig, SERVICE_NAME};
use customer_service::services::init_metrics;
use customer_service::startup::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = CustomerConfig::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    // Must be installed before any metric is recorded
    init_metrics()?;

    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        port = config.common.port,
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "Starting customer service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    tracing::info!("Customer service stopped");
    Ok(())
}
