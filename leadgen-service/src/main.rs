use leadgen_service::config::LeadgenConfig;
use leadgen_service::observability::init_tracing;
use leadgen_service::services::metrics::init_metrics;
use leadgen_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing("info");
    init_metrics();

    let config = LeadgenConfig::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
