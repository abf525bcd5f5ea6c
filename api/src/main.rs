use api::{telemetry, Application, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let args = api::config::Args::parse();

    // Load configuration
    let config = Config::load(&args)?;

    // Initialize telemetry
    telemetry::init_telemetry()?;

    let app = Application::new(config)?;
    if let Err(err) = app.serve().await {
        tracing::error!("failed to serve: {:#}", err);
        std::process::exit(1);
    }

    Ok(())
}
