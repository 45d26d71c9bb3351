//! # Hardware Store API Server
//!
//! Loads configuration, installs logging and serves the REST API.

use anyhow::Context;
use hardware_config::ConfigLoader;
use hardware_server::{
    logging::init_logging,
    startup::{print_banner, print_startup_info},
    Application,
};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::from_default_location()
        .load()
        .context("Failed to load configuration")?;

    init_logging(&config.observability);
    print_banner();
    print_startup_info(&config);

    let app = match Application::build(config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };
    app.run().await?;
    Ok(())
}
