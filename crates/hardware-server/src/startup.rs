//! Server startup utilities.

use hardware_config::AppConfig;
use tracing::{info, warn};

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    __  __               __
   / / / /___ __________/ /      ______ _________
  / /_/ / __ `/ ___/ __  / | /| / / __ `/ ___/ _ \
 / __  / /_/ / /  / /_/ /| |/ |/ / /_/ / /  /  __/
/_/ /_/\__,_/_/   \__,_/ |__/|__/\__,_/_/   \___/

                     Store API
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Version:     {}", config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("REST API:    http://{}", addr);
    info!("Health:      http://{}/health", addr);
    info!("API Docs:    http://{}/api-docs/openapi.json", addr);
    info!("{}", separator);

    if config.security.uses_default_secret() {
        warn!("SECRET_KEY is not set; tokens are signed with the built-in development key");
    }
}
