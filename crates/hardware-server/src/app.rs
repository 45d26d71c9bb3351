//! Application assembly and serving.

use axum::Router;
use hardware_config::AppConfig;
use hardware_core::{HardwareError, HardwareResult};
use hardware_repository::{DatabasePool, SqliteProductRepository, SqliteUserRepository};
use hardware_rest::{create_router, AppState};
use hardware_security::{PasswordHasher, TokenProvider};
use hardware_service::{AuthServiceImpl, ProductServiceImpl, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::info;

/// A fully wired server, ready to bind.
pub struct Application {
    config: AppConfig,
    pool: Arc<DatabasePool>,
    router: Router,
}

impl Application {
    /// Connects to the database, applies migrations and wires every layer.
    pub async fn build(config: AppConfig) -> HardwareResult<Self> {
        let pool = Arc::new(DatabasePool::new(&config.database).await?);
        pool.run_migrations().await?;

        let user_repository = Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));
        let product_repository = Arc::new(SqliteProductRepository::new(Arc::clone(&pool)));
        let password_hasher = Arc::new(PasswordHasher::with_cost(config.security.password_hash_cost));
        let token_provider = Arc::new(TokenProvider::new(&config.security));

        let state = AppState::new(
            Arc::new(UserServiceImpl::new(user_repository.clone(), password_hasher.clone())),
            Arc::new(ProductServiceImpl::new(product_repository)),
            Arc::new(AuthServiceImpl::new(user_repository, password_hasher, token_provider)),
        )
        .with_health_check(pool.clone());

        let router = create_router(state, &config.server);
        Ok(Self { config, pool, router })
    }

    /// Returns the HTTP router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Returns the database pool.
    #[must_use]
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Serves until Ctrl+C or SIGTERM, then closes the database pool.
    pub async fn run(self) -> HardwareResult<()> {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| HardwareError::Internal(format!("Failed to bind {}: {}", addr, e)))?;
        info!("Starting REST server on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| HardwareError::Internal(format!("REST server error: {}", e)))?;

        self.pool.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
