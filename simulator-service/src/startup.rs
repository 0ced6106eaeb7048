//! Application startup and lifecycle management.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use service_core::error::AppError;
use tokio::net::TcpListener;
use tokio::signal;

use crate::build_router;
use crate::config::Config;
use crate::services::{HealthState, OutcomeSampler, ThreadRngSampler};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub health: HealthState,
    pub sampler: Arc<dyn OutcomeSampler>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the production randomness source.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        Self::build_with_sampler(config, Arc::new(ThreadRngSampler)).await
    }

    /// Build with an injected sampler; tests substitute deterministic ones.
    pub async fn build_with_sampler(
        config: Config,
        sampler: Arc<dyn OutcomeSampler>,
    ) -> Result<Self, AppError> {
        let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("invalid listen address: {e}")))?;

        // Port 0 = random port for testing.
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config,
            health: HealthState::new(),
            sampler,
        };
        let router = build_router(state);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a termination signal arrives, then stop accepting
    /// connections and drain in-flight requests before returning.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
