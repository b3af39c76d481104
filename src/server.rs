//! Reusable MindWell server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the full server lifecycle:
//! database init, migrations, geocoder and service wiring, REST API and
//! graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::UserService;
use crate::config::AppConfig;
use crate::domain::ReverseGeocoder;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::UserRepository;
use crate::infrastructure::geocoding::HereGeocoder;
use crate::support::{ShutdownCoordinator, ShutdownSignal};
use crate::{create_api_router, init_database, ApiState};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the MindWell API server.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

/// Wire the user service and HTTP state on top of an open database.
pub fn build_api_state(
    config: &AppConfig,
    db: DatabaseConnection,
    geocoder: Arc<dyn ReverseGeocoder>,
) -> ApiState {
    let jwt_config = config.jwt_config();
    let repo = Arc::new(UserRepository::new(db.clone()));
    let user_service = Arc::new(UserService::new(repo, geocoder, jwt_config.clone()));

    ApiState {
        user_service,
        db,
        jwt_config,
        cors: config.cors.clone(),
        request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        secure_cookies: config.environment.is_production(),
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running MindWell API server.
///
/// # Examples
///
/// ```rust,no_run
/// use mindwell::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     // ... wait for shutdown signal ...
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the API is bound to.
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the API server with the given options.
    ///
    /// This will:
    /// 1. Connect to the database and run migrations
    /// 2. Build the HERE geocoder and the user service
    /// 3. Start the REST API server (with Swagger UI)
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!(environment = ?app_cfg.environment, "Starting MindWell API...");

        // ── Database ───────────────────────────────────────────
        let db = init_database(&app_cfg.database).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        // ── Services ───────────────────────────────────────────
        let geocoder: Arc<dyn ReverseGeocoder> = Arc::new(HereGeocoder::new(&app_cfg.geocoding)?);
        let state = build_api_state(&app_cfg, db.clone(), geocoder);
        info!(
            "JWT configured with {}h token expiration",
            state.jwt_config.expiration_hours
        );

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(state);

        let listener = tokio::net::TcpListener::bind(app_cfg.listen_address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/api", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Server started.");

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    ///
    /// Call [`wait`](Self::wait) to block until everything has stopped.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop once shutdown has been triggered.
    /// In-flight requests get `server.shutdown_timeout` seconds to finish.
    pub async fn wait(self) {
        info!("⏳ Waiting for server tasks to complete...");

        let api_task = self.api_task;
        let drained = self
            .shutdown
            .drain(async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;
        if !drained {
            warn!("Abandoning in-flight requests");
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 MindWell API shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down MindWell API...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing (logging) from the application config.
///
/// `RUST_LOG` takes precedence over `logging.level`. Call this once at
/// process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::DatabaseConfig;

    #[tokio::test]
    async fn starts_on_ephemeral_port_and_shuts_down() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".into();
        config.server.port = 0;
        config.server.shutdown_timeout = 2;
        config.database = DatabaseConfig::in_memory();

        let handle = ServerHandle::start(ServerOptions {
            config,
            auto_migrate: true,
        })
        .await
        .unwrap();

        assert_ne!(handle.local_addr.port(), 0);
        assert!(handle.is_running());

        tokio::time::timeout(Duration::from_secs(5), handle.shutdown())
            .await
            .expect("shutdown should finish");
    }
}
