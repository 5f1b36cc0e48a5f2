//! Reusable server runtime.
//!
//! [`ServerHandle`] encapsulates the full lifecycle: database connection,
//! schema creation, REST API, metrics and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::UserService;
use crate::config::{AppConfig, LogFormat};
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmUserRepository};
use crate::interfaces::http::create_api_router;
use crate::support::{AppError, InfraError, ShutdownCoordinator, ShutdownSignal};

/// Initialize the global tracing subscriber from the logging config.
/// `RUST_LOG`, when set, wins over the configured level.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}

/// The global metrics recorder can only be installed once per process.
fn prometheus_handle() -> PrometheusHandle {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            match metrics::set_global_recorder(recorder) {
                Ok(()) => info!("Prometheus metrics recorder installed"),
                Err(e) => warn!("Metrics recorder not installed: {}", e),
            }
            handle
        })
        .clone()
}

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Create the users table on startup if absent (default: true).
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

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running User Service.
///
/// ```rust,no_run
/// use user_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.wait_for_signal().await;
///     handle.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Address the REST API is bound to.
    pub local_addr: SocketAddr,
    /// The configuration the server was started with.
    pub config: AppConfig,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connect to the database, create the schema (if enabled), bind the
    /// listener and start serving the REST API in a background task.
    pub async fn start(opts: ServerOptions) -> Result<Self, AppError> {
        let app_cfg = opts.config;

        info!("Starting User Service...");
        let prometheus_handle = prometheus_handle();

        // ── Database ───────────────────────────────────────────
        let db = init_database(&app_cfg.database_config())
            .await
            .map_err(InfraError::from)?;

        if opts.auto_migrate {
            info!("Ensuring users table exists...");
            Migrator::up(&db, None).await.map_err(InfraError::from)?;
            info!("Schema ready");
        }

        // ── Repository & Service ───────────────────────────────
        let repo = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let user_service = Arc::new(UserService::new(repo));

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        shutdown.start_signal_listener();

        // ── REST API server ────────────────────────────────────
        let router = create_api_router(user_service, prometheus_handle);
        let listener = tokio::net::TcpListener::bind(app_cfg.server.address())
            .await
            .map_err(InfraError::from)?;
        let local_addr = listener.local_addr().map_err(InfraError::from)?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown.signal();
        let api_task = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move { api_shutdown.wait().await })
                .await;
            if let Err(e) = result {
                error!("REST API server error: {}", e);
            }
        });

        Ok(Self {
            local_addr,
            config: app_cfg,
            db,
            shutdown,
            api_task,
        })
    }

    /// Signal that triggers shutdown of this server; cloneable.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Resolves once SIGINT/SIGTERM arrived or shutdown was triggered.
    pub async fn wait_for_signal(&self) {
        self.shutdown.signal().wait().await;
    }

    /// Stop accepting requests, drain in-flight ones and close the pool.
    pub async fn shutdown(self) {
        let api_task = self.api_task;
        let drained = self
            .shutdown
            .shutdown(async move {
                if let Err(e) = api_task.await {
                    error!("REST API server task panicked: {}", e);
                }
            })
            .await;
        if !drained {
            warn!("In-flight requests were abandoned");
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
        info!("User Service shutdown complete");
    }
}
