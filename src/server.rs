//! Server bootstrap
//!
//! Wires configuration, the session slot, the identity directory and the
//! clinic dataset into the HTTP router and runs it until shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::{SessionStore, SharedSessionStore};
use crate::config::{AppConfig, SessionStorage};
use crate::infrastructure::{
    clinic_dataset, FileSessionSlot, FixtureDirectory, MemorySessionSlot, SessionSlot,
};
use crate::interfaces::http::modules::metrics::MetricsState;
use crate::interfaces::http::{create_api_router, AppState};
use crate::shared::errors::ServerError;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder once per process. Later calls
/// return the same handle.
fn prometheus_handle() -> PrometheusHandle {
    PROMETHEUS
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                warn!("Prometheus recorder not installed: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}

/// Initialise the global tracing subscriber. `RUST_LOG` overrides the
/// configured level.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.logging.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialised: {}", e);
    }
}

pub struct ServerOptions {
    pub config: AppConfig,
}

fn session_slot(config: &AppConfig) -> Arc<dyn SessionSlot> {
    match config.session.storage {
        SessionStorage::Memory => {
            info!("Session storage: memory (lost on restart)");
            Arc::new(MemorySessionSlot::new())
        }
        SessionStorage::File => {
            let dir = config.session.dir();
            info!("Session storage: {}", dir.display());
            Arc::new(FileSessionSlot::new(dir))
        }
    }
}

/// A running server.
pub struct ServerHandle {
    coordinator: ShutdownCoordinator,
    session: SharedSessionStore,
    local_addr: SocketAddr,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// Bind the listener and start serving in the background.
    pub async fn start(options: ServerOptions) -> Result<Self, ServerError> {
        let config = options.config;
        let metrics = MetricsState {
            handle: prometheus_handle(),
        };

        let session = SessionStore::restore(session_slot(&config), Arc::new(FixtureDirectory::new()))
            .await
            .with_login_latency(config.session.login_latency());
        let session: SharedSessionStore = Arc::new(session);

        let data = Arc::new(clinic_dataset());
        info!(
            "Loaded {} patients, {} appointments, {} invoices, {} inventory items",
            data.patients.len(),
            data.appointments.len(),
            data.invoices.len(),
            data.inventory.len()
        );

        let router = create_api_router(AppState::new(session.clone(), data), metrics);

        let addr = config.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let coordinator = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let signal = coordinator.signal();
        let server_signal = signal.clone();

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    server_signal.wait().await;
                    info!("REST API server received shutdown signal");
                })
                .await;
            if let Err(e) = result {
                error!("REST API server error: {}", e);
            }
            // A server that stopped on its own still releases waiters.
            signal.trigger();
        });

        Ok(Self {
            coordinator,
            session,
            local_addr,
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn session(&self) -> &SharedSessionStore {
        &self.session
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.coordinator.signal()
    }

    /// Trigger shutdown on SIGTERM / SIGINT.
    pub fn install_signal_handler(&self) {
        self.coordinator.start_signal_listener();
    }

    pub fn shutdown(&self) {
        self.coordinator.signal().trigger();
    }

    pub fn is_running(&self) -> bool {
        !self.coordinator.signal().is_triggered() && !self.task.is_finished()
    }

    /// Wait for shutdown, then for in-flight requests to drain within the
    /// configured timeout. Returns `false` if the timeout expired.
    pub async fn wait(self) -> bool {
        let task = self.task;
        let drained = self
            .coordinator
            .shutdown_with_cleanup(|| async move {
                if let Err(e) = task.await {
                    error!("REST API server task panicked: {}", e);
                }
            })
            .await;
        info!("Hospital ERP shutdown complete");
        drained
    }
}
