// Campus Notify web front-end
// Pages and a small JSON API over the in-memory notification history

pub mod config;
pub mod error_handling;
pub mod handlers;
pub mod routes;
pub mod templates;

pub use config::WebConfig;
pub use error_handling::{AppError, AppResult};

use axum::{routing::get, Router};
use campus_notify_core::{EmergencyNotifier, History, OutputSink, Registry, StdoutSink, UserTable};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Main application state
#[derive(Clone)]
pub struct AppState {
    pub config: WebConfig,
    pub history: Arc<History>,
    pub registry: Arc<Registry>,
    pub users: Arc<UserTable>,
    pub notifier: Arc<EmergencyNotifier>,
    pub sink: Arc<dyn OutputSink>,
}

impl AppState {
    /// State for a server process. Deliveries go to stdout.
    pub fn new(config: WebConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    pub fn with_sink(config: WebConfig, sink: Arc<dyn OutputSink>) -> Self {
        let registry = Registry::builtin();
        tracing::info!(
            types = ?registry.names(),
            "Notification types registered"
        );

        Self {
            config,
            history: Arc::new(History::new()),
            registry: Arc::new(registry),
            users: Arc::new(UserTable::demo()),
            notifier: Arc::new(EmergencyNotifier::default()),
            sink,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(routes::page_routes())
        .nest("/api", routes::api_routes())
        .fallback(error_handling::handle_404)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(error_handling::trace_request))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(config: WebConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = create_app(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    println!("🚀 Campus Notify running on http://{}", addr);
    tracing::info!(%addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
