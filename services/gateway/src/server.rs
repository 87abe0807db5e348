//! Trade gateway server implementation

use anyhow::Result;
use axum::{
    Router,
    extract::{DefaultBodyLimit, FromRef},
    middleware,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc, time::Instant};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};
use trade_reporting::TradeAnalyzer;

use crate::{
    config::GatewayConfig,
    handlers::{AuthHandlers, HealthHandlers, PageHandlers, UploadHandlers},
    middleware::{create_cors_layer, logging_middleware},
};

/// Unified application state, split into per-handler state via `FromRef`
#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth_handlers: AuthHandlers,
    pub upload_handlers: UploadHandlers,
    pub page_handlers: PageHandlers,
    pub health_handlers: HealthHandlers,
}

impl AppState {
    #[must_use]
    pub fn new(config: &GatewayConfig, start_time: Instant) -> Self {
        let session = Arc::new(config.session.clone());
        let analyzer = Arc::new(TradeAnalyzer::new(config.columns.clone()));

        Self {
            auth_handlers: AuthHandlers::new(Arc::clone(&session)),
            upload_handlers: UploadHandlers::new(analyzer),
            page_handlers: PageHandlers::new(session),
            health_handlers: HealthHandlers::new(start_time),
        }
    }
}

/// Build the router with all routes and middleware
pub fn build_router(config: &GatewayConfig, start_time: Instant) -> Router {
    let mut app = Router::new()
        // Pages
        .route("/", get(PageHandlers::index))
        .route("/dashboard", get(PageHandlers::dashboard))
        // Session endpoints
        .route("/api/register", post(AuthHandlers::register))
        .route("/api/login", post(AuthHandlers::login))
        .route("/api/logout", post(AuthHandlers::logout))
        // Trade analysis
        .route("/api/upload", post(UploadHandlers::upload))
        // Monitoring
        .route(&config.monitoring.health_path, get(HealthHandlers::health_check))
        .with_state(AppState::new(config, start_time))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(
            config.server.timeout_seconds,
        )))
        .layer(middleware::from_fn(logging_middleware));

    if config.monitoring.tracing_enabled {
        app = app.layer(TraceLayer::new_for_http());
    }
    if config.server.compression {
        app = app.layer(CompressionLayer::new());
    }
    if config.cors.enabled {
        app = app.layer(create_cors_layer(&config.cors));
    }

    app
}

/// Trade gateway server
pub struct TradeGatewayServer {
    config: GatewayConfig,
    start_time: Instant,
}

impl TradeGatewayServer {
    /// Create a new server
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        info!("Initializing trade gateway server");
        Self {
            config,
            start_time: Instant::now(),
        }
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = match self.config.server_address().parse() {
            Ok(addr) => addr,
            Err(e) => {
                error!(
                    "Invalid server address '{}': {}",
                    self.config.server_address(),
                    e
                );
                return Err(anyhow::anyhow!("Invalid server address: {}", e));
            }
        };

        let app = build_router(&self.config, self.start_time);
        info!("Gateway routes configured successfully");

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => {
                info!("Trade gateway listening on {}", addr);
                listener
            }
            Err(e) => {
                error!("Failed to bind TCP listener to {}: {}", addr, e);
                return Err(anyhow::anyhow!("Failed to bind to address {}: {}", addr, e));
            }
        };

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server encountered a fatal error: {}", e);
            return Err(anyhow::anyhow!("Server error: {}", e));
        }

        Ok(())
    }
}

/// API route documentation
pub fn print_routes() {
    println!("Trade Gateway Routes:");
    println!("=====================");
    println!();
    println!("Pages:");
    println!("  GET  /                - Login / registration page");
    println!("  GET  /dashboard       - Upload form and results (session required)");
    println!();
    println!("Session:");
    println!("  POST /api/register    - Register and start a session");
    println!("  POST /api/login       - Log in and start a session");
    println!("  POST /api/logout      - Clear the session cookie");
    println!();
    println!("Analysis:");
    println!("  POST /api/upload      - Multipart CSV upload (field `file`)");
    println!();
    println!("Monitoring:");
    println!("  GET  /health          - Health check");
}
