//! Trade Gateway
//!
//! HTTP front end for the trade CSV analyzer.
//! Features:
//! - Multipart CSV upload returning statistics and normalized trades
//! - Cookie sessions for login, registration and logout
//! - Login page and dashboard
//! - Request logging, CORS and health checks

#![allow(missing_docs)]

use anyhow::Result;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod session;

pub use config::{CorsConfig, GatewayConfig, MonitoringConfig, ServerConfig, SessionConfig};
pub use error::{ApiError, ApiResult};
pub use server::{TradeGatewayServer, build_router};

/// Start the trade gateway server
pub async fn start_server(config: GatewayConfig) -> Result<()> {
    TradeGatewayServer::new(config).start().await
}
