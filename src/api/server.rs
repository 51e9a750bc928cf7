//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers under `/api`, plus the
//! root health check and the endpoint catalog.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::banner_routes::banner_routes;
use super::config::HttpServerConfig;
use super::dashboard_routes::dashboard_routes;
use super::docs_routes::docs_routes;
use super::expert_image_routes::expert_image_routes;
use super::feedback_routes::feedback_routes;
use super::poster_routes::poster_routes;
use super::template_routes::template_routes;
use super::AppState;

/// HTTP server for the dashboard content API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        let state = Arc::new(AppState::new());

        // Configure CORS from config; no configured origins means
        // permissive (development)
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Machine-readable endpoint catalog
            .merge(docs_routes())
            // Dashboard images under /api/ra-dashboard
            .nest("/api/ra-dashboard", dashboard_routes(state.clone()))
            // Expert image revision under /api/expert
            .nest("/api/expert", expert_image_routes(state.clone()))
            // Admin posters under /api/admin
            .nest("/api/admin", poster_routes(state.clone()))
            // Banners, feedback, and templates directly under /api
            .nest("/api", banner_routes(state.clone()))
            .nest("/api", feedback_routes(state.clone()))
            .nest("/api", template_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e))
        })?;

        tracing::info!(%addr, "ra-dashboard-api listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
