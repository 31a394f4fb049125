//! HTTP API server
//!
//! Routes:
//! - `POST /translate` - translation with romanization
//! - `POST /pronounce` - MP3 pronunciation of Japanese or Korean text
//! - `GET /status` - analyzer readiness
//! - everything else - static web UI

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use log::{info, warn};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::app_config::ServerConfig;

pub mod handlers;
pub mod types;

pub use handlers::AppState;

/// CORS policy: any origin when the allow-list is empty
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        info!("CORS allowed origins: [*]");
        return cors.allow_origin(Any);
    }

    info!("CORS allowed origins: {:?}", allowed_origins);
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|e| warn!("Ignoring invalid CORS origin '{}': {}", origin, e))
                .ok()
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the application router
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/translate", post(handlers::translate))
        .route("/pronounce", post(handlers::pronounce))
        .route("/status", get(handlers::status));

    if let Some(static_dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(router: Router, config: &ServerConfig) -> Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
