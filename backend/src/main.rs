//! Main entry point for the API documentation backend.
//!
//! This file initializes the Axum web server, loads configuration, and
//! registers the liveness routes and, when enabled, the documentation viewer.

mod api;
mod config;
mod errors;
mod viewer;

use crate::api::common::ApiResponse;
use anyhow::{Context, Result};
use api::docs::{DocsState, routes::docs_router};
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::init;

#[derive(Debug, Clone)]
struct ServiceInfo {
    name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init();

    let config = Config::from_env()?;
    let app = app(&config);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;

    info!(
        "Starting {} on port {} (docs viewer {})",
        config.service_name,
        config.server_port,
        if config.swagger.enable { "enabled" } else { "disabled" }
    );
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn app(config: &Config) -> Router {
    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/ping", get(ping_handler));

    if config.swagger.enable {
        app = app.merge(docs_router(Arc::new(DocsState::from_config(config))));
    }

    app.layer(Extension(ServiceInfo {
        name: config.service_name.clone(),
    }))
}

async fn root_handler(
    Extension(service): Extension<ServiceInfo>,
) -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": service.name,
            "version": env!("CARGO_PKG_VERSION")
        }),
        format!("Welcome to {}", service.name),
    ))
}

async fn ping_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}
