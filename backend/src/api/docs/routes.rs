//! Defines the HTTP routes for the documentation viewer.
//!
//! The host page is reachable both as `/docs` and under `/static/`, next to
//! the initializer script it loads.

use super::DocsState;
use super::handlers::{index, initializer_script, viewer_config};
use crate::viewer::page::INITIALIZER_PATH;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;

pub fn docs_router(state: Arc<DocsState>) -> Router {
    Router::new()
        .route("/docs", get(index))
        .route("/static/index.html", get(index))
        .route(INITIALIZER_PATH, get(initializer_script))
        .route("/static/viewer-config.json", get(viewer_config))
        .layer(Extension(state))
}
