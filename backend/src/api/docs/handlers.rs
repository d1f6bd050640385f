//! Handler functions for the documentation viewer.
//!
//! Each request is a fresh page load: the origin is resolved from the
//! request, the viewer is bootstrapped once, and the relevant artifact is
//! returned.

use super::DocsState;
use crate::api::common::viewer_error_to_http;
use crate::viewer::{ViewerConfig, bootstrap, page};
use axum::{
    extract::{Extension, Json},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse},
};
use std::sync::Arc;

/// Serves the host page for the viewer bundle.
pub async fn index(Extension(state): Extension<Arc<DocsState>>) -> Html<String> {
    Html(page::index_page(&state.title, &state.bundle_base_url))
}

/// Serves the initializer script for the requesting page's origin.
pub async fn initializer_script(
    Extension(state): Extension<Arc<DocsState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let origin = state.resolve_origin(&headers).map_err(|e| {
        tracing::warn!("Rejected viewer initializer request: {}", e);
        viewer_error_to_http(e)
    })?;

    let handle = bootstrap(&origin, &state.renderer).map_err(viewer_error_to_http)?;
    tracing::info!(
        "Serving viewer initializer for {} ({} documents)",
        origin,
        handle.config().urls.len()
    );

    Ok((
        [(CONTENT_TYPE, "application/javascript; charset=utf-8")],
        handle.into_instance(),
    ))
}

/// Returns the viewer configuration the initializer would construct.
pub async fn viewer_config(
    Extension(state): Extension<Arc<DocsState>>,
    headers: HeaderMap,
) -> Result<Json<ViewerConfig>, (StatusCode, String)> {
    let origin = state
        .resolve_origin(&headers)
        .map_err(viewer_error_to_http)?;

    let handle = bootstrap(&origin, &state.renderer).map_err(viewer_error_to_http)?;
    Ok(Json(handle.config().clone()))
}
