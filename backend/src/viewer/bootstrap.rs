//! Page-load bootstrap of the documentation viewer.
//!
//! Builds the viewer configuration for the page's origin and hands it to a
//! [`Renderer`] exactly once. The resulting instance is returned as an owned
//! [`ViewerHandle`] instead of being published globally; callers pass the
//! handle to whatever needs to reference the viewer.

use super::{Origin, Renderer, ViewerConfig};
use crate::errors::ViewerResult;
use tracing::debug;

/// Owned result of bootstrapping a viewer.
#[derive(Debug, Clone)]
pub struct ViewerHandle<I> {
    config: ViewerConfig,
    instance: I,
}

impl<I> ViewerHandle<I> {
    /// Configuration the viewer was constructed with.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn into_instance(self) -> I {
        self.instance
    }
}

/// Constructs the viewer for a page served from `origin`.
pub fn bootstrap<R: Renderer>(origin: &Origin, renderer: &R) -> ViewerResult<ViewerHandle<R::Instance>> {
    let config = ViewerConfig::for_origin(origin)?;
    debug!(
        "Bootstrapping viewer for {} with {} document sources",
        origin,
        config.urls.len()
    );

    let instance = renderer.render(&config)?;
    Ok(ViewerHandle { config, instance })
}
