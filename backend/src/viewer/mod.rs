//! Typed configuration for the API documentation viewer.
//!
//! The viewer UI itself is an external bundle; this module only describes
//! what gets handed to it: which documents to offer, where to mount, and
//! which bundle capabilities to switch on.

use crate::errors::{ViewerError, ViewerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

pub mod bootstrap;
pub mod origin;
pub mod page;
pub mod renderer;

pub use bootstrap::bootstrap;
pub use origin::Origin;
pub use renderer::{Renderer, ScriptRenderer};

/// DOM selector of the element the viewer renders into.
pub const MOUNT_POINT: &str = "#swagger-ui";

/// Known documents, as `(name, path suffix)` in display order.
pub const DEFAULT_SOURCES: [(&str, &str); 3] = [
    ("v1", "/openapi3.json"),
    ("v2", "/v2_openapi3.json"),
    ("backyard v1", "/backyard_openapi3.json"),
];

/// A named URL pointing to a machine-readable API description document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DocumentSource {
    /// Label shown in the viewer's document selector.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Absolute URL the viewer fetches the document from.
    #[validate(url(message = "url must be an absolute URL"))]
    pub url: String,
}

impl DocumentSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Ordered list of document sources with unique names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentSourceList(Vec<DocumentSource>);

impl DocumentSourceList {
    /// Validates and wraps an arbitrary list of sources.
    pub fn new(sources: Vec<DocumentSource>) -> ViewerResult<Self> {
        if sources.is_empty() {
            return Err(ViewerError::EmptySources);
        }

        let mut seen = HashSet::with_capacity(sources.len());
        for source in &sources {
            source.validate().map_err(|errors| {
                let message = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| match &e.message {
                            Some(msg) => msg.to_string(),
                            None => format!("{} is invalid", field),
                        })
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                ViewerError::invalid_source(&source.name, message)
            })?;

            if !seen.insert(source.name.as_str()) {
                return Err(ViewerError::duplicate_source_name(&source.name));
            }
        }

        Ok(Self(sources))
    }

    /// The fixed document set, resolved against `origin`.
    pub fn defaults_for(origin: &Origin) -> ViewerResult<Self> {
        Self::new(
            DEFAULT_SOURCES
                .iter()
                .map(|(name, suffix)| DocumentSource::new(*name, origin.join(suffix)))
                .collect(),
        )
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentSource> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

}

/// Builds the default document list for a page served from `origin`.
pub fn default_sources(origin: &Origin) -> ViewerResult<DocumentSourceList> {
    DocumentSourceList::defaults_for(origin)
}

/// UI presets understood by the viewer bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Core API rendering preset.
    Apis,
    /// Standalone preset providing the top bar and document selector.
    Standalone,
}

/// Plugins understood by the viewer bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plugin {
    /// Lets the viewer download documents by URL.
    DownloadUrl,
}

/// Top-level layout component of the viewer bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    StandaloneLayout,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::StandaloneLayout => "StandaloneLayout",
        }
    }
}

/// Everything the viewer bundle is constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerConfig {
    pub urls: DocumentSourceList,
    pub dom_id: String,
    #[serde(rename = "deepLinking")]
    pub deep_linking: bool,
    pub presets: Vec<Preset>,
    pub plugins: Vec<Plugin>,
    pub layout: Layout,
}

impl ViewerConfig {
    /// The standard viewer configuration for a page served from `origin`.
    pub fn for_origin(origin: &Origin) -> ViewerResult<Self> {
        Ok(Self::with_sources(default_sources(origin)?))
    }

    pub fn with_sources(urls: DocumentSourceList) -> Self {
        Self {
            urls,
            dom_id: MOUNT_POINT.to_string(),
            deep_linking: true,
            presets: vec![Preset::Apis, Preset::Standalone],
            plugins: vec![Plugin::DownloadUrl],
            layout: Layout::StandaloneLayout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Origin {
        Origin::parse("https://api.example.com").unwrap()
    }

    #[test]
    fn test_default_sources_order_and_urls() {
        let sources = default_sources(&origin()).unwrap();
        let pairs: Vec<(&str, &str)> = sources
            .iter()
            .map(|s| (s.name.as_str(), s.url.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("v1", "https://api.example.com/openapi3.json"),
                ("v2", "https://api.example.com/v2_openapi3.json"),
                ("backyard v1", "https://api.example.com/backyard_openapi3.json"),
            ]
        );
    }

    #[test]
    fn test_default_sources_are_recomputed_per_origin() {
        let local = Origin::parse("http://localhost:3000").unwrap();
        let sources = default_sources(&local).unwrap();
        assert_eq!(
            sources.iter().find(|s| s.name == "v2").map(|s| s.url.as_str()),
            Some("http://localhost:3000/v2_openapi3.json")
        );
        assert_ne!(sources, default_sources(&origin()).unwrap());
    }

    #[test]
    fn test_default_sources_pass_validation() {
        let sources = default_sources(&origin()).unwrap();
        assert_eq!(sources.len(), DEFAULT_SOURCES.len());
        for source in sources.iter() {
            assert!(source.validate().is_ok());
        }

        let rebuilt = DocumentSourceList::new(sources.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, sources);
    }

    #[test]
    fn test_viewer_config_fields() {
        let config = ViewerConfig::for_origin(&origin()).unwrap();
        assert_eq!(config.dom_id, "#swagger-ui");
        assert!(config.deep_linking);
        assert_eq!(config.presets, vec![Preset::Apis, Preset::Standalone]);
        assert_eq!(config.plugins, vec![Plugin::DownloadUrl]);
        assert_eq!(config.layout, Layout::StandaloneLayout);
        assert_eq!(config.urls.len(), 3);
    }

    #[test]
    fn test_viewer_config_serializes_with_bundle_field_names() {
        let value = serde_json::to_value(ViewerConfig::for_origin(&origin()).unwrap()).unwrap();
        assert_eq!(value["dom_id"], "#swagger-ui");
        assert_eq!(value["deepLinking"], true);
        assert_eq!(value["layout"], "StandaloneLayout");
        assert_eq!(value["presets"], serde_json::json!(["apis", "standalone"]));
        assert_eq!(value["plugins"], serde_json::json!(["DownloadUrl"]));
        assert_eq!(value["urls"][0]["name"], "v1");
        assert_eq!(
            value["urls"][0]["url"],
            "https://api.example.com/openapi3.json"
        );
    }

    #[test]
    fn test_source_list_rejects_duplicates() {
        let result = DocumentSourceList::new(vec![
            DocumentSource::new("v1", "https://a.example.com/openapi3.json"),
            DocumentSource::new("v1", "https://b.example.com/openapi3.json"),
        ]);
        assert_eq!(result, Err(ViewerError::duplicate_source_name("v1")));
    }

    #[test]
    fn test_source_list_rejects_empty_and_invalid_entries() {
        assert_eq!(DocumentSourceList::new(vec![]), Err(ViewerError::EmptySources));

        let result = DocumentSourceList::new(vec![DocumentSource::new("v1", "openapi3.json")]);
        assert!(matches!(result, Err(ViewerError::InvalidSource { .. })));

        let result = DocumentSourceList::new(vec![DocumentSource::new(
            "",
            "https://a.example.com/openapi3.json",
        )]);
        assert!(matches!(result, Err(ViewerError::InvalidSource { .. })));
    }

    #[test]
    fn test_source_list_accepts_custom_sources() {
        let list = DocumentSourceList::new(vec![DocumentSource::new(
            "internal",
            "https://internal.example.com/openapi3.json",
        )])
        .unwrap();
        let config = ViewerConfig::with_sources(list);
        assert_eq!(config.urls.iter().next().unwrap().name, "internal");
    }
}
