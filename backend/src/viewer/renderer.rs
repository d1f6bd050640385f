//! Rendering seam between the typed config and the external viewer bundle.

use super::{Plugin, Preset, ViewerConfig};
use crate::errors::{ViewerError, ViewerResult};

/// Something that turns a [`ViewerConfig`] into a live viewer instance.
pub trait Renderer {
    type Instance;

    fn render(&self, config: &ViewerConfig) -> ViewerResult<Self::Instance>;
}

/// Emits the browser initializer that constructs the viewer bundle on
/// `window.onload` and publishes it as `window.<handle>`.
#[derive(Debug, Clone)]
pub struct ScriptRenderer {
    handle: String,
}

impl Default for ScriptRenderer {
    fn default() -> Self {
        Self {
            handle: "ui".to_string(),
        }
    }
}

impl ScriptRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Expression the bundle exposes for a preset.
pub fn preset_expr(preset: Preset) -> &'static str {
    match preset {
        Preset::Apis => "SwaggerUIBundle.presets.apis",
        Preset::Standalone => "SwaggerUIStandalonePreset",
    }
}

/// Expression the bundle exposes for a plugin.
pub fn plugin_expr(plugin: Plugin) -> &'static str {
    match plugin {
        Plugin::DownloadUrl => "SwaggerUIBundle.plugins.DownloadUrl",
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> ViewerResult<String> {
    serde_json::to_string(value).map_err(|e| ViewerError::render(e.to_string()))
}

fn expr_list(exprs: impl Iterator<Item = &'static str>) -> String {
    exprs
        .map(|e| format!("      {}", e))
        .collect::<Vec<_>>()
        .join(",\n")
}

impl Renderer for ScriptRenderer {
    type Instance = String;

    fn render(&self, config: &ViewerConfig) -> ViewerResult<String> {
        let urls = config
            .urls
            .iter()
            .map(|source| -> ViewerResult<String> {
                Ok(format!(
                    "      {{\n        name: {},\n        url: {},\n      }}",
                    to_js(&source.name)?,
                    to_js(&source.url)?
                ))
            })
            .collect::<ViewerResult<Vec<_>>>()?
            .join(",\n");

        let presets = expr_list(config.presets.iter().map(|p| preset_expr(*p)));
        let plugins = expr_list(config.plugins.iter().map(|p| plugin_expr(*p)));

        Ok(format!(
            "window.onload = function () {{\n  \
             window.{handle} = SwaggerUIBundle({{\n    \
             urls: [\n{urls}\n    ],\n    \
             dom_id: {dom_id},\n    \
             deepLinking: {deep_linking},\n    \
             presets: [\n{presets}\n    ],\n    \
             plugins: [\n{plugins}\n    ],\n    \
             layout: {layout}\n  \
             }});\n\
             }};\n",
            handle = self.handle,
            urls = urls,
            dom_id = to_js(&config.dom_id)?,
            deep_linking = config.deep_linking,
            presets = presets,
            plugins = plugins,
            layout = to_js(config.layout.as_str())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewer::{DocumentSource, DocumentSourceList, Origin};

    #[test]
    fn test_script_contains_bundle_call() {
        let origin = Origin::parse("https://api.example.com").unwrap();
        let script = ScriptRenderer::new()
            .render(&ViewerConfig::for_origin(&origin).unwrap())
            .unwrap();

        assert!(script.starts_with("window.onload = function () {"));
        assert!(script.contains("window.ui = SwaggerUIBundle({"));
        assert!(script.contains("url: \"https://api.example.com/openapi3.json\""));
        assert!(script.contains("name: \"backyard v1\""));
        assert!(script.contains("dom_id: \"#swagger-ui\""));
        assert!(script.contains("deepLinking: true"));
        assert!(script.contains("layout: \"StandaloneLayout\""));
    }

    #[test]
    fn test_script_keeps_capability_order() {
        let origin = Origin::parse("http://localhost:3000").unwrap();
        let script = ScriptRenderer::new()
            .render(&ViewerConfig::for_origin(&origin).unwrap())
            .unwrap();

        let apis = script.find("SwaggerUIBundle.presets.apis").unwrap();
        let standalone = script.find("SwaggerUIStandalonePreset").unwrap();
        let download = script.find("SwaggerUIBundle.plugins.DownloadUrl").unwrap();
        assert!(apis < standalone);
        assert!(standalone < download);

        let v1 = script.find("/openapi3.json").unwrap();
        let v2 = script.find("/v2_openapi3.json").unwrap();
        let backyard = script.find("/backyard_openapi3.json").unwrap();
        assert!(v1 < v2 && v2 < backyard);
    }

    #[test]
    fn test_script_escapes_source_names() {
        let sources = DocumentSourceList::new(vec![DocumentSource::new(
            "quote\" name",
            "https://api.example.com/openapi3.json",
        )])
        .unwrap();
        let script = ScriptRenderer::new()
            .render(&ViewerConfig::with_sources(sources))
            .unwrap();
        assert!(script.contains(r#"name: "quote\" name""#));
    }
}
