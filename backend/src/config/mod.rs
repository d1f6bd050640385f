//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the server port, whether the documentation viewer is exposed, and where
//! the viewer bundle's assets are loaded from.

use crate::viewer::Origin;
use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BUNDLE_BASE_URL: &str = "https://unpkg.com/swagger-ui-dist@5";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub service_name: String,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub enable: bool,
    /// Fixed origin for document URLs; derived per request when unset.
    pub public_origin: Option<Origin>,
    pub bundle_base_url: String,
}

impl Default for SwaggerConfig {
    fn default() -> Self {
        Self {
            enable: true,
            public_origin: None,
            bundle_base_url: DEFAULT_BUNDLE_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "API Docs".to_string());

        let enable = match lookup("SWAGGER_ENABLE") {
            Some(value) => parse_bool(&value).context("SWAGGER_ENABLE must be true or false")?,
            None => true,
        };

        let public_origin = lookup("PUBLIC_ORIGIN")
            .filter(|value| !value.trim().is_empty())
            .map(|value| Origin::parse(&value))
            .transpose()
            .context("PUBLIC_ORIGIN must be an http(s) origin without a path")?;

        let bundle_base_url = lookup("SWAGGER_UI_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUNDLE_BASE_URL.to_string());

        Ok(Config {
            server_port,
            service_name,
            swagger: SwaggerConfig {
                enable,
                public_origin,
                bundle_base_url,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{}'", other),
    }
}
