// SPDX-License-Identifier: MIT
//
// Configuration file for the `fern` binary.
//
//   log-level = "info"
//
//   [delivery]
//   endpoint = "https://api.sendfern.com/v1/send"
//   api-token = "..."
//
//   [render]
//   theme = "modern"
//   brand-color = "#10b981"
//
// Every key is optional. Render defaults only fill fields the request
// leaves unset.

use std::path::Path;

use eyre::WrapErr;
use fern_render::EmailRequest;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Configuration {
    /// Fallback filter when `RUST_LOG` is not set.
    pub log_level: Option<String>,
    pub delivery: Delivery,
    pub render: RenderDefaults,
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Delivery {
    pub endpoint: String,
    pub api_token: Option<String>,
}

impl Default for Delivery {
    fn default() -> Self {
        Self {
            endpoint: fern_send::DEFAULT_ENDPOINT.to_string(),
            api_token: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderDefaults {
    pub theme: Option<String>,
    pub brand_color: Option<String>,
}

impl Configuration {
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> eyre::Result<Self> {
        toml::from_str(content).map_err(eyre::Report::from)
    }
}

impl RenderDefaults {
    /// Fill request fields the caller left unset.
    pub fn apply(&self, request: &mut EmailRequest) {
        if request.theme.is_none() {
            request.theme.clone_from(&self.theme);
        }
        if request.brand_color.is_none() {
            request.brand_color.clone_from(&self.brand_color);
        }
    }
}
