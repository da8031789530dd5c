use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8000/api";
pub const SETTINGS_FILE: &str = "event_page.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.into(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_endpoint {
                    settings.api_endpoint = v;
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    settings.request_timeout_secs = Some(v);
                }
            }
            Err(error) => warn!(file = %file.display(), %error, "ignoring unreadable settings file"),
        }
    }

    if let Some(v) = env("API_ENDPOINT") {
        settings.api_endpoint = v;
    }
    if let Some(v) = env("APP__API_ENDPOINT") {
        settings.api_endpoint = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }

    settings
}

pub fn prepare_api_endpoint(raw_api_endpoint: &str) -> anyhow::Result<String> {
    let endpoint = raw_api_endpoint.trim().trim_end_matches('/');
    if endpoint.is_empty() {
        return Ok(DEFAULT_API_ENDPOINT.to_string());
    }

    let url = Url::parse(endpoint)
        .with_context(|| format!("invalid API endpoint '{endpoint}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "API endpoint '{endpoint}' must use http or https, not '{}'",
            url.scheme()
        );
    }

    Ok(endpoint.to_string())
}
