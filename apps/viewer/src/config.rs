use std::{fs, io::ErrorKind, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/applications";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_url: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `path` if it exists, then environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => Some(raw),
        Err(err) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };

    resolve_settings(raw.as_deref(), |key| std::env::var(key).ok())
        .with_context(|| format!("invalid viewer settings in '{}'", path.display()))
}

fn resolve_settings(
    file_contents: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file_contents {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.api_url {
            settings.api_url = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
    }

    if let Some(v) = env("API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__API_URL") {
        settings.api_url = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

/// Checks that the Records API location is an absolute http(s) URL.
pub fn validate_api_url(raw_api_url: &str) -> anyhow::Result<Url> {
    let api_url = Url::parse(raw_api_url.trim())
        .with_context(|| format!("invalid api url '{raw_api_url}'"))?;

    if !matches!(api_url.scheme(), "http" | "https") {
        bail!(
            "api url '{raw_api_url}' must use http or https, not '{}'",
            api_url.scheme()
        );
    }

    Ok(api_url)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
