//! Configuration file loading and layering for the volcanoyt CLI.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use volcanoyt_versions::{CacheBust, PollSettings, Service};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "volcanoyt.toml";

/// Config file format. Every key is optional.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub poll: PollConfig,
    /// Keyed by service key (`web-map`, `android-app`, `web-portal`, `api`).
    #[serde(default)]
    pub services: BTreeMap<String, ServiceConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    pub interval_secs: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}

/// Per-service overrides of the built-in endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub url: Option<String>,
    pub field: Option<String>,
    pub cache_bust: Option<CacheBust>,
    pub enabled: Option<bool>,
}

/// CLI options that can override config file settings.
///
/// Keeps the resolution logic independent of the clap types in `main`.
pub trait CliOptions {
    fn config(&self) -> Option<PathBuf>;
    fn interval_secs(&self) -> Option<u64>;
    fn request_timeout_ms(&self) -> Option<u64>;
}

/// Load a TOML or JSON config (picked by extension, TOML otherwise).
///
/// A missing file is not an error.
pub fn load_config(path: &Path) -> Result<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cfg: FileConfig = match ext.as_str() {
        "json" => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json config {}", path.display()))?,
        _ => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?,
    };
    Ok(Some(cfg))
}

/// Config file named by `--config`, or the default one when present.
pub fn config_path<C: CliOptions>(cli: &C) -> PathBuf {
    cli.config()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Resolve poll settings from CLI options, config file and defaults.
///
/// CLI options take precedence over config file settings.
pub fn resolve_settings<C: CliOptions>(cli: &C, config: Option<&FileConfig>) -> Result<PollSettings> {
    let defaults = PollSettings::default();
    let poll = config.map(|c| &c.poll);

    let interval = match cli
        .interval_secs()
        .or_else(|| poll.and_then(|p| p.interval_secs))
    {
        Some(0) => bail!("poll interval must be at least one second"),
        Some(secs) => Duration::from_secs(secs),
        None => defaults.interval,
    };

    let request_timeout = match cli
        .request_timeout_ms()
        .or_else(|| poll.and_then(|p| p.request_timeout_ms))
    {
        Some(0) => bail!("request timeout must be greater than zero"),
        Some(ms) => Duration::from_millis(ms),
        None => defaults.request_timeout,
    };

    let mut endpoints = defaults.endpoints.clone();
    if let Some(cfg) = config {
        for (key, overrides) in &cfg.services {
            let service: Service = key
                .parse()
                .map_err(|e| anyhow!("invalid [services] entry: {e}"))?;

            if overrides.enabled == Some(false) {
                endpoints.retain(|ep| ep.service != service);
                continue;
            }

            let Some(endpoint) = endpoints.iter_mut().find(|ep| ep.service == service) else {
                continue;
            };
            if let Some(url) = &overrides.url {
                endpoint.url = url.clone();
            }
            if let Some(field) = &overrides.field {
                endpoint.field = field.clone();
            }
            if let Some(cache_bust) = &overrides.cache_bust {
                endpoint.cache_bust = cache_bust.clone();
            }
        }
    }

    Ok(defaults
        .with_interval(interval)
        .with_request_timeout(request_timeout)
        .with_endpoints(endpoints))
}
