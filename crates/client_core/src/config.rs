use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, bail, Context};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

const DEFAULT_TABLE: &str = "facts";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
const LOCAL_CONFIG_FILE: &str = "facts_today.toml";

/// Connection settings for the hosted fact store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub store_url: String,
    pub anon_key: String,
    pub table: String,
    pub request_timeout_secs: u64,
}

impl StoreSettings {
    pub fn new(store_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            store_url: normalize_store_url(&store_url.into()),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub store_url: Option<String>,
    pub anon_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    store_url: Option<String>,
    anon_key: Option<String>,
    table: String,
    request_timeout_secs: u64,
}

/// Loads settings from `config_path` (or the default locations) layered under
/// `APP__*` environment variables and the conventional `SUPABASE_URL` /
/// `SUPABASE_ANON_KEY` fallbacks.
pub fn load_settings(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
) -> anyhow::Result<StoreSettings> {
    let env: HashMap<String, String> = std::env::vars().collect();
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path(),
    };
    load_settings_with_env(path.as_deref(), overrides, &env)
}

pub(crate) fn load_settings_with_env(
    config_path: Option<&Path>,
    overrides: &SettingsOverrides,
    env: &HashMap<String, String>,
) -> anyhow::Result<StoreSettings> {
    let app_env: HashMap<String, String> = env
        .iter()
        .filter(|(key, _)| key.starts_with("APP__"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let mut builder = Config::builder()
        .set_default("table", DEFAULT_TABLE)?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?;

    if let Some(path) = config_path {
        let path_str = path.to_string_lossy();
        let file = File::new(&path_str, FileFormat::Toml).required(false);
        builder = builder.add_source(file);
    }

    let raw: RawSettings = builder
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .source(Some(app_env))
                .try_parsing(true),
        )
        .set_override_option("store_url", overrides.store_url.clone())?
        .set_override_option("anon_key", overrides.anon_key.clone())?
        .build()
        .context("failed to assemble fact store settings")?
        .try_deserialize()
        .context("invalid fact store settings")?;

    let store_url = raw
        .store_url
        .filter(|v| !v.trim().is_empty())
        .or_else(|| non_empty(env.get("SUPABASE_URL")))
        .ok_or_else(|| {
            anyhow!("fact store URL is not configured; set APP__STORE_URL or SUPABASE_URL")
        })?;
    let anon_key = raw
        .anon_key
        .filter(|v| !v.trim().is_empty())
        .or_else(|| non_empty(env.get("SUPABASE_ANON_KEY")))
        .ok_or_else(|| {
            anyhow!("fact store key is not configured; set APP__ANON_KEY or SUPABASE_ANON_KEY")
        })?;

    let store_url = normalize_store_url(&store_url);
    validate_store_url(&store_url)?;
    if raw.table.trim().is_empty() {
        bail!("fact store table name must not be empty");
    }

    Ok(StoreSettings {
        store_url,
        anon_key: anon_key.trim().to_string(),
        table: raw.table.trim().to_string(),
        request_timeout_secs: raw.request_timeout_secs,
    })
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

fn normalize_store_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn validate_store_url(store_url: &str) -> anyhow::Result<()> {
    let parsed = url::Url::parse(store_url)
        .with_context(|| format!("fact store URL '{store_url}' is not a valid URL"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("fact store URL must use http or https, got '{other}'"),
    }
}

fn default_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("facts_today").join("config.toml"))
        .filter(|path| path.exists())
}
