// lib/src/config/config_helpers.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use serde_yaml::Value;
use tokio::fs;

use crate::config::config_structs::*;

/// Environment variables that override values from the YAML file.
pub const ENV_HOSPITAL_NAME: &str = "MEDICARE_HOSPITAL_NAME";
pub const ENV_PASSWORD_RESET_DELAY_MS: &str = "MEDICARE_PASSWORD_RESET_DELAY_MS";
pub const ENV_SESSION_TIMEOUT_MINUTES: &str = "MEDICARE_SESSION_TIMEOUT_MINUTES";
pub const ENV_DATA_RETENTION_YEARS: &str = "MEDICARE_DATA_RETENTION_YEARS";
pub const ENV_MAINTENANCE_MODE: &str = "MEDICARE_MAINTENANCE_MODE";
pub const ENV_TOAST_CAPACITY: &str = "MEDICARE_TOAST_CAPACITY";
pub const ENV_LOAD_DEMO_DATA: &str = "MEDICARE_LOAD_DEMO_DATA";

/// Parses the YAML document. Missing sections and keys fall back to defaults.
pub fn parse_app_config(config_content: &str) -> Result<AppConfig> {
    if config_content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let wrapper: AppConfigWrapper = serde_yaml::from_str(config_content).map_err(|e| {
        error!("YAML parsing error for MediCare config: {:?}", e);
        if let Ok(partial) = serde_yaml::from_str::<Value>(config_content) {
            error!("Partial YAML parse: {:?}", partial);
        }
        anyhow!("Failed to parse MediCare config YAML: {}", e)
    })?;
    Ok(wrapper.medicare)
}

/// Loads the configuration from `config_file_path`, or the default path.
///
/// A missing file is not an error: the defaults are used. Environment
/// overrides are applied afterwards and the result is validated.
pub async fn load_app_config(config_file_path: Option<&str>) -> Result<AppConfig> {
    let path_to_use = config_file_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH_RELATIVE));

    info!("Attempting to load MediCare config from {:?}", path_to_use);

    let mut config = if fs::try_exists(&path_to_use).await.unwrap_or(false) {
        let config_content = fs::read_to_string(&path_to_use)
            .await
            .context(format!("Failed to read MediCare config file: {}", path_to_use.display()))?;
        debug!("MediCare config content: {}", config_content);
        parse_app_config(&config_content)?
    } else {
        warn!("Config file not found at {}. Using default MediCare config.", path_to_use.display());
        AppConfig::default()
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate_app_config(&config)?;
    info!("Loaded MediCare config: {:?}", config);
    Ok(config)
}

/// Writes `config` as YAML, creating parent directories as needed.
pub async fn save_app_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create config directory {}", parent.display()))?;
        }
    }
    let wrapper = AppConfigWrapper { medicare: config.clone() };
    let content = serde_yaml::to_string(&wrapper).context("Failed to serialize MediCare config")?;
    fs::write(path, content)
        .await
        .context(format!("Failed to write MediCare config to {}", path.display()))?;
    info!("Saved MediCare config to {:?}", path);
    Ok(())
}

/// Applies `MEDICARE_*` overrides. `lookup` is usually `std::env::var`.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = lookup(ENV_HOSPITAL_NAME) {
        debug!("{} overrides hospital name", ENV_HOSPITAL_NAME);
        config.hospital.name = name;
    }
    if let Some(v) = parse_env(&lookup, ENV_PASSWORD_RESET_DELAY_MS)? {
        config.password_reset.delay_ms = v;
    }
    if let Some(v) = parse_env(&lookup, ENV_SESSION_TIMEOUT_MINUTES)? {
        config.system.session_timeout_minutes = v;
    }
    if let Some(v) = parse_env(&lookup, ENV_DATA_RETENTION_YEARS)? {
        config.system.data_retention_years = v;
    }
    if let Some(v) = parse_env(&lookup, ENV_MAINTENANCE_MODE)? {
        config.system.maintenance_mode = v;
    }
    if let Some(v) = parse_env(&lookup, ENV_TOAST_CAPACITY)? {
        config.toasts.capacity = v;
    }
    if let Some(v) = parse_env(&lookup, ENV_LOAD_DEMO_DATA)? {
        config.seed.load_demo_data = v;
    }
    Ok(())
}

fn parse_env<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => {
            debug!("{} overrides config with {:?}", key, raw);
            raw.trim()
                .parse::<T>()
                .map(Some)
                .map_err(|_| anyhow!("Invalid value {:?} for {}", raw, key))
        }
    }
}

pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.system.session_timeout_minutes == 0 {
        return Err(anyhow!("system.session_timeout_minutes must be greater than zero"));
    }
    if config.system.data_retention_years == 0 {
        return Err(anyhow!("system.data_retention_years must be greater than zero"));
    }
    if config.toasts.capacity == 0 {
        return Err(anyhow!("toasts.capacity must be greater than zero"));
    }
    Ok(())
}
