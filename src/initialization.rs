use std::fs;
use std::path::{Path, PathBuf};
use clap::Parser;
use log::info;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

/// Longest page refresh interval accepted, one day
const MAX_REFRESH_MINUTES: u32 = 24 * 60;

/// Weather page server for e-readers, backed by api.weather.gov
#[derive(Parser, Debug)]
#[command(name = "nookweather")]
#[command(version)]
pub struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LocationConfig {
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NwsConfig {
    #[serde(default = "default_nws_url")]
    pub base_url: String,
    pub contact: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self { base_url: default_geocoding_url() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WebServer {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,
    #[serde(default = "default_refresh")]
    pub refresh_minutes: u32,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct General {
    pub log_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_to_stdout: bool,
    pub icon_table: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub location: LocationConfig,
    pub nws: NwsConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    pub web_server: WebServer,
    pub general: General,
}

fn default_country() -> String { "US".to_string() }
fn default_nws_url() -> String { "https://api.weather.gov".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_geocoding_url() -> String { "https://nominatim.openstreetmap.org".to_string() }
fn default_bind_address() -> String { "0.0.0.0".to_string() }
fn default_bind_port() -> u16 { 3099 }
fn default_refresh() -> u32 { 15 }
fn default_static_dir() -> String { "static".to_string() }
fn default_log_level() -> String { "info".to_string() }

/// Loads the configuration and sets up logging
///
/// The config file is given with `--config <path>` and defaults to `config.toml`
pub fn config() -> Result<Config, ConfigError> {
    let args = Args::parse();

    let config = load_config(&args.config)?;
    setup_logger(&config.general.log_path, &config.general.log_level, config.general.log_to_stdout)?;

    info!("configuration loaded from {}", args.config.display());
    Ok(config)
}

/// Reads and validates the configuration file
///
/// # Arguments
///
/// * 'config_path' - path to the config file
pub fn load_config(config_path: &Path) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)
        .map_err(|e| ConfigError(format!("unable to read {}: {}", config_path.display(), e)))?;

    parse_config(&toml)
}

/// Parses and validates configuration
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;
    validate(&config)?;

    Ok(config)
}

/// Checks values that deserialize fine but can't be used
///
/// # Arguments
///
/// * 'config' - configuration to check
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.location.postal_code.trim().is_empty() {
        return Err(ConfigError::from("location.postal_code must be set"));
    }
    if config.nws.contact.trim().is_empty() {
        return Err(ConfigError::from("nws.contact must be set, api.weather.gov requires a contact in the User-Agent"));
    }
    for (key, url) in [("nws.base_url", &config.nws.base_url), ("geocoding.base_url", &config.geocoding.base_url)] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError(format!("{} must be an http or https url", key)));
        }
    }
    if config.web_server.bind_port == 0 {
        return Err(ConfigError::from("web_server.bind_port must not be 0"));
    }
    if config.web_server.refresh_minutes == 0 || config.web_server.refresh_minutes > MAX_REFRESH_MINUTES {
        return Err(ConfigError(format!("web_server.refresh_minutes must be between 1 and {}", MAX_REFRESH_MINUTES)));
    }

    Ok(())
}
