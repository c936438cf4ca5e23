use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerSettings,
    #[serde(default)]
    #[validate(nested)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    #[validate(nested)]
    pub assets: AssetSettings,
    #[serde(default)]
    #[validate(nested)]
    pub enhancer: EnhancerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1))]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Locations of the static catalog files
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CatalogSettings {
    #[serde(default = "default_careers_path")]
    #[validate(length(min = 1))]
    pub careers_path: String,
    #[serde(default = "default_courses_path")]
    #[validate(length(min = 1))]
    pub courses_path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            careers_path: default_careers_path(),
            courses_path: default_courses_path(),
        }
    }
}

fn default_careers_path() -> String { "data/careers.json".to_string() }
fn default_courses_path() -> String { "data/courses.json".to_string() }

/// Front-end bundle served at `/`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssetSettings {
    #[serde(default = "default_assets_dir")]
    #[validate(length(min = 1))]
    pub dir: String,
    #[serde(default = "default_index")]
    #[validate(length(min = 1))]
    pub index: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            index: default_index(),
        }
    }
}

fn default_assets_dir() -> String { "frontend".to_string() }
fn default_index() -> String { "index.html".to_string() }

/// Language-model plan enhancer; disabled while `api_key` is unset
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnhancerSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    #[validate(length(min = 1))]
    pub base_url: String,
    #[serde(default = "default_model")]
    #[validate(length(min = 1))]
    pub model: String,
    #[serde(default = "default_temperature")]
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 120))]
    pub timeout_secs: u64,
}

impl Default for EnhancerSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-4o-mini".to_string() }
fn default_temperature() -> f32 { 0.2 }
fn default_timeout_secs() -> u64 { 8 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with COMPASS__)
    /// 4. OPENAI_API_KEY for the plan enhancer
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., COMPASS__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_api_key_override(settings, std::env::var("OPENAI_API_KEY").ok())?;

        finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        finish(settings)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("COMPASS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Let the conventional OPENAI_API_KEY variable enable the enhancer
fn apply_api_key_override(settings: Config, api_key: Option<String>) -> Result<Config, ConfigError> {
    match api_key.filter(|key| !key.trim().is_empty()) {
        Some(key) => Config::builder()
            .add_source(settings)
            .set_override("enhancer.api_key", key)?
            .build(),
        None => Ok(settings),
    }
}

fn finish(settings: Config) -> Result<Settings, ConfigError> {
    let settings: Settings = settings.try_deserialize()?;
    settings
        .validate()
        .map_err(|e| ConfigError::Message(format!("Invalid configuration: {}", e)))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enhancer() {
        let enhancer = EnhancerSettings::default();
        assert_eq!(enhancer.api_key, None);
        assert_eq!(enhancer.model, "gpt-4o-mini");
        assert_eq!(enhancer.temperature, 0.2);
        assert_eq!(enhancer.timeout_secs, 8);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = finish(Config::builder().build().unwrap()).unwrap();

        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.catalog.careers_path, "data/careers.json");
        assert_eq!(settings.assets.index, "index.html");
        assert!(settings.enhancer.api_key.is_none());
    }

    #[test]
    fn test_api_key_override() {
        let base = Config::builder().build().unwrap();
        let settings = finish(apply_api_key_override(base, Some("sk-test".to_string())).unwrap()).unwrap();
        assert_eq!(settings.enhancer.api_key.as_deref(), Some("sk-test"));

        let base = Config::builder().build().unwrap();
        let settings = finish(apply_api_key_override(base, Some("".to_string())).unwrap()).unwrap();
        assert!(settings.enhancer.api_key.is_none());
    }

    #[test]
    fn test_validation_rejects_bad_timeout() {
        let config = Config::builder()
            .set_override("enhancer.timeout_secs", 0)
            .unwrap()
            .build()
            .unwrap();

        assert!(finish(config).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_workers() {
        let config = Config::builder()
            .set_override("server.workers", 0)
            .unwrap()
            .build()
            .unwrap();
        assert!(finish(config).is_err());

        let config = Config::builder()
            .set_override("server.workers", 2)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(finish(config).unwrap().server.workers, Some(2));
    }
}
