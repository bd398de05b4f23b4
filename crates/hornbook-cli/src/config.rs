use anyhow::{Context, Result};
use hornbook_enrichment::EnrichmentConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Enrichment configuration
    #[serde(default)]
    pub enrichment: EnrichmentSection,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file
    pub path: Option<PathBuf>,
}

/// Enrichment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentSection {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache entry lifetime in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// NASA API key (can also be set via HORNBOOK_NASA_API_KEY)
    pub nasa_api_key: Option<String>,
}

impl Default for EnrichmentSection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            nasa_api_key: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_secs() -> u64 {
    86_400
}

impl AppConfig {
    /// Load configuration with precedence: defaults < file < env < args
    pub fn load(config_file: Option<PathBuf>, db_path: Option<PathBuf>) -> Result<Self> {
        // Start with defaults from config file (if exists)
        let mut config = Self::from_file_or_default(config_file)?;

        // Override with env vars
        if let Ok(path) = std::env::var("HORNBOOK_DB_PATH") {
            config.database.path = Some(PathBuf::from(path));
        }
        if let Ok(key) = std::env::var("HORNBOOK_NASA_API_KEY") {
            config.enrichment.nasa_api_key = Some(key);
        }
        if let Ok(timeout) = std::env::var("HORNBOOK_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                config.enrichment.timeout_secs = secs;
            }
        }

        // Override with CLI args (highest priority)
        if let Some(path) = db_path {
            config.database.path = Some(path);
        }

        Ok(config)
    }

    /// Resolved database path, falling back to the platform data directory
    pub fn database_path(&self) -> PathBuf {
        match &self.database.path {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join("hornbook").join("tutor_app.db"))
                .unwrap_or_else(|| PathBuf::from("tutor_app.db")),
        }
    }

    /// Get default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("hornbook");
        Ok(config_dir.join("config.toml"))
    }

    /// Create a new config file with example values
    pub fn create_example(path: &PathBuf) -> Result<()> {
        let example = r#"# Hornbook CLI Configuration
# Location: ~/.config/hornbook/config.toml

[database]
# Path to the SQLite database file
# Default: platform data directory, e.g. ~/.local/share/hornbook/tutor_app.db
# path = "/home/user/.local/share/hornbook/tutor_app.db"

[enrichment]
# Request timeout in seconds for fact lookups
timeout_secs = 10

# How long cached API responses stay fresh, in seconds
# Default: 86400 (one day)
cache_ttl_secs = 86400

# NASA API key for the apod source
# https://api.nasa.gov grants free keys; DEMO_KEY works with tight rate limits
# (can also be set via HORNBOOK_NASA_API_KEY env var)
# nasa_api_key = "DEMO_KEY"
"#;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        std::fs::write(path, example).context("Failed to write config file")?;

        Ok(())
    }

    /// Load config from file or return default
    fn from_file_or_default(config_file: Option<PathBuf>) -> Result<Self> {
        // HORNBOOK_TEST_MODE skips the user's config file; an explicitly
        // passed path still loads
        let path = if std::env::var("HORNBOOK_TEST_MODE").is_ok() {
            config_file
        } else {
            config_file.or_else(|| Self::default_config_path().ok())
        };
        let path = path.and_then(|p| if p.exists() { Some(p) } else { None });

        if let Some(path) = path {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Display the current configuration as TOML
    pub fn display_as_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config as TOML")
    }

    /// Display the current configuration as JSON
    pub fn display_as_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config as JSON")
    }

    /// Convert to an EnrichmentConfig for FactClient
    pub fn to_enrichment_config(&self) -> EnrichmentConfig {
        let defaults = EnrichmentConfig::default();
        EnrichmentConfig {
            timeout_secs: self.enrichment.timeout_secs,
            cache_ttl_secs: self.enrichment.cache_ttl_secs,
            nasa_api_key: self
                .enrichment
                .nasa_api_key
                .clone()
                .unwrap_or(defaults.nasa_api_key),
            ..defaults
        }
    }
}
