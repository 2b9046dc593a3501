//! Configuration management for the `cursos-data` tools
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::CursosError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursosConfig {
    /// Runtime catalog endpoint configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Build-time generator configuration
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Catalog endpoint settings used by the runtime accessor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL of the Apps Script endpoint returning the catalog as JSON
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Staleness window for the in-memory cache, in minutes
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_minutes: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Generator settings for the static data module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Catalog source: "csv" (fetch the spreadsheet export) or "static"
    /// (hardcoded fallback, reproducible offline)
    #[serde(default = "default_generator_source")]
    pub source: String,
    /// URL of the published spreadsheet CSV export
    #[serde(default = "default_csv_url")]
    pub csv_url: String,
    /// Output path of the generated module, relative to the site checkout
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_endpoint_url() -> String {
    "https://script.google.com/macros/s/AKfycbyC08Khwn8QgNIyk86gU8LnkUCRwy0hMvXCM1O-N3VH00rKTMIFMoO2oeKQMC8PEaQ3/exec".to_string()
}

fn default_cache_ttl() -> u32 {
    5
}

fn default_timeout() -> u32 {
    30
}

fn default_generator_source() -> String {
    "static".to_string()
}

fn default_csv_url() -> String {
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vTJqlG7xJhthlPfWhSWBGf6qtYP2uhfVTtPk6uJz2i3oCWbUTdU0rbLy7uWGSb8lQ/pub?gid=750632160&single=true&output=csv".to_string()
}

fn default_output_path() -> String {
    "src/constants/experiences.js".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            cache_ttl_minutes: default_cache_ttl(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: default_generator_source(),
            csv_url: default_csv_url(),
            output_path: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CursosConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            generator: GeneratorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CursosConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with CURSOS_ prefix. The
        // nesting separator is "__" so multi-word field names survive
        // (e.g. CURSOS_CATALOG__CACHE_TTL_MINUTES).
        builder = builder.add_source(
            Environment::with_prefix("CURSOS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: CursosConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cursos-data").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.catalog.endpoint_url.is_empty() {
            self.catalog.endpoint_url = default_endpoint_url();
        }
        if self.catalog.cache_ttl_minutes == 0 {
            self.catalog.cache_ttl_minutes = default_cache_ttl();
        }
        if self.catalog.timeout_seconds == 0 {
            self.catalog.timeout_seconds = default_timeout();
        }
        if self.generator.source.is_empty() {
            self.generator.source = default_generator_source();
        }
        if self.generator.csv_url.is_empty() {
            self.generator.csv_url = default_csv_url();
        }
        if self.generator.output_path.is_empty() {
            self.generator.output_path = default_output_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.catalog.timeout_seconds > 300 {
            return Err(CursosError::config("Request timeout cannot exceed 300 seconds").into());
        }

        if self.catalog.cache_ttl_minutes > 1440 {
            return Err(
                CursosError::config("Cache TTL cannot exceed 1440 minutes (1 day)").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(CursosError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_sources = ["csv", "static"];
        if !valid_sources.contains(&self.generator.source.as_str()) {
            return Err(CursosError::config(format!(
                "Invalid generator source '{}'. Must be one of: {}",
                self.generator.source,
                valid_sources.join(", ")
            ))
            .into());
        }

        for url in [&self.catalog.endpoint_url, &self.generator.csv_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CursosError::config(
                    "Endpoint URLs must be valid HTTP or HTTPS URLs",
                )
                .into());
            }
        }

        Ok(())
    }
}
