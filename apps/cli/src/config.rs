//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line arguments (highest priority, applied in main.rs)      │
//! │     --discount 15 --out ./exports --format json                        │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     PRICETAG_DISCOUNT=15                                               │
//! │     PRICETAG_OUTPUT_DIR=./exports                                      │
//! │     PRICETAG_FORMATS=xml,json                                          │
//! │     PRICETAG_LOG_LEVEL=debug                                           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/pricetag/pricetag.toml (Linux)                           │
//! │     ~/Library/Application Support/com.pricetag.pricetag/... (macOS)    │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     30 % discount, current directory, both formats, info logging       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [discount]
//! percentage = 30.0
//!
//! [export]
//! output_dir = "./exports"
//! formats = ["xml", "json"]
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use pricetag_core::{CoreError, Discount};
use pricetag_export::ExportFormat;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Sections
// =============================================================================

/// Discount applied to the demo product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSettings {
    #[serde(default = "default_percentage")]
    pub percentage: f64,
}

fn default_percentage() -> f64 {
    30.0
}

impl Default for DiscountSettings {
    fn default() -> Self {
        DiscountSettings {
            percentage: default_percentage(),
        }
    }
}

/// Where and how the cart is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_formats() -> Vec<ExportFormat> {
    ExportFormat::ALL.to_vec()
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            output_dir: default_output_dir(),
            formats: default_formats(),
        }
    }
}

/// Log filter used when `RUST_LOG` is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_level(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub discount: DiscountSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CliConfig {
    /// Loads configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_path` must exist. The default location is used
    /// only if a file is there. Nothing is validated yet: command line
    /// overrides still have to be applied, then call [`CliConfig::validate`].
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        self.discount()?;

        if self.export.formats.is_empty() {
            return Err(CliError::InvalidConfig(
                "export.formats must name at least one format".into(),
            ));
        }

        Ok(())
    }

    /// The configured discount, validated.
    pub fn discount(&self) -> CliResult<Discount> {
        Discount::try_new(self.discount.percentage)
            .map_err(|violation| CliError::Core(CoreError::from(violation)))
    }

    /// Applies `PRICETAG_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PRICETAG_DISCOUNT") {
            match raw.trim().parse::<f64>() {
                Ok(percentage) => {
                    debug!(percentage, "Overriding discount from environment");
                    self.discount.percentage = percentage;
                }
                Err(_) => warn!(value = %raw, "Ignoring unparseable PRICETAG_DISCOUNT"),
            }
        }

        if let Some(dir) = lookup("PRICETAG_OUTPUT_DIR") {
            debug!(dir = %dir, "Overriding output directory from environment");
            self.export.output_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("PRICETAG_FORMATS") {
            match raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(str::parse::<ExportFormat>)
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(formats) => self.export.formats = formats,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring PRICETAG_FORMATS"),
            }
        }

        if let Some(level) = lookup("PRICETAG_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pricetag", "pricetag")
            .map(|dirs| dirs.config_dir().join("pricetag.toml"))
    }
}
