//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{FormatConfig, PayRules, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```text
/// rules:
///   standard_week_hours: "40"
///   overtime_multiplier: "1.5"
///   base_salary_bonus_rate: "0.10"
/// format:
///   currency_symbol: "$"
///   thousands_separator: ""
///   decimal_separator: "."
///   currency_decimal_places: 2
///   percent_decimal_places: 2
/// ```
///
/// Any section or field may be left out; missing values take their defaults.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Overtime after {} hours", loader.rules().standard_week_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for the schema (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, path_str.clone())?;
        debug!(path = %path_str, "Loaded payroll configuration");
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("format:\n  currency_symbol: \"€\"\n")?;
    /// assert_eq!(loader.format().currency_symbol, "€");
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> PayrollResult<Self> {
        Self::parse(yaml, "<inline>".to_string())
    }

    fn parse(content: &str, path: String) -> PayrollResult<Self> {
        let config = serde_yaml::from_str::<PayrollConfig>(content).map_err(|e| {
            PayrollError::ConfigParseError {
                path,
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }

    /// Returns the pay rule constants.
    pub fn rules(&self) -> &PayRules {
        &self.config.rules
    }

    /// Returns the report rendering options.
    pub fn format(&self) -> &FormatConfig {
        &self.config.format
    }
}
