//! Quiz configuration file support.
//!
//! This module reads quiz settings from a TOML file. Every setting has a
//! default, so an empty file and a missing file behave the same.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{UnitCircleError, UnitCircleResult};
use crate::models::AngleMode;
use crate::parsing::input_filter::{
    InputFilter, DEFAULT_DEGREES_MAX_LENGTH, DEFAULT_RADIANS_MAX_LENGTH,
};

/// Name of the configuration file searched for by [`QuizConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "unit_circle.toml";

/// Quiz configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default)]
    pub input: InputSettings,
}

/// Grading settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSettings {
    #[serde(default)]
    pub default_mode: AngleMode,
    #[serde(default = "default_radians_tolerance")]
    pub radians_tolerance: f64,
}

/// Input box settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSettings {
    #[serde(default = "default_degrees_max_length")]
    pub degrees_max_length: usize,
    #[serde(default = "default_radians_max_length")]
    pub radians_max_length: usize,
}

fn default_radians_tolerance() -> f64 {
    1e-9
}

fn default_degrees_max_length() -> usize {
    DEFAULT_DEGREES_MAX_LENGTH
}

fn default_radians_max_length() -> usize {
    DEFAULT_RADIANS_MAX_LENGTH
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            default_mode: AngleMode::default(),
            radians_tolerance: default_radians_tolerance(),
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            degrees_max_length: default_degrees_max_length(),
            radians_max_length: default_radians_max_length(),
        }
    }
}

impl QuizConfig {
    /// Load quiz configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(QuizConfig)` if successful
    /// * `Err(UnitCircleError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> UnitCircleResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            UnitCircleError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!("Loaded quiz configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> UnitCircleResult<Self> {
        let config: QuizConfig = toml::from_str(content).map_err(|e| {
            UnitCircleError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load quiz configuration from the default location.
    ///
    /// Searches for `unit_circle.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the defaults when no file exists.
    pub fn from_default_location() -> UnitCircleResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("rust_backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        warn!("No {} found in standard locations, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    fn validate(&self) -> UnitCircleResult<()> {
        if !(self.quiz.radians_tolerance.is_finite() && self.quiz.radians_tolerance >= 0.0) {
            return Err(UnitCircleError::ConfigurationError(format!(
                "radians_tolerance must be a non-negative number, got {}",
                self.quiz.radians_tolerance
            )));
        }
        if self.input.degrees_max_length == 0 || self.input.radians_max_length == 0 {
            return Err(UnitCircleError::ConfigurationError(
                "Input max lengths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn max_length(&self, mode: AngleMode) -> usize {
        match mode {
            AngleMode::Degrees => self.input.degrees_max_length,
            AngleMode::Radians => self.input.radians_max_length,
        }
    }

    /// Keystroke filter for `mode` using the configured maximum length.
    pub fn input_filter(&self, mode: AngleMode) -> InputFilter {
        InputFilter::new(mode, self.max_length(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_is_default() {
        let config = QuizConfig::from_toml_str("").unwrap();
        assert_eq!(config, QuizConfig::default());
        assert_eq!(config.quiz.default_mode, AngleMode::Degrees);
        assert_eq!(config.max_length(AngleMode::Degrees), 3);
        assert_eq!(config.max_length(AngleMode::Radians), 5);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[quiz]
default_mode = "radians"
radians_tolerance = 0.001

[input]
radians_max_length = 6
"#
        )
        .unwrap();

        let config = QuizConfig::from_file(file.path()).unwrap();
        assert_eq!(config.quiz.default_mode, AngleMode::Radians);
        assert_eq!(config.quiz.radians_tolerance, 0.001);
        assert_eq!(config.input.radians_max_length, 6);
        assert_eq!(config.input.degrees_max_length, 3);
        assert_eq!(config.input_filter(AngleMode::Radians).max_length(), 6);
    }

    #[test]
    fn test_missing_file() {
        let err = QuizConfig::from_file("/nonexistent/unit_circle.toml").unwrap_err();
        assert!(matches!(err, UnitCircleError::ConfigurationError(_)));
    }

    #[test]
    fn test_invalid_values() {
        assert!(QuizConfig::from_toml_str("[quiz]\ndefault_mode = \"gradians\"").is_err());
        assert!(QuizConfig::from_toml_str("[quiz]\nradians_tolerance = -1.0").is_err());
        assert!(QuizConfig::from_toml_str("[input]\ndegrees_max_length = 0").is_err());
    }
}
