use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Print the full declaring type path instead of its last segment
    pub show_packages: bool,
    /// Path prefixes a caller must match to be logged; empty admits everyone
    pub package_filters: Vec<String>,
    /// Wrap colored severities in ANSI escape sequences
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            show_packages: false,
            package_filters: Vec::new(),
            colors: true,
        }
    }
}

impl LoggerConfig {
    pub fn with_packages_shown(mut self) -> Self {
        self.show_packages = true;
        self
    }

    pub fn with_package_filter(mut self, prefix: impl Into<String>) -> Self {
        self.package_filters.push(prefix.into());
        self
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Whether a call from `declaring_type` passes the package filters
    pub fn admits(&self, declaring_type: &str) -> bool {
        self.package_filters.is_empty()
            || self
                .package_filters
                .iter()
                .any(|prefix| declaring_type.starts_with(prefix.as_str()))
    }

    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).context(format!("Failed to read logger config {}", path.display()))?;

        let config = Self::from_yaml_str(&content).context(format!("Failed to load logger config {}", path.display()))?;

        log::info!("Loaded logger config from: {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse logger config")
    }
}
