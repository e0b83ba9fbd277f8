#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::app::problems::grocery::DEFAULT_THRESHOLD;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const MAX_THRESHOLD: u32 = 1000;

/// Resolved report settings. File values are loaded first, CLI flags win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Cutoff for the grocery and inventory reports (`stock < threshold`).
    pub threshold: u32,
    pub format: OutputFormat,
    pub divider: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            format: OutputFormat::Text,
            divider: "=".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn fill(&self) -> Result<char> {
        validation::validate_divider("report.divider", &self.divider)
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("report.threshold", self.threshold, 0, MAX_THRESHOLD)?;
        self.fill()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.threshold, 5);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.fill().unwrap(), '=');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_large_threshold() {
        let config = ReportConfig {
            threshold: MAX_THRESHOLD + 1,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
