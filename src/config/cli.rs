use crate::app::problems::ProblemKind;
use crate::config::toml_config::TomlConfig;
use crate::config::ReportConfig;
use crate::core::render::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "threshold-report")]
#[command(about = "Filter small fixed datasets against a threshold and print a report")]
pub struct CliConfig {
    /// Reports to print; repeat or comma-separate. Defaults to all of them.
    #[arg(long = "problem", value_enum, value_delimiter = ',')]
    pub problems: Vec<ProblemKind>,

    /// Cutoff for the grocery and inventory reports (stock < threshold)
    #[arg(long)]
    pub threshold: Option<u32>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔 (若有) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.into_report_config()
            }
            None => ReportConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
            tracing::debug!("🔧 Threshold overridden to: {}", threshold);
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(threshold) = self.threshold {
            validation::validate_range("threshold", threshold, 0, crate::config::MAX_THRESHOLD)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "threshold-report",
            "--problem",
            "grocery,inventory",
            "--threshold",
            "8",
            "--format",
            "json",
        ]);

        assert_eq!(cli.problems, vec![ProblemKind::Grocery, ProblemKind::Inventory]);
        assert_eq!(cli.threshold, Some(8));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = CliConfig::parse_from(["threshold-report"]);
        assert!(cli.problems.is_empty());
        assert_eq!(cli.resolve().unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\nthreshold = 3\nformat = \"csv\"\ndivider = \"#\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["threshold-report", "--config", path.as_str(), "--threshold", "9"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.threshold, 9);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.fill().unwrap(), '#');
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let cli = CliConfig::parse_from(["threshold-report", "--threshold", "5000"]);
        assert!(cli.validate().is_err());
        assert!(cli.resolve().is_err());
    }
}
