use crate::config::ReportConfig;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GROCERY_THRESHOLD})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ReportError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_report_config(self) -> ReportConfig {
        self.report
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.report.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_report_section() {
        let toml_content = r#"
[report]
threshold = 10
format = "json"
divider = "-"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.report.threshold, 10);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.report.fill().unwrap(), '-');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = TomlConfig::from_toml_str("[report]\nformat = \"csv\"\n").unwrap();
        assert_eq!(config.report.threshold, 5);
        assert_eq!(config.report.divider, "=");

        let empty = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(empty.report, ReportConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TOML_CONFIG_TEST_THRESHOLD", "7");

        let toml_content = r#"
[report]
threshold = ${TOML_CONFIG_TEST_THRESHOLD}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report.threshold, 7);

        std::env::remove_var("TOML_CONFIG_TEST_THRESHOLD");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let toml_content = r#"
[report]
divider = "${TOML_CONFIG_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report.divider, "${TOML_CONFIG_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[report\nthreshold = ");
        assert!(matches!(result, Err(ReportError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[report]\nthreshold = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.report.threshold, 3);
    }
}
