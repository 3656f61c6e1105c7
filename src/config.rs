use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::format::OutputFormat;

const DEFAULT_FILE_SUFFIX: &str = "_transcript";

/// Settings handed to the [`Exporter`](crate::Exporter) at startup.
///
/// ```toml
/// default_format = "srt"
/// file_suffix = "_subs"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub default_format: OutputFormat,
    /// Appended to the source file name before the extension.
    pub file_suffix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::PlainText,
            file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("loaded export config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::ExportConfig;
    use crate::format::OutputFormat;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ExportConfig::from_toml_str("").expect("empty config should parse");
        assert_eq!(config, ExportConfig::default());
        assert_eq!(config.file_suffix, "_transcript");
    }

    #[test]
    fn reads_explicit_values() {
        let config = ExportConfig::from_toml_str("default_format = \"vtt\"\nfile_suffix = \"_subs\"\n")
            .expect("config should parse");

        assert_eq!(config.default_format, OutputFormat::WebVtt);
        assert_eq!(config.file_suffix, "_subs");
    }

    #[test]
    fn rejects_unknown_keys_and_formats() {
        assert!(ExportConfig::from_toml_str("token = \"secret\"").is_err());
        assert!(ExportConfig::from_toml_str("default_format = \"docx\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let error = ExportConfig::load(std::path::Path::new("/nonexistent/export.toml"))
            .expect_err("missing file must fail");
        assert!(error.to_string().contains("/nonexistent/export.toml"));
    }
}
