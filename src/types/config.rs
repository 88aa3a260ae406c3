use crate::error::AuditError;
use serde::Deserialize;

pub const DEFAULT_STORAGE_DIR: &str = ".geoaudit/reports";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub analysis: AnalysisToggles,
    pub output: Option<OutputConfig>,
    pub storage: Option<StorageConfig>,
}

/// Which analyses run. A disabled analysis yields its empty default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AnalysisToggles {
    #[serde(default = "enabled")]
    pub traditional_seo: bool,
    #[serde(default = "enabled")]
    pub geo: bool,
    #[serde(default = "enabled")]
    pub ai_visibility: bool,
    #[serde(default = "enabled")]
    pub content_suggestions: bool,
}

fn enabled() -> bool {
    true
}

impl Default for AnalysisToggles {
    fn default() -> Self {
        Self {
            traditional_seo: true,
            geo: true,
            ai_visibility: true,
            content_suggestions: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub dir: Option<String>,
}

impl AuditConfig {
    pub fn output_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    pub fn storage_dir(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|storage| storage.dir.as_deref())
            .unwrap_or(DEFAULT_STORAGE_DIR)
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        if let Some(format) = self.output_format() {
            if !matches!(format, "json" | "md" | "sarif") {
                return Err(AuditError::ConfigParse(format!(
                    "unsupported output.format: {format}"
                )));
            }
        }

        if let Some(dir) = self.storage.as_ref().and_then(|storage| storage.dir.as_ref()) {
            if dir.trim().is_empty() {
                return Err(AuditError::ConfigParse(
                    "storage.dir must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_enables_everything() {
        let cfg: AuditConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.analysis, AnalysisToggles::default());
        assert_eq!(cfg.storage_dir(), DEFAULT_STORAGE_DIR);
        assert!(cfg.output_format().is_none());
    }

    #[test]
    fn parse_partial_toggles_keeps_defaults() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[analysis]
geo = false
"#,
        )
        .expect("config should parse");
        assert!(!cfg.analysis.geo);
        assert!(cfg.analysis.traditional_seo);
        assert!(cfg.analysis.ai_visibility);
        assert!(cfg.analysis.content_suggestions);
    }

    #[test]
    fn validate_accepts_known_format() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[output]
format = "sarif"

[storage]
dir = "reports"
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.storage_dir(), "reports");
    }

    #[test]
    fn validate_rejects_unknown_format() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[output]
format = "pdf"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported output.format"));
    }

    #[test]
    fn validate_rejects_blank_storage_dir() {
        let cfg: AuditConfig = toml::from_str(
            r#"
[storage]
dir = "  "
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }
}
