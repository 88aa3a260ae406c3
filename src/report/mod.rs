pub mod json;
pub mod md;
pub mod sarif;

use crate::error::AuditError;
use crate::types::report::{AiVisibilityReport, AuditReport, ComparisonResult, ContentSuggestions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "md" => Some(Self::Md),
            "sarif" => Some(Self::Sarif),
            _ => None,
        }
    }
}

pub fn render(report: &AuditReport, format: OutputFormat) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Md => Ok(md::audit_to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(AuditError::Json),
    }
}

/// SARIF only describes findings, so it falls back to markdown here.
pub fn render_visibility(
    report: &AiVisibilityReport,
    format: OutputFormat,
) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AuditError::Json),
        OutputFormat::Md | OutputFormat::Sarif => Ok(md::visibility_to_markdown(report)),
    }
}

pub fn render_suggestions(
    suggestions: &ContentSuggestions,
    format: OutputFormat,
) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(suggestions).map_err(AuditError::Json),
        OutputFormat::Md | OutputFormat::Sarif => Ok(md::suggestions_to_markdown(suggestions)),
    }
}

pub fn render_comparison(
    result: &ComparisonResult,
    format: OutputFormat,
) -> Result<String, AuditError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(AuditError::Json),
        OutputFormat::Md | OutputFormat::Sarif => Ok(md::comparison_to_markdown(result)),
    }
}
