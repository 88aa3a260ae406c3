use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Success,
    Warning,
    Error,
}

/// A finding metric or comparison value: either text or a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(i64),
    Text(String),
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        Self::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        Self::Number(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<u8> for MetricValue {
    fn from(value: u8) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<BTreeMap<String, MetricValue>>,
}

impl Finding {
    pub fn new(kind: FindingKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
            details: None,
            metrics: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_metric(mut self, name: &str, value: impl Into<MetricValue>) -> Self {
        self.metrics
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), value.into());
        self
    }
}

/// Findings in generation order plus the clamped section score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub findings: Vec<Finding>,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityFactor {
    pub factor: String,
    pub score: u8,
    pub description: String,
    pub status: FactorStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRecommendation {
    pub priority: Priority,
    pub action: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiVisibilityReport {
    pub overall_score: u8,
    pub summary: String,
    pub factors: Vec<VisibilityFactor>,
    pub recommendations: Vec<VisibilityRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogTitle {
    pub title: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiImprovement {
    pub action: String,
    pub description: String,
    pub impact: Level,
    pub priority: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestions {
    pub missing_keywords: Vec<String>,
    pub blog_titles: Vec<BlogTitle>,
    pub content_structure: Vec<String>,
    pub faqs: Vec<Faq>,
    pub ai_visibility: BTreeMap<String, Level>,
    pub ai_improvements: Vec<AiImprovement>,
}

/// Engine output for one url, before storage assigns identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuditReport {
    pub url: String,
    pub seo_score: u8,
    pub ai_score: u8,
    pub traditional_seo_results: ScoreResult,
    pub geo_results: ScoreResult,
    pub content_suggestions: ContentSuggestions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_visibility: Option<AiVisibilityReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: String,
    pub url: String,
    pub seo_score: u8,
    pub ai_score: u8,
    pub traditional_seo_results: ScoreResult,
    pub geo_results: ScoreResult,
    pub content_suggestions: ContentSuggestions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_visibility: Option<AiVisibilityReport>,
    pub created_at: DateTime<Utc>,
}

impl AuditReport {
    pub fn from_new(report: NewAuditReport, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url: report.url,
            seo_score: report.seo_score,
            ai_score: report.ai_score,
            traditional_seo_results: report.traditional_seo_results,
            geo_results: report.geo_results,
            content_suggestions: report.content_suggestions,
            ai_visibility: report.ai_visibility,
            created_at,
        }
    }

    /// Findings of both sections, SEO first, each in generation order.
    pub fn all_findings(&self) -> impl Iterator<Item = (&'static str, &Finding)> {
        self.traditional_seo_results
            .findings
            .iter()
            .map(|finding| ("seo", finding))
            .chain(self.geo_results.findings.iter().map(|finding| ("geo", finding)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Performer {
    Url1,
    Url2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifferenceCategory {
    Seo,
    Ai,
    Visibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDifference {
    pub category: DifferenceCategory,
    pub aspect: String,
    pub url1_value: MetricValue,
    pub url2_value: MetricValue,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDifferences {
    pub seo_score_diff: i32,
    pub ai_score_diff: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_visibility_diff: Option<i32>,
    pub better_performer: Performer,
    pub key_differences: Vec<KeyDifference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub url1_report: AuditReport,
    pub url2_report: AuditReport,
    pub differences: ComparisonDifferences,
}
