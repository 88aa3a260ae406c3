use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("invalid input: field `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("storage failure: {0}")]
    Storage(String),

    #[error("report not found: {0}")]
    ReportNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
