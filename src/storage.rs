use crate::error::{AuditError, Result};
use crate::types::report::{AuditReport, NewAuditReport};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Persists audit reports. Identity and timestamps are assigned here,
/// never by the scorers.
pub trait ReportStore {
    fn create(&mut self, report: NewAuditReport) -> Result<AuditReport>;
    fn get_by_id(&self, id: &str) -> Result<Option<AuditReport>>;
    /// Most recent report for `url`.
    fn get_by_url(&self, url: &str) -> Result<Option<AuditReport>>;
    /// All reports, oldest first.
    fn get_all(&self) -> Result<Vec<AuditReport>>;
}

fn assign_identity(report: NewAuditReport) -> AuditReport {
    AuditReport::from_new(report, Uuid::new_v4().to_string(), Utc::now())
}

fn latest_for_url(reports: Vec<AuditReport>, url: &str) -> Option<AuditReport> {
    reports
        .into_iter()
        .filter(|report| report.url == url)
        .max_by_key(|report| report.created_at)
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    reports: Vec<AuditReport>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for MemoryStore {
    fn create(&mut self, report: NewAuditReport) -> Result<AuditReport> {
        let stored = assign_identity(report);
        self.reports.push(stored.clone());
        Ok(stored)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<AuditReport>> {
        Ok(self.reports.iter().find(|report| report.id == id).cloned())
    }

    fn get_by_url(&self, url: &str) -> Result<Option<AuditReport>> {
        Ok(latest_for_url(self.reports.clone(), url))
    }

    fn get_all(&self) -> Result<Vec<AuditReport>> {
        Ok(self.reports.clone())
    }
}

/// One pretty-printed JSON file per report.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_report(path: &Path) -> Result<AuditReport> {
        let content = fs::read_to_string(path)
            .map_err(|e| AuditError::Storage(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| AuditError::Storage(format!("{}: {e}", path.display())))
    }
}

impl ReportStore for FileStore {
    fn create(&mut self, report: NewAuditReport) -> Result<AuditReport> {
        let stored = assign_identity(report);
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuditError::Storage(format!("{}: {e}", self.dir.display())))?;
        let stamp = stored.created_at.format("%Y%m%dT%H%M%S%.3fZ");
        let out_path = self.dir.join(format!("report-{stamp}-{}.json", stored.id));
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&out_path, json)
            .map_err(|e| AuditError::Storage(format!("{}: {e}", out_path.display())))?;
        info!(path = %out_path.display(), id = %stored.id, "report stored");
        Ok(stored)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<AuditReport>> {
        Ok(self.get_all()?.into_iter().find(|report| report.id == id))
    }

    fn get_by_url(&self, url: &str) -> Result<Option<AuditReport>> {
        Ok(latest_for_url(self.get_all()?, url))
    }

    fn get_all(&self) -> Result<Vec<AuditReport>> {
        if !self.dir.exists() {
            debug!(dir = %self.dir.display(), "report directory does not exist yet");
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| AuditError::Storage(format!("{}: {e}", self.dir.display())))?;

        let mut reports = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| AuditError::Storage(format!("{}: {e}", self.dir.display())))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                reports.push(Self::read_report(&path)?);
            }
        }
        reports.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(reports)
    }
}
