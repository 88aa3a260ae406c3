use crate::error::{AuditError, Result};
use crate::types::website::WebsiteData;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Supplies one scrape record per analyzed target.
pub trait WebsiteSource {
    fn fetch(&self, target: &str) -> Result<WebsiteData>;
}

/// Reads scrape records that an external scraper wrote as JSON.
/// The target `-` reads from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileSource;

impl WebsiteSource for JsonFileSource {
    fn fetch(&self, target: &str) -> Result<WebsiteData> {
        let raw = if target == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| AuditError::Fetch(format!("stdin: {e}")))?;
            buffer
        } else {
            let path = Path::new(target);
            if !path.exists() {
                return Err(AuditError::Fetch(format!("no scrape record at {target}")));
            }
            std::fs::read_to_string(path).map_err(|e| AuditError::Fetch(format!("{target}: {e}")))?
        };

        let data = WebsiteData::from_json(&raw)?;
        info!(
            target,
            headings = data.headings.len(),
            images = data.images.len(),
            "scrape record loaded"
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_a_fetch_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("absent.json");
        let err = JsonFileSource
            .fetch(path.to_str().expect("utf-8 path"))
            .expect_err("missing file should fail");
        assert!(matches!(err, AuditError::Fetch(_)));
    }

    #[test]
    fn malformed_record_is_invalid_input() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("page.json");
        fs::write(&path, r#"{"title": "only a title"}"#).expect("record should write");
        let err = JsonFileSource
            .fetch(path.to_str().expect("utf-8 path"))
            .expect_err("incomplete record should fail");
        assert!(matches!(
            err,
            AuditError::InvalidInput { ref field, .. } if field == "metaDescription"
        ));
    }
}
