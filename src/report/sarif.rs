use crate::types::report::{AuditReport, FindingKind};
use serde_json::json;

fn rule_id(section: &str, title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("{section}.{slug}")
}

pub fn to_sarif(report: &AuditReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .all_findings()
        .map(|(section, finding)| {
            let level = match finding.kind {
                FindingKind::Error => "error",
                FindingKind::Warning => "warning",
                FindingKind::Success => "note",
            };
            json!({
                "ruleId": rule_id(section, &finding.title),
                "level": level,
                "message": { "text": finding.description },
                "locations": [{
                    "physicalLocation": {
                        "artifactLocation": { "uri": report.url }
                    }
                }],
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "geoaudit",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}
