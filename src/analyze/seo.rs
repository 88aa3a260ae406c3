use crate::types::report::{Finding, FindingKind, ScoreResult};
use crate::types::scoring::clamp_score;
use crate::types::website::WebsiteData;
use tracing::debug;

pub const TITLE_MIN: usize = 30;
pub const TITLE_MAX: usize = 60;
pub const META_MIN: usize = 120;
pub const META_MAX: usize = 160;
pub const SLOW_LOAD_MS: u64 = 3000;

/// Classic on-page SEO rules. Each rule group adds one finding and a
/// non-negative contribution; the sum is clamped to 100.
pub fn analyze_traditional_seo(data: &WebsiteData) -> ScoreResult {
    let mut findings = Vec::new();
    let mut score: u32 = 0;

    score += title_rule(data, &mut findings);
    score += meta_description_rule(data, &mut findings);
    score += h1_rule(data, &mut findings);
    score += image_alt_rule(data, &mut findings);
    score += schema_rule(data, &mut findings);
    score += load_time_rule(data, &mut findings);

    let score = clamp_score(score);
    debug!(score, findings = findings.len(), "traditional seo scored");
    ScoreResult { findings, score }
}

fn title_rule(data: &WebsiteData, findings: &mut Vec<Finding>) -> u32 {
    let length = data.title.chars().count();
    if data.title.trim().is_empty() {
        findings.push(Finding::new(
            FindingKind::Error,
            "Missing Title Tag",
            "The page has no title. Search engines use it as the headline of the result.",
        ));
        0
    } else if length < TITLE_MIN {
        findings.push(
            Finding::new(
                FindingKind::Warning,
                "Title Too Short",
                format!("The title has {length} characters; aim for {TITLE_MIN}-{TITLE_MAX}."),
            )
            .with_details(data.title.clone())
            .with_metric("Length", length),
        );
        10
    } else if length > TITLE_MAX {
        findings.push(
            Finding::new(
                FindingKind::Warning,
                "Title Too Long",
                format!(
                    "The title has {length} characters and may be truncated; aim for {TITLE_MIN}-{TITLE_MAX}."
                ),
            )
            .with_details(data.title.clone())
            .with_metric("Length", length),
        );
        10
    } else {
        findings.push(
            Finding::new(
                FindingKind::Success,
                "Title Tag Optimized",
                format!("The title length ({length} characters) is within the optimal range."),
            )
            .with_details(data.title.clone())
            .with_metric("Length", length),
        );
        20
    }
}

fn meta_description_rule(data: &WebsiteData, findings: &mut Vec<Finding>) -> u32 {
    let length = data.meta_description.chars().count();
    if data.meta_description.trim().is_empty() {
        findings.push(Finding::new(
            FindingKind::Error,
            "Missing Meta Description",
            "The page has no meta description. Search engines will pick a snippet on their own.",
        ));
        0
    } else if length < META_MIN {
        findings.push(
            Finding::new(
                FindingKind::Warning,
                "Meta Description Too Short",
                format!(
                    "The meta description has {length} characters; aim for {META_MIN}-{META_MAX}."
                ),
            )
            .with_metric("Length", length),
        );
        10
    } else if length > META_MAX {
        findings.push(
            Finding::new(
                FindingKind::Warning,
                "Meta Description Too Long",
                format!(
                    "The meta description has {length} characters and may be cut off; aim for {META_MIN}-{META_MAX}."
                ),
            )
            .with_metric("Length", length),
        );
        10
    } else {
        findings.push(
            Finding::new(
                FindingKind::Success,
                "Meta Description Optimized",
                format!("The meta description length ({length} characters) is within the optimal range."),
            )
            .with_metric("Length", length),
        );
        20
    }
}

fn h1_rule(data: &WebsiteData, findings: &mut Vec<Finding>) -> u32 {
    let h1_count = data.count_headings(1);
    match h1_count {
        0 => {
            findings.push(
                Finding::new(
                    FindingKind::Error,
                    "Missing H1 Tag",
                    "The page has no H1 heading describing its main topic.",
                )
                .with_metric("H1 tags", 0usize),
            );
            0
        }
        1 => {
            findings.push(
                Finding::new(
                    FindingKind::Success,
                    "Single H1 Tag",
                    "The page has exactly one H1 heading.",
                )
                .with_metric("H1 tags", 1usize),
            );
            15
        }
        count => {
            findings.push(
                Finding::new(
                    FindingKind::Warning,
                    "Multiple H1 Tags",
                    format!("The page has {count} H1 headings; use a single H1 for the main topic."),
                )
                .with_metric("H1 tags", count),
            );
            10
        }
    }
}

fn image_alt_rule(data: &WebsiteData, findings: &mut Vec<Finding>) -> u32 {
    let total = data.images.len();
    let missing = data.images_missing_alt();
    if missing > 0 {
        findings.push(
            Finding::new(
                FindingKind::Error,
                "Images Missing Alt Text",
                format!("{missing} of {total} images have no alt text."),
            )
            .with_details(format!("{missing} images without alt text"))
            .with_metric("Images without alt", missing)
            .with_metric("Total images", total),
        );
        0
    } else if total > 0 {
        findings.push(
            Finding::new(
                FindingKind::Success,
                "All Images Have Alt Text",
                format!("All {total} images carry alt text."),
            )
            .with_metric("Total images", total),
        );
        15
    } else {
        0
    }
}

fn schema_rule(data: &WebsiteData, findings: &mut Vec<Finding>) -> u32 {
    if data.has_schema {
        let types = data
            .schema_types
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        findings.push(
            Finding::new(
                FindingKind::Success,
                "Schema Markup Detected",
                "Structured data is present on the page.",
            )
            .with_details(if types.is_empty() {
                "Schema types: none declared".to_string()
            } else {
                format!("Schema types: {types}")
            }),
        );
        15
    } else {
        findings.push(Finding::new(
            FindingKind::Warning,
            "No Schema Markup",
            "No structured data found. Add schema.org markup to describe the page.",
        ));
        0
    }
}

fn load_time_rule(data: &WebsiteData, findings: &mut Vec<Finding>) -> u32 {
    if data.load_time > SLOW_LOAD_MS {
        findings.push(
            Finding::new(
                FindingKind::Warning,
                "Slow Page Load",
                format!(
                    "The page loaded in {} ms; keep it under {SLOW_LOAD_MS} ms.",
                    data.load_time
                ),
            )
            .with_metric("Load time (ms)", data.load_time),
        );
        0
    } else {
        findings.push(
            Finding::new(
                FindingKind::Success,
                "Fast Page Load",
                format!("The page loaded in {} ms.", data.load_time),
            )
            .with_metric("Load time (ms)", data.load_time),
        );
        15
    }
}
