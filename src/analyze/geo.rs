use super::text::{contains_any, has_proper_noun_pair};
use crate::types::report::{Finding, FindingKind, ScoreResult};
use crate::types::scoring::clamp_score;
use crate::types::website::WebsiteData;
use tracing::debug;

pub(crate) const SUMMARY_MARKERS: [&str; 3] = ["tl;dr", "summary", "key takeaways"];
const QUESTION_MARKERS: [&str; 3] = ["what is", "how to", "why"];
const RECENT_YEARS: [&str; 2] = ["2023", "2024"];

/// Generative-engine friendliness rules, scored like the SEO rules.
pub fn analyze_geo(data: &WebsiteData) -> ScoreResult {
    let mut findings = Vec::new();
    let mut score: u32 = 0;

    let h2_count = data.count_headings(2);
    if h2_count > 0 {
        findings.push(
            Finding::new(
                FindingKind::Success,
                "Structured Subheadings",
                "H2 sections split the content into chunks AI engines can quote.",
            )
            .with_metric("H2 tags", h2_count),
        );
        score += 20;
    } else {
        findings.push(Finding::new(
            FindingKind::Warning,
            "No H2 Subheadings",
            "Break the content into H2 sections so answer engines can lift individual parts.",
        ));
    }

    if contains_any(&data.content, &SUMMARY_MARKERS) {
        findings.push(Finding::new(
            FindingKind::Success,
            "Summary Section Present",
            "A TL;DR or key takeaways block gives AI engines a ready-made answer.",
        ));
        score += 25;
    } else {
        findings.push(Finding::new(
            FindingKind::Error,
            "Missing Summary Section",
            "Add a TL;DR, summary or key takeaways block near the top of the page.",
        ));
    }

    let question_headings = data
        .headings
        .iter()
        .filter(|heading| heading.text.contains('?'))
        .count();
    if contains_any(&data.content, &QUESTION_MARKERS) || question_headings > 0 {
        findings.push(
            Finding::new(
                FindingKind::Success,
                "Question-Oriented Content",
                "The content answers the kind of questions users ask AI assistants.",
            )
            .with_metric("Question headings", question_headings),
        );
        score += 20;
    } else {
        findings.push(Finding::new(
            FindingKind::Warning,
            "No Question-Oriented Content",
            "Phrase sections as questions (what is, how to, why) that match conversational queries.",
        ));
    }

    if data.has_schema {
        findings.push(Finding::new(
            FindingKind::Success,
            "Machine-Readable Context",
            "Schema markup tells AI engines what the page is about.",
        ));
        score += 20;
    } else {
        findings.push(Finding::new(
            FindingKind::Error,
            "No Machine-Readable Context",
            "Without schema markup AI engines must guess the page's entities and purpose.",
        ));
    }

    if contains_any(&data.content, &RECENT_YEARS) || has_proper_noun_pair(&data.content) {
        findings.push(Finding::new(
            FindingKind::Success,
            "Clear Entities",
            "Named entities and dates make the content easy to attribute and cite.",
        ));
        score += 15;
    } else {
        findings.push(Finding::new(
            FindingKind::Warning,
            "Unclear Entities",
            "Mention specific people, organizations, products and dates.",
        ));
    }

    let score = clamp_score(score);
    debug!(score, findings = findings.len(), "geo visibility scored");
    ScoreResult { findings, score }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{heading, rich_page};

    #[test]
    fn rich_page_scores_full_marks() {
        let result = analyze_geo(&rich_page());
        assert_eq!(result.score, 100);
        assert_eq!(result.findings.len(), 5);
    }

    #[test]
    fn empty_page_scores_zero_with_one_finding_per_rule() {
        let result = analyze_geo(&WebsiteData::default());
        assert_eq!(result.score, 0);
        let kinds = result.findings.iter().map(|f| f.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                FindingKind::Warning,
                FindingKind::Error,
                FindingKind::Warning,
                FindingKind::Error,
                FindingKind::Warning,
            ]
        );
    }

    #[test]
    fn summary_markers_are_case_insensitive() {
        let data = WebsiteData {
            content: "KEY TAKEAWAYS: ship it".to_string(),
            ..WebsiteData::default()
        };
        assert_eq!(analyze_geo(&data).score, 25);
    }

    #[test]
    fn question_heading_counts_without_question_text() {
        let data = WebsiteData {
            headings: vec![heading(3, "Does it scale?")],
            ..WebsiteData::default()
        };
        let result = analyze_geo(&data);
        assert_eq!(result.score, 20);
        assert_eq!(result.findings[2].title, "Question-Oriented Content");
    }

    #[test]
    fn entity_clarity_accepts_year_or_proper_nouns() {
        let dated = WebsiteData {
            content: "released in 2023".to_string(),
            ..WebsiteData::default()
        };
        assert_eq!(analyze_geo(&dated).score, 15);

        let named = WebsiteData {
            content: "built at Acme Corp".to_string(),
            ..WebsiteData::default()
        };
        assert_eq!(analyze_geo(&named).score, 15);
    }

    #[test]
    fn scoring_is_idempotent() {
        let data = rich_page();
        assert_eq!(analyze_geo(&data), analyze_geo(&data));
    }
}
