//! Twelve-factor AI platform visibility model.
//!
//! Every factor is an independent 0-100 heuristic over the scrape record.
//! The overall score is the rounded share of the 1200 attainable points and
//! each factor's status follows from its own score (pass >= 80, warning >= 50).

use super::text;
use crate::types::report::{
    AiVisibilityReport, FactorStatus, Priority, VisibilityFactor, VisibilityRecommendation,
};
use crate::types::scoring::{clamp_score, overall_percentage, Score};
use crate::types::website::WebsiteData;
use tracing::debug;

pub const MAX_RECOMMENDATIONS: usize = 8;
pub const FRESHNESS_THRESHOLD: Score = 70;
/// Years at or after this count as current for the freshness factor.
pub const CURRENT_YEAR_FLOOR: u32 = 2024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Crawlability,
    HtmlStructure,
    ContentClarity,
    Scannability,
    SummarySections,
    QaFormat,
    SchemaMarkup,
    TrustedEntities,
    DataFormats,
    Readability,
    Freshness,
    Credibility,
}

impl Factor {
    pub const ALL: [Factor; 12] = [
        Factor::Crawlability,
        Factor::HtmlStructure,
        Factor::ContentClarity,
        Factor::Scannability,
        Factor::SummarySections,
        Factor::QaFormat,
        Factor::SchemaMarkup,
        Factor::TrustedEntities,
        Factor::DataFormats,
        Factor::Readability,
        Factor::Freshness,
        Factor::Credibility,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::Crawlability => "Crawlability",
            Factor::HtmlStructure => "HTML Structure",
            Factor::ContentClarity => "Content Clarity",
            Factor::Scannability => "Scannability",
            Factor::SummarySections => "Summary Sections",
            Factor::QaFormat => "Q&A Format",
            Factor::SchemaMarkup => "Schema Markup",
            Factor::TrustedEntities => "Trusted Entities",
            Factor::DataFormats => "Data Formats",
            Factor::Readability => "Readability",
            Factor::Freshness => "Freshness",
            Factor::Credibility => "Credibility",
        }
    }

    fn evaluate(self, data: &WebsiteData) -> (Score, String) {
        match self {
            Factor::Crawlability => crawlability(data),
            Factor::HtmlStructure => html_structure(data),
            Factor::ContentClarity => content_clarity(data),
            Factor::Scannability => scannability(data),
            Factor::SummarySections => summary_sections(data),
            Factor::QaFormat => qa_format(data),
            Factor::SchemaMarkup => schema_markup(data),
            Factor::TrustedEntities => trusted_entities(data),
            Factor::DataFormats => data_formats(data),
            Factor::Readability => readability(data),
            Factor::Freshness => freshness(data),
            Factor::Credibility => credibility(data),
        }
    }

    /// Fixed remediation: (action, description, impact).
    pub(crate) fn remediation(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Factor::Crawlability => (
                "Improve crawlability",
                "Give the page a title and meta description, at least 300 words of text, internal links and a load time under 3 seconds.",
                "AI crawlers can fetch and index the full page.",
            ),
            Factor::HtmlStructure => (
                "Fix the heading hierarchy",
                "Use one H1, several H2 sections with H3 subsections, and never skip heading levels.",
                "Answer engines can map the page outline to user questions.",
            ),
            Factor::ContentClarity => (
                "Shorten sentences",
                "Keep sentences around 15-20 words and lead each paragraph with its main point.",
                "Short, direct statements are easier for AI models to quote.",
            ),
            Factor::Scannability => (
                "Make the content scannable",
                "Add a heading or list roughly every 300 words.",
                "Chunked content maps cleanly to individual AI answers.",
            ),
            Factor::SummarySections => (
                "Add a summary section",
                "Open with a TL;DR or key takeaways block that answers the main question in 2-3 sentences.",
                "Gives AI engines a ready-made answer to cite.",
            ),
            Factor::QaFormat => (
                "Add a Q&A section",
                "Phrase headings as the questions users ask and answer each one directly below it.",
                "Matches the conversational queries AI assistants receive.",
            ),
            Factor::SchemaMarkup => (
                "Add schema markup",
                "Describe the page with Article, FAQPage or HowTo markup and the publishing Organization.",
                "Machine-readable context removes guesswork for AI engines.",
            ),
            Factor::TrustedEntities => (
                "Reference trusted entities",
                "Name specific organizations, people and products and link to authoritative external sources.",
                "Clear entities make the content easier to attribute and trust.",
            ),
            Factor::DataFormats => (
                "Add data and lists",
                "Support claims with numbers, percentages, bullet lists and comparison tables.",
                "Structured facts are preferred when AI engines compose answers.",
            ),
            Factor::Readability => (
                "Simplify wording",
                "Replace long, multi-syllable words with plain language where possible.",
                "Plain language is summarized more accurately.",
            ),
            Factor::Freshness => (
                "Show content freshness",
                "Display a last-updated date and reference current-year data.",
                "AI engines favour recent sources for time-sensitive questions.",
            ),
            Factor::Credibility => (
                "Strengthen credibility signals",
                "Add an author byline, cite research and sources, and mark up the publishing Organization or Person.",
                "Credible sources are more likely to be referenced.",
            ),
        }
    }
}

pub fn analyze_ai_platform_visibility(data: &WebsiteData) -> AiVisibilityReport {
    let factors = Factor::ALL
        .iter()
        .map(|factor| {
            let (score, description) = factor.evaluate(data);
            VisibilityFactor {
                factor: factor.name().to_string(),
                score,
                description,
                status: FactorStatus::from_score(score),
            }
        })
        .collect::<Vec<_>>();

    let scores = factors.iter().map(|factor| factor.score).collect::<Vec<_>>();
    let overall_score = overall_percentage(&scores);
    let summary = summarize(overall_score, &factors);
    let recommendations = recommend(overall_score, &factors);

    debug!(
        overall_score,
        recommendations = recommendations.len(),
        "ai platform visibility scored"
    );

    AiVisibilityReport {
        overall_score,
        summary,
        factors,
        recommendations,
    }
}

fn summarize(overall: Score, factors: &[VisibilityFactor]) -> String {
    let failing = count_status(factors, FactorStatus::Fail);
    let warning = count_status(factors, FactorStatus::Warning);
    if overall >= 80 {
        format!(
            "Excellent AI visibility. The page is well prepared for AI answer engines; {failing} failing and {warning} warning factors remain to polish."
        )
    } else if overall >= 60 {
        format!(
            "Good AI visibility with room to improve: {failing} factors are failing and {warning} need attention."
        )
    } else if overall >= 40 {
        format!(
            "Moderate AI visibility: {failing} factors are failing and {warning} need attention before AI engines cite this page reliably."
        )
    } else {
        format!(
            "Poor AI visibility: {failing} of {} factors are failing and {warning} need attention; AI answer engines are unlikely to reference this page.",
            factors.len()
        )
    }
}

fn count_status(factors: &[VisibilityFactor], status: FactorStatus) -> usize {
    factors.iter().filter(|factor| factor.status == status).count()
}

fn recommend(overall: Score, factors: &[VisibilityFactor]) -> Vec<VisibilityRecommendation> {
    let mut recommendations = Vec::new();

    for (status, priority) in [
        (FactorStatus::Fail, Priority::High),
        (FactorStatus::Warning, Priority::Medium),
    ] {
        for (factor, result) in Factor::ALL.iter().zip(factors) {
            if result.status == status {
                let (action, description, impact) = factor.remediation();
                recommendations.push(VisibilityRecommendation {
                    priority,
                    action: action.to_string(),
                    description: description.to_string(),
                    impact: impact.to_string(),
                });
            }
        }
    }

    if overall < FRESHNESS_THRESHOLD {
        recommendations.push(VisibilityRecommendation {
            priority: Priority::Medium,
            action: "Review and refresh content regularly".to_string(),
            description: "Schedule periodic reviews that update facts, dates and examples."
                .to_string(),
            impact: "Keeps the page eligible as a current source for AI answers.".to_string(),
        });
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn crawlability(data: &WebsiteData) -> (Score, String) {
    let mut score = 0;
    if !data.title.trim().is_empty() {
        score += 25;
    }
    if !data.meta_description.trim().is_empty() {
        score += 15;
    }
    if data.word_count >= 300 {
        score += 30;
    } else if data.word_count >= 100 {
        score += 15;
    }
    if data.internal_links() > 0 {
        score += 15;
    }
    if data.load_time <= 3000 {
        score += 15;
    }
    (
        clamp_score(score),
        format!(
            "{} words, {} internal links, loads in {} ms.",
            data.word_count,
            data.internal_links(),
            data.load_time
        ),
    )
}

fn html_structure(data: &WebsiteData) -> (Score, String) {
    let h1 = data.count_headings(1);
    let h2 = data.count_headings(2);
    let h3 = data.count_headings(3);
    let sequential = !data.headings.is_empty()
        && data
            .headings
            .windows(2)
            .all(|pair| u16::from(pair[1].level) <= u16::from(pair[0].level) + 1);

    let mut score = 0;
    score += match h1 {
        1 => 30,
        0 => 0,
        _ => 15,
    };
    score += match h2 {
        0 => 0,
        1 => 15,
        _ => 30,
    };
    if h3 > 0 {
        score += 15;
    }
    if sequential {
        score += 25;
    }
    let hierarchy = if sequential { "sequential" } else { "broken or missing" };
    (
        clamp_score(score),
        format!("{h1} H1, {h2} H2, {h3} H3 headings; hierarchy is {hierarchy}."),
    )
}

fn content_clarity(data: &WebsiteData) -> (Score, String) {
    match text::average_words_per_sentence(&data.content) {
        None => (0, "No readable sentences found.".to_string()),
        Some(average) => {
            let score = if average <= 20.0 {
                100
            } else if average <= 25.0 {
                75
            } else if average <= 30.0 {
                50
            } else {
                25
            };
            (
                score,
                format!("Sentences average {average:.1} words."),
            )
        }
    }
}

fn scannability(data: &WebsiteData) -> (Score, String) {
    let words = if data.word_count > 0 {
        data.word_count as usize
    } else {
        text::words(&data.content).count()
    };
    let blocks = data.headings.len() + text::list_item_count(&data.content);
    if words == 0 {
        return (0, "No content to scan.".to_string());
    }
    let per_300_words = blocks as f64 * 300.0 / words as f64;
    let score = if per_300_words >= 1.0 {
        100
    } else if per_300_words >= 0.5 {
        70
    } else if blocks > 0 {
        40
    } else {
        0
    };
    (
        score,
        format!("{blocks} headings and list items across {words} words."),
    )
}

fn summary_sections(data: &WebsiteData) -> (Score, String) {
    if text::contains_any(&data.content, &["tl;dr", "key takeaways"]) {
        (100, "A TL;DR or key takeaways block is present.".to_string())
    } else if text::contains_any(
        &data.content,
        &["summary", "in short", "conclusion", "bottom line"],
    ) {
        (70, "A summary or conclusion exists but no TL;DR block.".to_string())
    } else {
        (0, "No summary section found.".to_string())
    }
}

fn qa_format(data: &WebsiteData) -> (Score, String) {
    let question_headings = data
        .headings
        .iter()
        .filter(|heading| heading.text.trim_end().ends_with('?'))
        .count();
    let mut score: u32 = if question_headings >= 3 {
        90
    } else if question_headings >= 1 {
        70
    } else if text::contains_any(&data.content, &["faq", "frequently asked"]) {
        50
    } else if text::contains_any(&data.content, &["what is", "how to", "why"]) {
        30
    } else {
        0
    };
    if data.schema_types.contains("FAQPage") || data.schema_types.contains("QAPage") {
        score += 10;
    }
    (
        clamp_score(score),
        format!("{question_headings} headings are phrased as questions."),
    )
}

fn schema_markup(data: &WebsiteData) -> (Score, String) {
    if !data.has_schema {
        return (0, "No structured data detected.".to_string());
    }
    let has_any = |types: &[&str]| types.iter().any(|ty| data.schema_types.contains(*ty));
    let mut score = 50;
    if has_any(&["Article", "BlogPosting", "NewsArticle", "Product", "Recipe", "WebPage"]) {
        score += 25;
    }
    if has_any(&["Organization", "Person", "LocalBusiness"]) {
        score += 15;
    }
    if has_any(&["FAQPage", "HowTo", "BreadcrumbList", "QAPage"]) {
        score += 10;
    }
    (
        clamp_score(score),
        format!("{} schema types declared.", data.schema_types.len()),
    )
}

fn trusted_entities(data: &WebsiteData) -> (Score, String) {
    let external = data.external_links();
    let entities = text::proper_noun_pairs(&data.content);
    let mut score = external.min(3) as u32 * 20;
    if entities >= 3 {
        score += 40;
    } else if entities >= 1 {
        score += 20;
    }
    (
        clamp_score(score),
        format!("{external} external links and {entities} named entities."),
    )
}

fn data_formats(data: &WebsiteData) -> (Score, String) {
    let percentages = text::percentage_count(&data.content);
    let numbers = text::number_count(&data.content);
    let list_items = text::list_item_count(&data.content);
    let mut score = 0;
    if percentages > 0 {
        score += 35;
    }
    if numbers >= 5 {
        score += 30;
    } else if numbers >= 1 {
        score += 15;
    }
    if list_items >= 3 {
        score += 35;
    } else if list_items >= 1 {
        score += 20;
    }
    (
        clamp_score(score),
        format!("{numbers} numbers, {percentages} percentages, {list_items} list items."),
    )
}

fn readability(data: &WebsiteData) -> (Score, String) {
    match text::complex_word_ratio(&data.content) {
        None => (0, "No words to assess.".to_string()),
        Some(ratio) => {
            let score = if ratio <= 0.10 {
                100
            } else if ratio <= 0.15 {
                80
            } else if ratio <= 0.20 {
                60
            } else if ratio <= 0.30 {
                40
            } else {
                20
            };
            (
                score,
                format!("{:.0}% of words have three or more syllables.", ratio * 100.0),
            )
        }
    }
}

fn freshness(data: &WebsiteData) -> (Score, String) {
    let latest = text::latest_year(&data.content);
    let mut score = match latest {
        Some(year) if year >= CURRENT_YEAR_FLOOR => 60,
        Some(year) if year + 2 >= CURRENT_YEAR_FLOOR => 40,
        Some(_) => 15,
        None => 0,
    };
    let dated = text::contains_any(&data.content, &["updated", "last modified", "published"]);
    if dated {
        score += 40;
    }
    let description = match latest {
        Some(year) => format!("Most recent year mentioned is {year}."),
        None => "No dates mentioned.".to_string(),
    };
    (clamp_score(score), description)
}

fn credibility(data: &WebsiteData) -> (Score, String) {
    let mut score = 0;
    let mut signals = Vec::new();
    if text::contains_any(
        &data.content,
        &["according to", "research", "study", "survey", "source"],
    ) {
        score += 30;
        signals.push("citations");
    }
    if data.external_links() > 0 {
        score += 30;
        signals.push("external references");
    }
    if text::contains_any(&data.content, &["author", "written by", "reviewed by", "expert"]) {
        score += 20;
        signals.push("authorship");
    }
    if data.schema_types.contains("Organization") || data.schema_types.contains("Person") {
        score += 20;
        signals.push("publisher markup");
    }
    let description = if signals.is_empty() {
        "No credibility signals found.".to_string()
    } else {
        format!("Signals: {}.", signals.join(", "))
    };
    (clamp_score(score), description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{heading, rich_page};

    #[test]
    fn report_has_twelve_factors_in_fixed_order() {
        let report = analyze_ai_platform_visibility(&rich_page());
        let names = report
            .factors
            .iter()
            .map(|factor| factor.factor.as_str())
            .collect::<Vec<_>>();
        let expected = Factor::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
        assert_eq!(names, expected);
    }

    #[test]
    fn overall_score_matches_rounded_share() {
        for data in [rich_page(), WebsiteData::default()] {
            let report = analyze_ai_platform_visibility(&data);
            let sum: u32 = report.factors.iter().map(|f| u32::from(f.score)).sum();
            let expected = (f64::from(sum) / 1200.0 * 100.0).round() as u32;
            assert_eq!(report.overall_score, clamp_score(expected));
        }
    }

    #[test]
    fn statuses_follow_scores() {
        let report = analyze_ai_platform_visibility(&rich_page());
        for factor in &report.factors {
            assert!(factor.score <= 100);
            assert_eq!(factor.status, FactorStatus::from_score(factor.score));
        }
    }

    #[test]
    fn rich_page_is_excellent() {
        let report = analyze_ai_platform_visibility(&rich_page());
        assert!(report.overall_score >= 80, "{report:?}");
        assert!(report.summary.starts_with("Excellent"));
        assert!(report.recommendations.len() <= MAX_RECOMMENDATIONS);
    }

    #[test]
    fn empty_page_is_poor_and_capped() {
        let report = analyze_ai_platform_visibility(&WebsiteData::default());
        assert!(report.overall_score < 40);
        assert!(report.summary.starts_with("Poor"));
        assert_eq!(report.recommendations.len(), MAX_RECOMMENDATIONS);
        assert!(report
            .recommendations
            .iter()
            .all(|rec| rec.priority == Priority::High));
    }

    #[test]
    fn failures_come_before_warnings_then_generic() {
        let mut data = rich_page();
        data.content = "Plain text about nothing in particular. It goes on.".to_string();
        data.word_count = 9;
        let report = analyze_ai_platform_visibility(&data);
        let priorities = report
            .recommendations
            .iter()
            .map(|rec| rec.priority)
            .collect::<Vec<_>>();
        let first_medium = priorities
            .iter()
            .position(|p| *p == Priority::Medium)
            .unwrap_or(priorities.len());
        assert!(priorities[first_medium..]
            .iter()
            .all(|p| *p == Priority::Medium));
        assert!(report.recommendations.len() <= MAX_RECOMMENDATIONS);
    }

    fn factors_with(statuses: &[FactorStatus]) -> Vec<VisibilityFactor> {
        Factor::ALL
            .iter()
            .zip(statuses)
            .map(|(factor, status)| VisibilityFactor {
                factor: factor.name().to_string(),
                score: match status {
                    FactorStatus::Pass => 90,
                    FactorStatus::Warning => 60,
                    FactorStatus::Fail => 20,
                },
                description: String::new(),
                status: *status,
            })
            .collect()
    }

    #[test]
    fn generic_recommendation_is_last_below_seventy() {
        let mut statuses = [FactorStatus::Pass; 12];
        statuses[0] = FactorStatus::Warning;
        statuses[3] = FactorStatus::Fail;
        let recommendations = recommend(60, &factors_with(&statuses));
        let actions = recommendations
            .iter()
            .map(|rec| (rec.priority, rec.action.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(actions.len(), 3, "{actions:?}");
        assert_eq!(actions[0].0, Priority::High);
        assert_eq!(actions[1].0, Priority::Medium);
        assert_eq!(
            actions[2],
            (Priority::Medium, "Review and refresh content regularly")
        );

        let passing = recommend(FRESHNESS_THRESHOLD, &factors_with(&statuses));
        assert_eq!(passing.len(), 2);
    }

    #[test]
    fn generic_recommendation_fills_the_last_slot() {
        let mut statuses = [FactorStatus::Pass; 12];
        for status in statuses.iter_mut().take(MAX_RECOMMENDATIONS - 1) {
            *status = FactorStatus::Fail;
        }
        let recommendations = recommend(30, &factors_with(&statuses));
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(
            recommendations.last().map(|rec| rec.action.as_str()),
            Some("Review and refresh content regularly")
        );
    }

    #[test]
    fn generic_recommendation_is_truncated_behind_full_list() {
        let recommendations = recommend(10, &factors_with(&[FactorStatus::Fail; 12]));
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert!(recommendations
            .iter()
            .all(|rec| rec.priority == Priority::High));
        assert!(!recommendations
            .iter()
            .any(|rec| rec.action == "Review and refresh content regularly"));
    }

    #[test]
    fn oversized_heading_levels_do_not_panic() {
        let data = WebsiteData {
            headings: vec![heading(255, "Deep"), heading(1, "Top"), heading(255, "Deep again")],
            ..WebsiteData::default()
        };
        let report = analyze_ai_platform_visibility(&data);
        let structure = report
            .factors
            .iter()
            .find(|factor| factor.factor == "HTML Structure")
            .expect("structure factor present");
        assert!(structure.score <= 100);
    }

    #[test]
    fn summary_missing_maps_to_summary_recommendation() {
        let mut data = rich_page();
        data.content = data
            .content
            .replace("TL;DR", "Intro")
            .replace("Key takeaways", "Notes")
            .replace("summary", "recap");
        let report = analyze_ai_platform_visibility(&data);
        let summary = report
            .factors
            .iter()
            .find(|factor| factor.factor == "Summary Sections")
            .expect("summary factor present");
        assert_eq!(summary.status, FactorStatus::Fail);
        assert!(report
            .recommendations
            .iter()
            .any(|rec| rec.action == "Add a summary section" && rec.priority == Priority::High));
    }

    #[test]
    fn generic_recommendation_only_below_seventy() {
        let rich = analyze_ai_platform_visibility(&rich_page());
        assert!(rich.overall_score >= FRESHNESS_THRESHOLD);
        assert!(!rich
            .recommendations
            .iter()
            .any(|rec| rec.action == "Review and refresh content regularly"));
    }

    #[test]
    fn freshness_scores_recent_dates() {
        let data = WebsiteData {
            content: "Last updated March 2025.".to_string(),
            ..WebsiteData::default()
        };
        assert_eq!(freshness(&data).0, 100);
        let stale = WebsiteData {
            content: "Written in 2015.".to_string(),
            ..WebsiteData::default()
        };
        assert_eq!(freshness(&stale).0, 15);
    }

    #[test]
    fn html_structure_detects_skipped_levels() {
        let mut data = rich_page();
        let (sequential, _) = html_structure(&data);
        data.headings.push(crate::analyze::test_support::heading(5, "Deep"));
        let (skipped, description) = html_structure(&data);
        assert_eq!(sequential - skipped, 25);
        assert!(description.contains("broken"));
    }

    #[test]
    fn scoring_is_idempotent() {
        let data = rich_page();
        assert_eq!(
            analyze_ai_platform_visibility(&data),
            analyze_ai_platform_visibility(&data)
        );
    }
}
