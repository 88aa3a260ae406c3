use super::geo::SUMMARY_MARKERS;
use super::text::contains_any;
use super::visibility::Factor;
use crate::types::report::{
    AiVisibilityReport, AuditReport, ComparisonDifferences, ComparisonResult, DifferenceCategory,
    KeyDifference, MetricValue, Performer,
};
use crate::types::website::WebsiteData;
use tracing::debug;

pub const SEO_DIFF_THRESHOLD: i32 = 10;
pub const AI_DIFF_THRESHOLD: i32 = 10;
pub const VISIBILITY_DIFF_THRESHOLD: i32 = 15;

/// Compare two scored pages. Diffs are `second - first`; positive favours url2.
pub fn compare_websites(
    data1: &WebsiteData,
    report1: &AuditReport,
    data2: &WebsiteData,
    report2: &AuditReport,
    visibility: Option<(&AiVisibilityReport, &AiVisibilityReport)>,
) -> ComparisonResult {
    let seo_score_diff = i32::from(report2.seo_score) - i32::from(report1.seo_score);
    let ai_score_diff = i32::from(report2.ai_score) - i32::from(report1.ai_score);
    let ai_visibility_diff = visibility
        .map(|(first, second)| i32::from(second.overall_score) - i32::from(first.overall_score));

    let total = seo_score_diff + ai_score_diff + ai_visibility_diff.unwrap_or(0);
    let better_performer = if total > 0 {
        Performer::Url2
    } else {
        Performer::Url1
    };

    let mut key_differences = Vec::new();
    if seo_score_diff.abs() > SEO_DIFF_THRESHOLD {
        seo_differences(data1, report1, data2, report2, &mut key_differences);
    }
    if ai_score_diff.abs() > AI_DIFF_THRESHOLD {
        ai_differences(data1, report1, data2, report2, &mut key_differences);
    }
    if let (Some(diff), Some((first, second))) = (ai_visibility_diff, visibility) {
        if diff.abs() > VISIBILITY_DIFF_THRESHOLD {
            visibility_differences(first, second, &mut key_differences);
        }
    }

    debug!(
        seo_score_diff,
        ai_score_diff,
        ?ai_visibility_diff,
        differences = key_differences.len(),
        "websites compared"
    );

    ComparisonResult {
        url1_report: report1.clone(),
        url2_report: report2.clone(),
        differences: ComparisonDifferences {
            seo_score_diff,
            ai_score_diff,
            ai_visibility_diff,
            better_performer,
            key_differences,
        },
    }
}

fn push(
    out: &mut Vec<KeyDifference>,
    category: DifferenceCategory,
    aspect: &str,
    url1_value: impl Into<MetricValue>,
    url2_value: impl Into<MetricValue>,
    recommendation: &str,
) {
    out.push(KeyDifference {
        category,
        aspect: aspect.to_string(),
        url1_value: url1_value.into(),
        url2_value: url2_value.into(),
        recommendation: recommendation.to_string(),
    });
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn seo_differences(
    data1: &WebsiteData,
    report1: &AuditReport,
    data2: &WebsiteData,
    report2: &AuditReport,
    out: &mut Vec<KeyDifference>,
) {
    push(
        out,
        DifferenceCategory::Seo,
        "Traditional SEO score",
        report1.seo_score,
        report2.seo_score,
        "Work through the weaker page's SEO findings, starting with errors.",
    );

    let title1 = data1.title.chars().count();
    let title2 = data2.title.chars().count();
    if title1 != title2 {
        push(
            out,
            DifferenceCategory::Seo,
            "Title length",
            title1,
            title2,
            "Keep titles between 30 and 60 characters with the main keyword near the start.",
        );
    }

    let meta1 = data1.meta_description.chars().count();
    let meta2 = data2.meta_description.chars().count();
    if meta1 != meta2 {
        push(
            out,
            DifferenceCategory::Seo,
            "Meta description length",
            meta1,
            meta2,
            "Write meta descriptions of 120 to 160 characters that summarize the page.",
        );
    }

    let h1_1 = data1.count_headings(1);
    let h1_2 = data2.count_headings(1);
    if h1_1 != h1_2 {
        push(
            out,
            DifferenceCategory::Seo,
            "H1 headings",
            h1_1,
            h1_2,
            "Use exactly one H1 that states the page topic.",
        );
    }

    let alt1 = data1.images_missing_alt();
    let alt2 = data2.images_missing_alt();
    if alt1 != alt2 {
        push(
            out,
            DifferenceCategory::Seo,
            "Images without alt text",
            alt1,
            alt2,
            "Add descriptive alt text to every meaningful image.",
        );
    }

    if data1.load_time != data2.load_time {
        push(
            out,
            DifferenceCategory::Seo,
            "Load time (ms)",
            data1.load_time,
            data2.load_time,
            "Compress images and defer scripts to load in under 3 seconds.",
        );
    }
}

fn ai_differences(
    data1: &WebsiteData,
    report1: &AuditReport,
    data2: &WebsiteData,
    report2: &AuditReport,
    out: &mut Vec<KeyDifference>,
) {
    push(
        out,
        DifferenceCategory::Ai,
        "AI visibility score",
        report1.ai_score,
        report2.ai_score,
        "Apply the GEO findings: summaries, question headings, schema and clear entities.",
    );

    let summary1 = contains_any(&data1.content, &SUMMARY_MARKERS);
    let summary2 = contains_any(&data2.content, &SUMMARY_MARKERS);
    if summary1 != summary2 {
        push(
            out,
            DifferenceCategory::Ai,
            "Summary section",
            yes_no(summary1),
            yes_no(summary2),
            "Add a TL;DR or key takeaways block near the top of the page.",
        );
    }

    let questions1 = question_headings(data1);
    let questions2 = question_headings(data2);
    if questions1 != questions2 {
        push(
            out,
            DifferenceCategory::Ai,
            "Question headings",
            questions1,
            questions2,
            "Phrase section headings as the questions users ask AI assistants.",
        );
    }

    if data1.has_schema != data2.has_schema {
        push(
            out,
            DifferenceCategory::Ai,
            "Schema markup",
            yes_no(data1.has_schema),
            yes_no(data2.has_schema),
            "Add schema.org markup so AI engines can identify the page's entities.",
        );
    }
}

fn question_headings(data: &WebsiteData) -> usize {
    data.headings
        .iter()
        .filter(|heading| heading.text.contains('?'))
        .count()
}

fn visibility_differences(
    first: &AiVisibilityReport,
    second: &AiVisibilityReport,
    out: &mut Vec<KeyDifference>,
) {
    push(
        out,
        DifferenceCategory::Visibility,
        "AI platform visibility",
        first.overall_score,
        second.overall_score,
        "Follow the weaker page's visibility recommendations, failing factors first.",
    );

    for ((factor, a), b) in Factor::ALL.iter().zip(&first.factors).zip(&second.factors) {
        if (i32::from(a.score) - i32::from(b.score)).abs() > VISIBILITY_DIFF_THRESHOLD {
            push(
                out,
                DifferenceCategory::Visibility,
                factor.name(),
                a.score,
                b.score,
                factor.remediation().1,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::test_support::{rich_page, stored};
    use crate::analyze::visibility::analyze_ai_platform_visibility;

    #[test]
    fn score_diffs_and_better_performer() {
        let data = rich_page();
        let first = stored(70, 40);
        let second = stored(85, 55);
        let result = compare_websites(&data, &first, &data, &second, None);

        assert_eq!(result.differences.seo_score_diff, 15);
        assert_eq!(result.differences.ai_score_diff, 15);
        assert_eq!(result.differences.ai_visibility_diff, None);
        assert_eq!(result.differences.better_performer, Performer::Url2);
        let categories = result
            .differences
            .key_differences
            .iter()
            .map(|diff| diff.category)
            .collect::<Vec<_>>();
        assert!(categories.contains(&DifferenceCategory::Seo));
        assert!(categories.contains(&DifferenceCategory::Ai));
    }

    #[test]
    fn small_diffs_emit_no_key_differences() {
        let data = rich_page();
        let result = compare_websites(&data, &stored(70, 40), &data, &stored(80, 50), None);
        assert!(result.differences.key_differences.is_empty());
        assert_eq!(result.differences.better_performer, Performer::Url2);
    }

    #[test]
    fn ties_favour_first_url() {
        let data = rich_page();
        let result = compare_websites(&data, &stored(60, 60), &data, &stored(70, 50), None);
        assert_eq!(result.differences.better_performer, Performer::Url1);
    }

    #[test]
    fn raw_values_differ_per_aspect() {
        let first_data = rich_page();
        let second_data = WebsiteData {
            title: "Short".to_string(),
            load_time: 4200,
            ..rich_page()
        };
        let result = compare_websites(
            &first_data,
            &stored(90, 50),
            &second_data,
            &stored(70, 50),
            None,
        );
        let aspects = result
            .differences
            .key_differences
            .iter()
            .map(|diff| diff.aspect.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            aspects,
            vec!["Traditional SEO score", "Title length", "Load time (ms)"]
        );
        assert_eq!(result.differences.better_performer, Performer::Url1);
    }

    #[test]
    fn visibility_diff_enters_total_and_differences() {
        let strong = rich_page();
        let weak = WebsiteData::default();
        let strong_vis = analyze_ai_platform_visibility(&strong);
        let weak_vis = analyze_ai_platform_visibility(&weak);
        let result = compare_websites(
            &weak,
            &stored(50, 50),
            &strong,
            &stored(45, 50),
            Some((&weak_vis, &strong_vis)),
        );

        let diff = result
            .differences
            .ai_visibility_diff
            .expect("visibility diff present");
        assert_eq!(
            diff,
            i32::from(strong_vis.overall_score) - i32::from(weak_vis.overall_score)
        );
        assert_eq!(result.differences.better_performer, Performer::Url2);
        assert!(result
            .differences
            .key_differences
            .iter()
            .all(|diff| diff.category == DifferenceCategory::Visibility));
        assert!(result
            .differences
            .key_differences
            .iter()
            .any(|diff| diff.aspect == "Summary Sections"));
    }
}
