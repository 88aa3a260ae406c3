use crate::types::report::{
    AiVisibilityReport, AuditReport, ComparisonResult, ContentSuggestions, FactorStatus, Finding,
    FindingKind, Level, Performer, Priority, ScoreResult,
};

fn kind_label(kind: FindingKind) -> &'static str {
    match kind {
        FindingKind::Success => "success",
        FindingKind::Warning => "warning",
        FindingKind::Error => "error",
    }
}

fn status_label(status: FactorStatus) -> &'static str {
    match status {
        FactorStatus::Pass => "pass",
        FactorStatus::Warning => "warning",
        FactorStatus::Fail => "fail",
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::Low => "low",
        Level::Medium => "medium",
        Level::High => "high",
    }
}

fn push_finding(output: &mut String, finding: &Finding) {
    output.push_str(&format!(
        "- [{}] {}: {}\n",
        kind_label(finding.kind),
        finding.title,
        finding.description
    ));
    if let Some(details) = &finding.details {
        output.push_str(&format!("  - details: {details}\n"));
    }
    if let Some(metrics) = &finding.metrics {
        for (name, value) in metrics {
            output.push_str(&format!("  - {name}: {value}\n"));
        }
    }
}

fn push_section(output: &mut String, heading: &str, result: &ScoreResult) {
    output.push_str(&format!("## {heading} ({}/100)\n\n", result.score));
    if result.findings.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for finding in &result.findings {
        push_finding(output, finding);
    }
    output.push('\n');
}

pub fn audit_to_markdown(report: &AuditReport) -> String {
    let mut output = String::new();
    output.push_str("# Audit Report\n\n");
    output.push_str(&format!("URL: {}\n", report.url));
    output.push_str(&format!("Report: {} ({})\n\n", report.id, report.created_at.to_rfc3339()));
    output.push_str(&format!(
        "SEO score: {}\nAI score: {}\n\n",
        report.seo_score, report.ai_score
    ));

    push_section(&mut output, "Traditional SEO", &report.traditional_seo_results);
    push_section(&mut output, "GEO Visibility", &report.geo_results);

    if let Some(visibility) = &report.ai_visibility {
        output.push_str(&visibility_to_markdown(visibility).replacen("# ", "## ", 1));
        output.push('\n');
    }

    output.push_str(&suggestions_to_markdown(&report.content_suggestions).replacen("# ", "## ", 1));
    output
}

pub fn visibility_to_markdown(report: &AiVisibilityReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# AI Platform Visibility ({}/100)\n\n{}\n\n",
        report.overall_score, report.summary
    ));
    output.push_str("| Factor | Score | Status | Notes |\n|---|---|---|---|\n");
    for factor in &report.factors {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            factor.factor,
            factor.score,
            status_label(factor.status),
            factor.description
        ));
    }
    output.push('\n');

    output.push_str("Recommendations:\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
    }
    for recommendation in &report.recommendations {
        let priority = match recommendation.priority {
            Priority::High => "high",
            Priority::Medium => "medium",
        };
        output.push_str(&format!(
            "- [{priority}] {}: {} ({})\n",
            recommendation.action, recommendation.description, recommendation.impact
        ));
    }
    output
}

pub fn suggestions_to_markdown(suggestions: &ContentSuggestions) -> String {
    let mut output = String::new();
    output.push_str("# Content Suggestions\n\n");

    if !suggestions.missing_keywords.is_empty() {
        output.push_str(&format!(
            "Missing keywords: {}\n\n",
            suggestions.missing_keywords.join(", ")
        ));
    }
    if !suggestions.blog_titles.is_empty() {
        output.push_str("Blog titles:\n\n");
        for blog in &suggestions.blog_titles {
            output.push_str(&format!("- {} ({})\n", blog.title, blog.target));
        }
        output.push('\n');
    }
    if !suggestions.content_structure.is_empty() {
        output.push_str("Outline:\n\n");
        for line in &suggestions.content_structure {
            output.push_str(&format!("- {line}\n"));
        }
        output.push('\n');
    }
    if !suggestions.faqs.is_empty() {
        output.push_str("FAQs:\n\n");
        for faq in &suggestions.faqs {
            output.push_str(&format!("- {} {}\n", faq.question, faq.answer));
        }
        output.push('\n');
    }
    if !suggestions.ai_visibility.is_empty() {
        let platforms = suggestions
            .ai_visibility
            .iter()
            .map(|(platform, level)| format!("{platform}: {}", level_label(*level)))
            .collect::<Vec<_>>();
        output.push_str(&format!("Platform visibility: {}\n\n", platforms.join(", ")));
    }

    output.push_str("AI improvements:\n\n");
    if suggestions.ai_improvements.is_empty() {
        output.push_str("- none\n");
    }
    for improvement in &suggestions.ai_improvements {
        output.push_str(&format!(
            "{}. {} [{} impact]: {}\n",
            improvement.priority,
            improvement.action,
            level_label(improvement.impact),
            improvement.description
        ));
    }
    output
}

pub fn comparison_to_markdown(result: &ComparisonResult) -> String {
    let differences = &result.differences;
    let mut output = String::new();
    output.push_str("# Comparison\n\n");
    output.push_str(&format!(
        "- url1: {} (SEO {}, AI {})\n- url2: {} (SEO {}, AI {})\n\n",
        result.url1_report.url,
        result.url1_report.seo_score,
        result.url1_report.ai_score,
        result.url2_report.url,
        result.url2_report.seo_score,
        result.url2_report.ai_score
    ));
    output.push_str(&format!(
        "SEO score diff: {:+}\nAI score diff: {:+}\n",
        differences.seo_score_diff, differences.ai_score_diff
    ));
    if let Some(diff) = differences.ai_visibility_diff {
        output.push_str(&format!("AI visibility diff: {diff:+}\n"));
    }
    let better = match differences.better_performer {
        Performer::Url1 => &result.url1_report.url,
        Performer::Url2 => &result.url2_report.url,
    };
    output.push_str(&format!("Better performer: {better}\n\n"));

    output.push_str("## Key Differences\n\n");
    if differences.key_differences.is_empty() {
        output.push_str("- none\n");
    }
    for difference in &differences.key_differences {
        output.push_str(&format!(
            "- [{:?}] {}: {} vs {}. {}\n",
            difference.category,
            difference.aspect,
            difference.url1_value,
            difference.url2_value,
            difference.recommendation
        ));
    }
    output
}
