pub mod compare;
pub mod geo;
pub mod seo;
pub mod suggestions;
pub mod text;
pub mod visibility;

use crate::types::config::AnalysisToggles;
use crate::types::report::{ContentSuggestions, NewAuditReport, ScoreResult};
use crate::types::website::WebsiteData;
use tracing::info;

pub use compare::compare_websites;
pub use geo::analyze_geo;
pub use seo::analyze_traditional_seo;
pub use suggestions::generate_content_suggestions;
pub use visibility::analyze_ai_platform_visibility;

/// Run the enabled analyses for one page. Disabled analyses contribute
/// their empty default instead of running.
pub fn audit(url: &str, data: &WebsiteData, toggles: &AnalysisToggles) -> NewAuditReport {
    let traditional_seo_results = if toggles.traditional_seo {
        analyze_traditional_seo(data)
    } else {
        ScoreResult::default()
    };
    let geo_results = if toggles.geo {
        analyze_geo(data)
    } else {
        ScoreResult::default()
    };
    let ai_score = geo_results.score;
    let content_suggestions = if toggles.content_suggestions {
        generate_content_suggestions(data, ai_score)
    } else {
        ContentSuggestions::default()
    };
    let ai_visibility = toggles
        .ai_visibility
        .then(|| analyze_ai_platform_visibility(data));

    info!(
        url,
        seo_score = traditional_seo_results.score,
        ai_score,
        "page audited"
    );

    NewAuditReport {
        url: url.to_string(),
        seo_score: traditional_seo_results.score,
        ai_score,
        traditional_seo_results,
        geo_results,
        content_suggestions,
        ai_visibility,
    }
}
