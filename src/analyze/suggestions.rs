use crate::types::report::{AiImprovement, BlogTitle, ContentSuggestions, Faq, Level};
use crate::types::scoring::Score;
use crate::types::website::WebsiteData;
use std::collections::BTreeMap;
use tracing::debug;

pub const MAX_IMPROVEMENTS: usize = 6;

/// Score bounds gating each improvement tier.
pub const CRITICAL_BELOW: Score = 50;
pub const STRUCTURE_BELOW: Score = 75;
pub const REFINEMENT_BELOW: Score = 85;

struct Improvement {
    action: &'static str,
    description: &'static str,
    impact: Level,
    priority: u8,
}

static CRITICAL_TIER: [Improvement; 2] = [
    Improvement {
        action: "Add a TL;DR section",
        description: "Open the page with a two to three sentence summary that answers the main question.",
        impact: Level::High,
        priority: 1,
    },
    Improvement {
        action: "Add FAQ schema",
        description: "Mark up question and answer pairs with FAQPage structured data.",
        impact: Level::High,
        priority: 1,
    },
];

static STRUCTURE_TIER: [Improvement; 3] = [
    Improvement {
        action: "Restructure headings",
        description: "Use one H1 and descriptive H2/H3 headings that mirror user questions.",
        impact: Level::High,
        priority: 2,
    },
    Improvement {
        action: "Answer \"People Also Ask\" questions",
        description: "Add sections answering the related questions search engines surface for the topic.",
        impact: Level::Medium,
        priority: 2,
    },
    Improvement {
        action: "Add dates and statistics",
        description: "Show a last-updated date and back claims with current numbers and sources.",
        impact: Level::Medium,
        priority: 2,
    },
];

static REFINEMENT_TIER: [Improvement; 2] = [
    Improvement {
        action: "Optimize for voice search",
        description: "Phrase key answers in natural, conversational sentences.",
        impact: Level::Medium,
        priority: 3,
    },
    Improvement {
        action: "Add comparison tables",
        description: "Summarize options side by side so AI engines can extract direct comparisons.",
        impact: Level::Medium,
        priority: 3,
    },
];

static POLISH_TIER: [Improvement; 3] = [
    Improvement {
        action: "Link to authoritative sources",
        description: "Cite recognized experts, studies and official documentation.",
        impact: Level::Low,
        priority: 4,
    },
    Improvement {
        action: "Add step-by-step instructions",
        description: "Turn procedures into numbered steps with one action each.",
        impact: Level::Low,
        priority: 4,
    },
    Improvement {
        action: "Add Article schema",
        description: "Describe author, publisher and dates with Article structured data.",
        impact: Level::Low,
        priority: 4,
    },
];

/// Content suggestions for a page at the given AI score.
///
/// Keywords, blog titles, outline, FAQs and the per-platform labels are a
/// fixed template that does not look at the page. Only `ai_improvements`
/// depends on the score.
pub fn generate_content_suggestions(_data: &WebsiteData, ai_score: Score) -> ContentSuggestions {
    let ai_improvements = ai_improvements(ai_score);
    debug!(
        ai_score,
        improvements = ai_improvements.len(),
        "content suggestions generated"
    );

    ContentSuggestions {
        missing_keywords: [
            "generative engine optimization",
            "AI search visibility",
            "answer engine optimization",
            "structured data",
            "featured snippets",
        ]
        .iter()
        .map(|keyword| keyword.to_string())
        .collect(),
        blog_titles: vec![
            BlogTitle {
                title: "What Is Generative Engine Optimization? A Practical Guide".to_string(),
                target: "Informational queries".to_string(),
            },
            BlogTitle {
                title: "How to Get Your Content Cited by AI Assistants".to_string(),
                target: "How-to queries".to_string(),
            },
            BlogTitle {
                title: "SEO vs. GEO: What Changes When AI Answers First".to_string(),
                target: "Comparison queries".to_string(),
            },
        ],
        content_structure: [
            "H1: Main topic with the primary keyword",
            "TL;DR: Two to three sentence answer",
            "H2: What is [topic]?",
            "H2: How does [topic] work?",
            "H3: Step-by-step process",
            "H2: Key statistics and data",
            "H2: Frequently asked questions",
            "H2: Key takeaways",
        ]
        .iter()
        .map(|line| line.to_string())
        .collect(),
        faqs: vec![
            Faq {
                question: "What is generative engine optimization?".to_string(),
                answer: "Structuring content so AI answer engines can understand, quote and cite it."
                    .to_string(),
            },
            Faq {
                question: "How is GEO different from SEO?".to_string(),
                answer: "SEO targets ranked result lists; GEO targets being referenced inside AI-generated answers."
                    .to_string(),
            },
            Faq {
                question: "How long does it take to see results?".to_string(),
                answer: "Usually several weeks, once AI platforms recrawl the updated pages."
                    .to_string(),
            },
        ],
        ai_visibility: BTreeMap::from([
            ("chatgpt".to_string(), Level::Medium),
            ("perplexity".to_string(), Level::High),
            ("claude".to_string(), Level::Medium),
            ("bard".to_string(), Level::Low),
        ]),
        ai_improvements,
    }
}

/// Tiers unlock cumulatively as the score drops; the top tier only at 85+.
fn ai_improvements(ai_score: Score) -> Vec<AiImprovement> {
    let mut unlocked: Vec<&Improvement> = Vec::new();
    if ai_score < CRITICAL_BELOW {
        unlocked.extend(CRITICAL_TIER.iter());
    }
    if ai_score < STRUCTURE_BELOW {
        unlocked.extend(STRUCTURE_TIER.iter());
    }
    if ai_score < REFINEMENT_BELOW {
        unlocked.extend(REFINEMENT_TIER.iter());
    } else {
        unlocked.extend(POLISH_TIER.iter());
    }

    unlocked
        .into_iter()
        .take(MAX_IMPROVEMENTS)
        .map(|improvement| AiImprovement {
            action: improvement.action.to_string(),
            description: improvement.description.to_string(),
            impact: improvement.impact,
            priority: improvement.priority,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(score: Score) -> Vec<String> {
        generate_content_suggestions(&WebsiteData::default(), score)
            .ai_improvements
            .into_iter()
            .map(|improvement| improvement.action)
            .collect()
    }

    #[test]
    fn low_score_includes_critical_items_and_caps_at_six() {
        let list = actions(30);
        assert_eq!(list.len(), MAX_IMPROVEMENTS);
        assert_eq!(list[0], "Add a TL;DR section");
        assert_eq!(list[1], "Add FAQ schema");
        assert_eq!(list[5], "Optimize for voice search");
    }

    #[test]
    fn high_score_only_polish_tier() {
        let list = actions(90);
        assert_eq!(
            list,
            vec![
                "Link to authoritative sources",
                "Add step-by-step instructions",
                "Add Article schema"
            ]
        );
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(actions(49).len(), 6);
        assert_eq!(actions(50).len(), 5);
        assert_eq!(actions(74).len(), 5);
        assert_eq!(actions(75).len(), 2);
        assert_eq!(actions(84).len(), 2);
        assert_eq!(actions(85).len(), 3);
        assert!(!actions(50).contains(&"Add a TL;DR section".to_string()));
        assert!(actions(75).contains(&"Add comparison tables".to_string()));
    }

    #[test]
    fn template_fields_ignore_input() {
        let empty = generate_content_suggestions(&WebsiteData::default(), 40);
        let other = generate_content_suggestions(
            &WebsiteData {
                title: "Completely different page".to_string(),
                content: "Unrelated text".to_string(),
                ..WebsiteData::default()
            },
            40,
        );
        assert_eq!(empty, other);
        assert_eq!(empty.ai_visibility.len(), 4);
        for platform in ["chatgpt", "perplexity", "claude", "bard"] {
            assert!(empty.ai_visibility.contains_key(platform));
        }
    }
}
