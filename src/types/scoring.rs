use crate::types::report::FactorStatus;

pub type Score = u8;

pub const MAX_SCORE: u32 = 100;
pub const PASS_THRESHOLD: Score = 80;
pub const WARNING_THRESHOLD: Score = 50;

/// Clamp an accumulated rule sum into the 0..=100 score range.
pub fn clamp_score(raw: u32) -> Score {
    raw.min(MAX_SCORE) as Score
}

impl FactorStatus {
    pub fn from_score(score: Score) -> Self {
        if score >= PASS_THRESHOLD {
            Self::Pass
        } else if score >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Fail
        }
    }
}

/// Percentage of the attainable total, rounded half away from zero.
pub fn overall_percentage(scores: &[Score]) -> Score {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    let attainable = scores.len() as u32 * MAX_SCORE;
    // round(sum / attainable * 100) in integer arithmetic
    clamp_score((sum * 200 + attainable) / (attainable * 2))
}
