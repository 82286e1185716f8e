//! Engagement gate: what a finished run earns

use crate::game::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Eligible,
    NotEligible,
}

impl Verdict {
    pub fn for_score(score: u32, threshold: u32) -> Self {
        if score >= threshold {
            Verdict::Eligible
        } else {
            Verdict::NotEligible
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Eligible => "🎉 You are eligible!",
            Verdict::NotEligible => "😢 You are not eligible",
        }
    }

    pub fn message(&self, threshold: u32) -> String {
        match self {
            Verdict::Eligible => "Congratulations! You reached the required score.".to_string(),
            Verdict::NotEligible => format!("Try again to reach a score of {threshold} or more."),
        }
    }

    /// The redemption code line, shown to eligible runs only
    pub fn code_line(&self, config: &GameConfig) -> Option<String> {
        match self {
            Verdict::Eligible => Some(format!("Code : {}", config.redemption_code)),
            Verdict::NotEligible => None,
        }
    }
}
