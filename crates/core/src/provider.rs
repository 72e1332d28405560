//! The pluggable verdict-provider seam.
//!
//! Persistence and voting never care where a verdict came from: any
//! implementation of [`VerdictProvider`] can back the check endpoints. The
//! rule-based provider lives here; the external-model provider lives in
//! the API crate with the other network code and reuses
//! [`parse_model_report`] for schema validation.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::overrides::{default_overrides, OverrideRule};
use crate::scorer;
use crate::verdict::{CheckKind, Verdict, VerdictReport};

/// Anything that can turn submitted content into a [`VerdictReport`].
///
/// `region` is the caller's coarse location context (see
/// [`region_from_coords`]); providers that do not use it ignore it.
#[async_trait]
pub trait VerdictProvider: Send + Sync {
    async fn evaluate(
        &self,
        content: &str,
        kind: CheckKind,
        region: &str,
    ) -> Result<VerdictReport, CoreError>;

    /// Short provider name for logging.
    fn name(&self) -> &'static str;
}

/// Coarse region label derived from stored coordinates, used only as
/// context in the external model prompt.
pub fn region_from_coords(coords: Option<(f64, f64)>) -> &'static str {
    match coords {
        Some((lat, lon)) if (8.0..=37.0).contains(&lat) && (68.0..=97.0).contains(&lon) => "India",
        Some((lat, lon)) if (24.0..=49.0).contains(&lat) && (-125.0..=-66.0).contains(&lon) => {
            "USA"
        }
        Some((lat, lon)) if (36.0..=71.0).contains(&lat) && (-10.0..=40.0).contains(&lon) => {
            "Europe"
        }
        _ => "Global",
    }
}

/// The default provider: the deterministic heuristic scorer.
pub struct RuleBasedProvider {
    overrides: Vec<OverrideRule>,
}

impl RuleBasedProvider {
    pub fn new() -> Self {
        Self {
            overrides: default_overrides(),
        }
    }

    pub fn with_overrides(overrides: Vec<OverrideRule>) -> Self {
        Self { overrides }
    }
}

impl Default for RuleBasedProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerdictProvider for RuleBasedProvider {
    async fn evaluate(
        &self,
        content: &str,
        _kind: CheckKind,
        _region: &str,
    ) -> Result<VerdictReport, CoreError> {
        Ok(scorer::score_with_overrides(content, &self.overrides))
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

// ---------------------------------------------------------------------------
// Model output parsing
// ---------------------------------------------------------------------------

/// Loosely-typed shape of a model completion before validation.
#[derive(Debug, serde::Deserialize)]
struct RawModelReport {
    result: Option<String>,
    confidence: Option<f64>,
    sources: Option<Vec<String>>,
    analysis: Option<String>,
}

/// Parse and validate the free-text output of an external model into a
/// [`VerdictReport`].
///
/// Models wrap JSON in markdown fences or surround it with prose, so the
/// parser strips fences and extracts the outermost `{ .. }` object before
/// deserializing. `result` and `analysis` are required; a missing or
/// unknown `result`, or an empty `analysis`, is a [`CoreError::Processing`]
/// failure. `confidence` defaults to 50 and is clamped to 0-100.
pub fn parse_model_report(raw: &str) -> Result<VerdictReport, CoreError> {
    let cleaned = raw.replace("```json", "").replace("```", "");

    let start = cleaned
        .find('{')
        .ok_or_else(|| CoreError::Processing("No JSON object in model output".to_string()))?;
    let end = cleaned
        .rfind('}')
        .ok_or_else(|| CoreError::Processing("Unterminated JSON object in model output".to_string()))?;
    if end < start {
        return Err(CoreError::Processing(
            "Malformed JSON object in model output".to_string(),
        ));
    }

    let parsed: RawModelReport = serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| CoreError::Processing(format!("Model output is not valid JSON: {e}")))?;

    let result: Verdict = parsed
        .result
        .as_deref()
        .ok_or_else(|| CoreError::Processing("Model output is missing 'result'".to_string()))?
        .parse()
        .map_err(|_| CoreError::Processing("Model output has an unknown 'result'".to_string()))?;

    let analysis = parsed
        .analysis
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| CoreError::Processing("Model output is missing 'analysis'".to_string()))?;

    let confidence = parsed.confidence.unwrap_or(50.0).clamp(0.0, 100.0) as i32;

    Ok(VerdictReport {
        result,
        confidence,
        sources: parsed.sources.unwrap_or_default(),
        analysis,
    })
}
