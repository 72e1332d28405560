//! Verdict and check-kind enums plus the report structure every verdict
//! provider produces.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Credibility verdict for a news check or community post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Real,
    Fake,
    Uncertain,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Fake => "fake",
            Self::Uncertain => "uncertain",
        }
    }
}

impl FromStr for Verdict {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "real" => Ok(Self::Real),
            "fake" => Ok(Self::Fake),
            "uncertain" => Ok(Self::Uncertain),
            other => Err(CoreError::Validation(format!(
                "Unknown verdict '{other}' (expected real, fake, or uncertain)"
            ))),
        }
    }
}

/// What form the submitted content takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Url,
    Text,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
        }
    }
}

impl FromStr for CheckKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(Self::Url),
            "text" => Ok(Self::Text),
            other => Err(CoreError::Validation(format!(
                "Unknown check kind '{other}' (expected url or text)"
            ))),
        }
    }
}

/// The structured outcome of a credibility evaluation, whichever provider
/// produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictReport {
    pub result: Verdict,
    /// Confidence in the verdict, 0-100.
    pub confidence: i32,
    /// Source labels supporting the verdict. Not real citations for the
    /// rule-based provider; a transparent stand-in keyed to which branch
    /// of the scorer fired.
    pub sources: Vec<String>,
    /// Human-readable explanation of why the verdict was reached.
    pub analysis: String,
}
