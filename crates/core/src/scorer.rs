//! Rule-based credibility scorer.
//!
//! A transparent, debuggable stand-in for a real classifier: every output
//! is traceable to a specific rule firing. The scorer is pure and
//! deterministic -- the same content string always produces the same
//! report -- and total: malformed URLs are folded into the analysis
//! narrative instead of propagating.
//!
//! Scoring pipeline:
//!
//! 1. Curated override table ([`crate::overrides`]) -- absolute priority.
//! 2. Keyword sets, each contributing a fixed weight per distinct match.
//! 3. URL hostname analysis when the content starts with `http`.
//! 4. Secondary signals (attribution, all-caps shouting, exclamations).
//! 5. `net = real - fake` against fixed thresholds.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

use crate::overrides::{default_overrides, OverrideRule};
use crate::verdict::{Verdict, VerdictReport};

// ---------------------------------------------------------------------------
// Weights and thresholds
// ---------------------------------------------------------------------------

/// Weight per sensational-language keyword match.
pub const SENSATIONAL_WEIGHT: i32 = 15;
/// Weight per clickbait phrase match.
pub const CLICKBAIT_WEIGHT: i32 = 10;
/// Weight per pseudo-scientific red-flag phrase match.
pub const PSEUDO_SCIENCE_WEIGHT: i32 = 20;
/// One-off weight when a celebrity-death phrase appears without any
/// reliable-source keyword.
pub const CELEBRITY_DEATH_WEIGHT: i32 = 25;
/// Weight per reliable-source keyword match (credited to the real score).
pub const RELIABLE_SOURCE_WEIGHT: i32 = 15;

/// Hostname contains "fake", "satire", or "parody".
pub const SATIRE_HOST_WEIGHT: i32 = 30;
/// Hostname resembles a trusted outlet without matching it (typosquat).
pub const TYPOSQUAT_WEIGHT: i32 = 25;
/// Hostname contains a trusted outlet's domain outright.
pub const TRUSTED_HOST_WEIGHT: i32 = 20;

/// Quoted statement plus an attribution phrase.
pub const QUOTED_ATTRIBUTION_WEIGHT: i32 = 10;
/// Numeric figure plus an attribution phrase.
pub const FIGURE_ATTRIBUTION_WEIGHT: i32 = 5;
/// More than this many shouted all-caps tokens.
pub const SHOUTING_TOKEN_LIMIT: usize = 3;
pub const SHOUTING_WEIGHT: i32 = 10;
/// More than this many exclamation marks.
pub const EXCLAMATION_LIMIT: usize = 3;
pub const EXCLAMATION_WEIGHT: i32 = 10;

/// `net > REAL_THRESHOLD` yields a `real` verdict.
pub const REAL_THRESHOLD: i32 = 20;
/// `net < -FAKE_THRESHOLD` yields a `fake` verdict.
pub const FAKE_THRESHOLD: i32 = 20;
/// Confidence cap for `real` verdicts.
pub const REAL_CONFIDENCE_CAP: i32 = 85;
/// Confidence cap for `fake` verdicts.
pub const FAKE_CONFIDENCE_CAP: i32 = 90;
/// Fixed confidence for `uncertain` verdicts.
pub const UNCERTAIN_CONFIDENCE: i32 = 50;

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

const SENSATIONAL_KEYWORDS: &[&str] = &[
    "shocking",
    "outrageous",
    "unbelievable",
    "bombshell",
    "mind-blowing",
    "jaw-dropping",
];

const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe",
    "doctors hate",
    "what happens next",
    "this one trick",
    "will shock you",
    "gone viral",
];

const PSEUDO_SCIENCE_PHRASES: &[&str] = &[
    "miracle cure",
    "scientists don't want you to know",
    "big pharma is hiding",
    "ancient secret remedy",
    "quantum healing",
    "detox your body",
];

const CELEBRITY_DEATH_PHRASES: &[&str] =
    &["is dead", "found dead", "dead at", "death hoax", "passes away suddenly"];

const RELIABLE_SOURCE_KEYWORDS: &[&str] = &[
    "reuters",
    "associated press",
    "press trust of india",
    "bbc",
    "the hindu",
    "al jazeera",
    "official statement",
];

/// Domains of established outlets used for hostname analysis.
const TRUSTED_DOMAINS: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "bbc.com",
    "bbc.co.uk",
    "cnn.com",
    "nytimes.com",
    "washingtonpost.com",
    "aljazeera.com",
    "thehindu.com",
    "ndtv.com",
];

const ATTRIBUTION_PHRASES: &[&str] = &["according to", "reported by", "source:"];

const QUOTE_CHARS: &[char] = &['"', '\u{201C}', '\u{201D}'];

fn shouting_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Z]{4,}").expect("shouting regex is valid"))
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score content against the default override table.
pub fn score(content: &str) -> VerdictReport {
    score_with_overrides(content, &default_overrides())
}

/// Score content, consulting `overrides` before any heuristic runs.
pub fn score_with_overrides(content: &str, overrides: &[OverrideRule]) -> VerdictReport {
    let trimmed = content.trim();
    let lower = trimmed.to_lowercase();

    // 1. Override table takes absolute priority.
    if let Some(rule) = overrides.iter().find(|r| r.matches(&lower)) {
        return rule.report();
    }

    let mut fake_score = 0i32;
    let mut real_score = 0i32;
    let mut flags: Vec<String> = Vec::new();

    // 2. Keyword sets.
    let sensational = count_matches(&lower, SENSATIONAL_KEYWORDS);
    if sensational > 0 {
        fake_score += SENSATIONAL_WEIGHT * sensational as i32;
        flags.push(format!("Sensational language detected ({sensational} match(es))."));
    }

    let clickbait = count_matches(&lower, CLICKBAIT_PHRASES);
    if clickbait > 0 {
        fake_score += CLICKBAIT_WEIGHT * clickbait as i32;
        flags.push(format!("Clickbait phrasing detected ({clickbait} match(es))."));
    }

    let pseudo = count_matches(&lower, PSEUDO_SCIENCE_PHRASES);
    if pseudo > 0 {
        fake_score += PSEUDO_SCIENCE_WEIGHT * pseudo as i32;
        flags.push(format!("Pseudo-scientific claims detected ({pseudo} match(es))."));
    }

    let reliable = count_matches(&lower, RELIABLE_SOURCE_KEYWORDS);

    // Celebrity-death phrasing only counts when no reliable outlet is
    // mentioned alongside it, and contributes its weight once.
    let celebrity_death = CELEBRITY_DEATH_PHRASES.iter().any(|p| lower.contains(p));
    if celebrity_death && reliable == 0 {
        fake_score += CELEBRITY_DEATH_WEIGHT;
        flags.push("Unattributed celebrity-death claim (common hoax pattern).".to_string());
    }

    if reliable > 0 {
        real_score += RELIABLE_SOURCE_WEIGHT * reliable as i32;
        flags.push(format!("References to reliable outlets found ({reliable} match(es))."));
    }

    // 3. URL hostname analysis.
    if lower.starts_with("http") {
        analyze_url(trimmed, &mut fake_score, &mut real_score, &mut flags);
    }

    // 4. Secondary signals.
    let has_attribution = ATTRIBUTION_PHRASES.iter().any(|p| lower.contains(p));
    if has_attribution && trimmed.contains(QUOTE_CHARS) {
        real_score += QUOTED_ATTRIBUTION_WEIGHT;
        flags.push("Quoted statements with source attribution found.".to_string());
    }
    if has_attribution && trimmed.chars().any(|c| c.is_ascii_digit()) {
        real_score += FIGURE_ATTRIBUTION_WEIGHT;
        flags.push("Specific figures with source attribution found.".to_string());
    }

    if shouting_regex().find_iter(trimmed).count() > SHOUTING_TOKEN_LIMIT {
        fake_score += SHOUTING_WEIGHT;
        flags.push("Excessive all-caps emphasis.".to_string());
    }
    if trimmed.matches('!').count() > EXCLAMATION_LIMIT {
        fake_score += EXCLAMATION_WEIGHT;
        flags.push("Excessive exclamation marks.".to_string());
    }

    // 5. Thresholds.
    let net = real_score - fake_score;
    let (result, confidence) = if net > REAL_THRESHOLD {
        (Verdict::Real, REAL_CONFIDENCE_CAP.min(60 + net))
    } else if net < -FAKE_THRESHOLD {
        (Verdict::Fake, FAKE_CONFIDENCE_CAP.min(60 + net.abs()))
    } else {
        (Verdict::Uncertain, UNCERTAIN_CONFIDENCE)
    };

    VerdictReport {
        result,
        confidence,
        sources: branch_sources(result),
        analysis: build_analysis(result, &flags),
    }
}

/// How many distinct entries of `table` occur in `lower` content.
/// Multiple distinct matches each add their weight; a single entry never
/// counts more than once.
fn count_matches(lower: &str, table: &[&str]) -> usize {
    table.iter().filter(|entry| lower.contains(*entry)).count()
}

fn analyze_url(content: &str, fake_score: &mut i32, real_score: &mut i32, flags: &mut Vec<String>) {
    let host = match Url::parse(content) {
        Ok(url) => match url.host_str() {
            Some(h) => h.to_lowercase(),
            None => {
                flags.push("Content looks like a URL but has no hostname.".to_string());
                return;
            }
        },
        Err(_) => {
            // Recovered locally: a bad URL is a flag, not an error.
            flags.push("Content looks like a URL but could not be parsed.".to_string());
            return;
        }
    };

    if ["fake", "satire", "parody"].iter().any(|w| host.contains(w)) {
        *fake_score += SATIRE_HOST_WEIGHT;
        flags.push("Hostname suggests satire or parody content.".to_string());
    }

    // Typosquat: the hostname carries a trusted outlet's name without
    // carrying its actual domain.
    let near_match = TRUSTED_DOMAINS.iter().find(|domain| {
        let name = domain.split('.').next().unwrap_or(domain);
        !host.contains(*domain) && host.contains(name)
    });
    if let Some(domain) = near_match {
        *fake_score += TYPOSQUAT_WEIGHT;
        flags.push(format!(
            "Hostname closely resembles trusted outlet '{domain}' (possible typosquatting)."
        ));
    }

    if let Some(domain) = TRUSTED_DOMAINS.iter().find(|d| host.contains(**d)) {
        *real_score += TRUSTED_HOST_WEIGHT;
        flags.push(format!("Hostname matches trusted outlet '{domain}'."));
    }
}

fn branch_sources(result: Verdict) -> Vec<String> {
    let labels: &[&str] = match result {
        Verdict::Real => &["CNN", "ABC News", "Reuters", "Associated Press"],
        Verdict::Fake => &["Misinformation pattern database", "Heuristic analysis"],
        Verdict::Uncertain => &["No corroborating sources found"],
    };
    labels.iter().map(|s| s.to_string()).collect()
}

fn build_analysis(result: Verdict, flags: &[String]) -> String {
    if flags.is_empty() {
        return match result {
            Verdict::Real => {
                "No red flags detected; the content reads like routine reporting.".to_string()
            }
            Verdict::Fake => {
                "The content matches patterns common in misinformation.".to_string()
            }
            Verdict::Uncertain => {
                "No strong credibility signals either way; unable to corroborate or refute \
                 this content."
                    .to_string()
            }
        };
    }

    let verdict_sentence = match result {
        Verdict::Real => "The signals above are consistent with reporting from reliable outlets.",
        Verdict::Fake => "The signals above match patterns common in misinformation.",
        Verdict::Uncertain => "Signals are mixed or too weak for a confident verdict.",
    };
    format!("{} {}", flags.join(" "), verdict_sentence)
}
