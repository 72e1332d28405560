//! Derived user reputation and credibility defaults.

/// Weight of each upvote a user has given.
pub const UPVOTE_WEIGHT: i64 = 2;

/// Starting credibility score for a freshly created stats row, 0-100.
/// Seeded once and not adjusted by the voting flow.
pub const DEFAULT_CREDIBILITY: i32 = 50;

/// Reputation derived from a user's voting history.
///
/// Recomputed from the stored counters on every vote transition, including
/// toggle-off removals, so the persisted value always equals this formula
/// over the persisted counters.
pub fn compute(upvotes_given: i64, downvotes_given: i64) -> i64 {
    upvotes_given * UPVOTE_WEIGHT - downvotes_given
}
