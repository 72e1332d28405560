//! The vote state machine.
//!
//! Per (user, post) pair a user is either not voting, upvoting, or
//! downvoting. Casting the vote they already hold removes it (toggle-off);
//! casting the other kind flips it. [`transition`] returns the signed
//! counter deltas to apply; the persistence layer clamps every counter at
//! zero when applying them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// The two castable vote kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Upvote,
    Downvote,
}

impl VoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upvote => "upvote",
            Self::Downvote => "downvote",
        }
    }
}

impl FromStr for VoteKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(Self::Upvote),
            "downvote" => Ok(Self::Downvote),
            other => Err(CoreError::Validation(format!(
                "Unknown vote type '{other}' (expected upvote or downvote)"
            ))),
        }
    }
}

/// The result of applying an incoming vote to the current stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTransition {
    /// The stance after the vote: `None` means the vote row is removed.
    pub next: Option<VoteKind>,
    /// Delta for the post's upvote counter.
    pub upvotes_delta: i64,
    /// Delta for the post's downvote counter.
    pub downvotes_delta: i64,
    /// Delta for the voter's `total_upvotes_given`.
    pub upvotes_given_delta: i64,
    /// Delta for the voter's `total_downvotes_given`.
    pub downvotes_given_delta: i64,
}

impl VoteTransition {
    /// Whether this transition removes an existing vote (toggle-off).
    pub fn is_removal(&self) -> bool {
        self.next.is_none()
    }
}

/// Compute the transition for an incoming vote given the user's current
/// stance on the post (`None` when they have not voted).
pub fn transition(current: Option<VoteKind>, incoming: VoteKind) -> VoteTransition {
    use VoteKind::{Downvote, Upvote};

    match (current, incoming) {
        (None, Upvote) => VoteTransition {
            next: Some(Upvote),
            upvotes_delta: 1,
            downvotes_delta: 0,
            upvotes_given_delta: 1,
            downvotes_given_delta: 0,
        },
        (None, Downvote) => VoteTransition {
            next: Some(Downvote),
            upvotes_delta: 0,
            downvotes_delta: 1,
            upvotes_given_delta: 0,
            downvotes_given_delta: 1,
        },
        // Toggle-off: repeating the held vote removes it.
        (Some(Upvote), Upvote) => VoteTransition {
            next: None,
            upvotes_delta: -1,
            downvotes_delta: 0,
            upvotes_given_delta: -1,
            downvotes_given_delta: 0,
        },
        (Some(Downvote), Downvote) => VoteTransition {
            next: None,
            upvotes_delta: 0,
            downvotes_delta: -1,
            upvotes_given_delta: 0,
            downvotes_given_delta: -1,
        },
        // Switch.
        (Some(Upvote), Downvote) => VoteTransition {
            next: Some(Downvote),
            upvotes_delta: -1,
            downvotes_delta: 1,
            upvotes_given_delta: -1,
            downvotes_given_delta: 1,
        },
        (Some(Downvote), Upvote) => VoteTransition {
            next: Some(Upvote),
            upvotes_delta: 1,
            downvotes_delta: -1,
            upvotes_given_delta: 1,
            downvotes_given_delta: -1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VoteKind::{Downvote, Upvote};

    #[test]
    fn fresh_upvote_increments_both_counters() {
        let t = transition(None, Upvote);
        assert_eq!(t.next, Some(Upvote));
        assert_eq!(t.upvotes_delta, 1);
        assert_eq!(t.downvotes_delta, 0);
        assert_eq!(t.upvotes_given_delta, 1);
        assert_eq!(t.downvotes_given_delta, 0);
        assert!(!t.is_removal());
    }

    #[test]
    fn fresh_downvote_increments_both_counters() {
        let t = transition(None, Downvote);
        assert_eq!(t.next, Some(Downvote));
        assert_eq!(t.downvotes_delta, 1);
        assert_eq!(t.downvotes_given_delta, 1);
    }

    #[test]
    fn repeating_a_vote_removes_it() {
        let t = transition(Some(Upvote), Upvote);
        assert!(t.is_removal());
        assert_eq!(t.upvotes_delta, -1);
        assert_eq!(t.upvotes_given_delta, -1);

        let t = transition(Some(Downvote), Downvote);
        assert!(t.is_removal());
        assert_eq!(t.downvotes_delta, -1);
        assert_eq!(t.downvotes_given_delta, -1);
    }

    #[test]
    fn switching_moves_one_count_to_the_other() {
        let t = transition(Some(Upvote), Downvote);
        assert_eq!(t.next, Some(Downvote));
        assert_eq!(t.upvotes_delta, -1);
        assert_eq!(t.downvotes_delta, 1);
        assert_eq!(t.upvotes_given_delta, -1);
        assert_eq!(t.downvotes_given_delta, 1);

        let t = transition(Some(Downvote), Upvote);
        assert_eq!(t.next, Some(Upvote));
        assert_eq!(t.upvotes_delta, 1);
        assert_eq!(t.downvotes_delta, -1);
    }

    #[test]
    fn toggle_sequence_nets_to_zero() {
        // Upvote then upvote again: deltas cancel out.
        let first = transition(None, Upvote);
        let second = transition(first.next, Upvote);
        assert_eq!(first.upvotes_delta + second.upvotes_delta, 0);
        assert_eq!(first.upvotes_given_delta + second.upvotes_given_delta, 0);
        assert_eq!(second.next, None);
    }

    #[test]
    fn vote_kind_round_trips_through_str() {
        for k in [Upvote, Downvote] {
            assert_eq!(k.as_str().parse::<VoteKind>().unwrap(), k);
        }
        assert!("sideways".parse::<VoteKind>().is_err());
    }
}
