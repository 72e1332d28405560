//! Pure domain logic for the Veritas credibility-checking platform.
//!
//! No I/O lives here: the scorer, vote state machine, and reputation
//! formula are all deterministic functions so they can be exercised
//! directly in unit tests and reused unchanged by the persistence and
//! HTTP layers.

pub mod error;
pub mod image;
pub mod overrides;
pub mod provider;
pub mod reputation;
pub mod roles;
pub mod scorer;
pub mod types;
pub mod verdict;
pub mod vote;
