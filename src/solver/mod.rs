//! Solving algorithms
//!
//! Candidate filtering and one-ply expected-remaining guess optimization.

use crate::core::Word;
use std::collections::BTreeSet;

mod filter;
pub mod optimizer;

pub use filter::{count_matches, filter_candidates, matches};
pub use optimizer::{group_by_pattern, optimal_guess, score_guess, select_best_guess};

/// Words still consistent with every pattern observed so far
///
/// Iterates alphabetically, so listings and the direct-guess endgame are
/// stable across runs.
pub type CandidateSet = BTreeSet<Word>;
