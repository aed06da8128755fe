//! Pairwise distance ranking within anagram groups
//!
//! This module contains the rankers and the pair enumeration that drives them.

mod aggregate;
mod pairs;
pub mod ranker;

pub use aggregate::{Ranking, SortOrder, rank, rank_all, rank_all_with, sort_by_score};
pub use pairs::index_pairs;
pub use ranker::{EditDistanceRanker, PositionalMismatchRanker, RankError, Ranker, RankerType};
