//! Command implementations

pub mod distance;
pub mod find;
pub mod rank;

pub use distance::{DistanceResult, measure_distance};
pub use find::{FindConfig, FindResult, GroupSort, run_find};
pub use rank::{RankConfig, RankResult, run_rank};
