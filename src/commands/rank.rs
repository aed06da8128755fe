//! Anagram ranking command
//!
//! Finds anagram groups and ranks every word pair within them by string distance.

use super::find::{FindConfig, GroupSort, run_find};
use crate::ranking::{RankError, RankerType, Ranking, SortOrder, rank_all_with, sort_by_score};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Groups below this count are ranked without a progress bar
const PROGRESS_THRESHOLD: usize = 500;

/// Configuration for ranking anagram pairs
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    pub ranker: RankerType,
    pub order: SortOrder,
    /// Keep only the first `top` rankings after sorting
    pub top: Option<usize>,
    /// Only rank groups with at least this many words
    pub min_size: usize,
}

impl RankConfig {
    #[must_use]
    pub fn new(ranker: RankerType) -> Self {
        Self {
            ranker,
            order: SortOrder::default(),
            top: None,
            min_size: 2,
        }
    }
}

/// Result of ranking anagram pairs
pub struct RankResult {
    pub ranker_name: &'static str,
    pub total_words: usize,
    pub group_count: usize,
    /// Number of pairs scored before `top` was applied
    pub pair_count: usize,
    pub rankings: Vec<Ranking>,
    pub duration: Duration,
}

/// Rank all anagram pairs in a word list
///
/// Groups are ranked in normal-key order, then the flat list is stably sorted by score.
///
/// # Errors
///
/// Returns a `RankError` if the ranker rejects a pair.
pub fn run_rank<S: AsRef<str>>(
    words: &[S],
    config: RankConfig,
) -> Result<RankResult, RankError> {
    let start = Instant::now();

    let found = run_find(
        words,
        FindConfig {
            sort: GroupSort::Normal,
            min_size: config.min_size,
        },
    );
    let group_count = found.groups.len();

    let pb = if group_count >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(group_count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} groups ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut rankings = rank_all_with(&found.groups, &config.ranker, |_| pb.inc(1))?;
    pb.finish_and_clear();

    let pair_count = rankings.len();
    sort_by_score(&mut rankings, config.order);
    if let Some(top) = config.top {
        rankings.truncate(top);
    }

    let duration = start.elapsed();
    log::info!(
        "ranked {pair_count} pairs from {group_count} groups with {} in {:.3}s",
        config.ranker.name(),
        duration.as_secs_f64()
    );

    Ok(RankResult {
        ranker_name: config.ranker.name(),
        total_words: found.total_words,
        group_count,
        pair_count,
        rankings,
        duration,
    })
}
