//! Ranking word pairs across anagram groups

use super::pairs::index_pairs;
use super::ranker::{RankError, Ranker};
use crate::core::Anagram;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::fmt;

/// The distance between two words of the same anagram group
///
/// `a` comes before `b` in the group's word order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    a: String,
    b: String,
    score: usize,
}

impl Ranking {
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>, score: usize) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            score,
        }
    }

    #[inline]
    #[must_use]
    pub fn a(&self) -> &str {
        &self.a
    }

    #[inline]
    #[must_use]
    pub fn b(&self) -> &str {
        &self.b
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.score, self.a, self.b)
    }
}

/// Direction for [`sort_by_score`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Rank every pair of words in one group
///
/// Pairs come out in [`index_pairs`] order over the group's sorted words.
///
/// # Errors
///
/// Returns the first `RankError` the ranker reports.
///
/// # Examples
/// ```
/// use anagram_rank::core::Anagram;
/// use anagram_rank::ranking::{EditDistanceRanker, Ranking, rank};
///
/// let group = Anagram::new(vec!["slate", "least", "setal"]).unwrap();
/// let rankings = rank(&group, &EditDistanceRanker::default()).unwrap();
///
/// assert_eq!(
///     rankings,
///     [
///         Ranking::new("least", "setal", 6),
///         Ranking::new("least", "slate", 4),
///         Ranking::new("setal", "slate", 6),
///     ]
/// );
/// ```
pub fn rank<R: Ranker + ?Sized>(
    anagram: &Anagram,
    ranker: &R,
) -> Result<Vec<Ranking>, RankError> {
    let words = anagram.words();

    index_pairs(words.len())
        .map(|(i, j)| {
            let (a, b) = (&words[i], &words[j]);
            let score = ranker.rank(a, b)?;
            Ok(Ranking::new(a.as_str(), b.as_str(), score))
        })
        .collect()
}

/// Rank every group and concatenate the results in group order
///
/// Groups are ranked in parallel; the output order does not depend on scheduling.
///
/// # Errors
///
/// Returns a `RankError` if ranking any group fails.
pub fn rank_all<R: Ranker + Sync>(
    anagrams: &[Anagram],
    ranker: &R,
) -> Result<Vec<Ranking>, RankError> {
    rank_all_with(anagrams, ranker, |_| {})
}

/// Like [`rank_all`], calling `on_ranked` as each group finishes
///
/// `on_ranked` may run on any worker thread and in any order.
///
/// # Errors
///
/// Returns a `RankError` if ranking any group fails.
pub fn rank_all_with<R, F>(
    anagrams: &[Anagram],
    ranker: &R,
    on_ranked: F,
) -> Result<Vec<Ranking>, RankError>
where
    R: Ranker + Sync,
    F: Fn(&Anagram) + Sync,
{
    let per_group: Vec<Vec<Ranking>> = anagrams
        .par_iter()
        .map(|anagram| {
            let rankings = rank(anagram, ranker);
            on_ranked(anagram);
            rankings
        })
        .collect::<Result<_, _>>()?;

    let rankings: Vec<Ranking> = per_group.into_iter().flatten().collect();
    log::debug!(
        "ranked {} pairs across {} groups",
        rankings.len(),
        anagrams.len()
    );

    Ok(rankings)
}

/// Stable sort by score; ties keep their enumeration order
///
/// # Examples
/// ```
/// use anagram_rank::ranking::{Ranking, SortOrder, sort_by_score};
///
/// let mut rankings = vec![Ranking::new("dog", "god", 4), Ranking::new("act", "cat", 2)];
/// sort_by_score(&mut rankings, SortOrder::Ascending);
/// assert_eq!(rankings[0].a(), "act");
/// ```
pub fn sort_by_score(rankings: &mut [Ranking], order: SortOrder) {
    match order {
        SortOrder::Ascending => rankings.sort_by_key(Ranking::score),
        SortOrder::Descending => rankings.sort_by_key(|r| Reverse(r.score)),
    }
}
