//! Single pair distance command

use crate::core::normal_key;
use crate::ranking::{RankError, Ranker, RankerType};

/// Result of measuring one pair
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub ranker_name: &'static str,
    pub score: usize,
    /// Whether the two words share a normal key
    pub anagrams: bool,
}

/// Score two words with the given ranker
///
/// The words do not need to be anagrams of each other.
///
/// # Errors
///
/// Returns a `RankError` if the ranker rejects the pair, e.g. positional
/// mismatch on words of different lengths.
pub fn measure_distance(
    a: &str,
    b: &str,
    ranker: &RankerType,
) -> Result<DistanceResult, RankError> {
    let score = ranker.rank(a, b)?;

    Ok(DistanceResult {
        a: a.to_string(),
        b: b.to_string(),
        ranker_name: ranker.name(),
        score,
        anagrams: normal_key(a) == normal_key(b),
    })
}
