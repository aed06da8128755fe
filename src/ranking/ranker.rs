//! String distance rankers
//!
//! Defines the `Ranker` trait and the built-in implementations.

use thiserror::Error;

/// A string distance function; larger scores mean less similar words
pub trait Ranker {
    /// Score the distance between two words
    ///
    /// # Errors
    ///
    /// Returns `RankError` if the words violate a precondition of the ranker.
    fn rank(&self, a: &str, b: &str) -> Result<usize, RankError>;
}

/// Error type for rankers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("positional mismatch needs words of equal length, got {left} and {right}")]
    UnequalLength { left: usize, right: usize },
    #[error("edit operation costs must be at least 1")]
    ZeroCost,
}

/// Enum wrapper for all ranker types
///
/// Allows runtime selection of ranker by name while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankerType {
    /// Weighted Levenshtein edit distance (default)
    EditDistance(EditDistanceRanker),
    /// Count of differing positions between equal-length words
    PositionalMismatch(PositionalMismatchRanker),
}

impl Ranker for RankerType {
    fn rank(&self, a: &str, b: &str) -> Result<usize, RankError> {
        match self {
            Self::EditDistance(r) => r.rank(a, b),
            Self::PositionalMismatch(r) => r.rank(a, b),
        }
    }
}

impl RankerType {
    /// Names accepted by [`RankerType::from_name`]
    pub const NAMES: &'static [&'static str] = &[
        "edit-distance",
        "levenshtein",
        "positional-mismatch",
        "hamming",
    ];

    /// Create ranker from name string
    ///
    /// Supported names: "edit-distance", "levenshtein", "positional-mismatch", "hamming".
    /// Returns `None` if the name is unrecognized.
    ///
    /// # Examples
    /// ```
    /// use anagram_rank::ranking::{Ranker, RankerType};
    ///
    /// let ranker = RankerType::from_name("hamming").unwrap();
    /// assert_eq!(ranker.rank("karolin", "kathrin"), Ok(3));
    /// assert!(RankerType::from_name("soundex").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "edit-distance" | "levenshtein" => {
                Some(Self::EditDistance(EditDistanceRanker::default()))
            }
            "positional-mismatch" | "hamming" => {
                Some(Self::PositionalMismatch(PositionalMismatchRanker))
            }
            _ => None,
        }
    }

    /// Canonical name of this ranker
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EditDistance(_) => "edit-distance",
            Self::PositionalMismatch(_) => "positional-mismatch",
        }
    }

    /// Replace the edit operation costs; positional mismatch is left unchanged
    #[must_use]
    pub const fn with_edit_costs(self, costs: EditDistanceRanker) -> Self {
        match self {
            Self::EditDistance(_) => Self::EditDistance(costs),
            Self::PositionalMismatch(_) => self,
        }
    }
}

impl Default for RankerType {
    fn default() -> Self {
        Self::EditDistance(EditDistanceRanker::default())
    }
}

/// Levenshtein edit distance over code points with weighted operations
///
/// The default costs are insertion 1, deletion 1 and substitution 2, so a
/// substitution never scores lower than the deletion plus insertion it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDistanceRanker {
    insertion: usize,
    deletion: usize,
    substitution: usize,
}

impl EditDistanceRanker {
    /// Create an edit distance ranker with custom operation costs
    ///
    /// # Errors
    ///
    /// Returns `RankError::ZeroCost` if any cost is zero.
    pub const fn with_costs(
        insertion: usize,
        deletion: usize,
        substitution: usize,
    ) -> Result<Self, RankError> {
        if insertion == 0 || deletion == 0 || substitution == 0 {
            return Err(RankError::ZeroCost);
        }
        Ok(Self {
            insertion,
            deletion,
            substitution,
        })
    }

    /// Classic Levenshtein distance, every operation costs 1
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            insertion: 1,
            deletion: 1,
            substitution: 1,
        }
    }

    /// Edit distance between two words, never fails
    ///
    /// Scores saturate at `usize::MAX` instead of overflowing with huge costs.
    ///
    /// # Examples
    /// ```
    /// use anagram_rank::ranking::EditDistanceRanker;
    ///
    /// let ranker = EditDistanceRanker::default();
    /// assert_eq!(ranker.distance("least", "slate"), 4);
    /// assert_eq!(EditDistanceRanker::unit().distance("kitten", "sitting"), 3);
    /// ```
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        // Single rolling row over b
        let mut row: Vec<usize> = (0..=b.len())
            .map(|j| j.saturating_mul(self.insertion))
            .collect();

        for (i, &ca) in a.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = (i + 1).saturating_mul(self.deletion);

            for (j, &cb) in b.iter().enumerate() {
                let substitute = if ca == cb {
                    diagonal
                } else {
                    diagonal.saturating_add(self.substitution)
                };
                let delete = row[j + 1].saturating_add(self.deletion);
                let insert = row[j].saturating_add(self.insertion);

                diagonal = row[j + 1];
                row[j + 1] = substitute.min(delete).min(insert);
            }
        }

        row[b.len()]
    }
}

impl Default for EditDistanceRanker {
    fn default() -> Self {
        Self {
            insertion: 1,
            deletion: 1,
            substitution: 2,
        }
    }
}

impl Ranker for EditDistanceRanker {
    fn rank(&self, a: &str, b: &str) -> Result<usize, RankError> {
        Ok(self.distance(a, b))
    }
}

/// Hamming distance: number of positions where two equal-length words differ
///
/// Lengths are counted in code points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalMismatchRanker;

impl Ranker for PositionalMismatchRanker {
    fn rank(&self, a: &str, b: &str) -> Result<usize, RankError> {
        let (left, right) = (a.chars().count(), b.chars().count());
        if left != right {
            return Err(RankError::UnequalLength { left, right });
        }

        Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamming_karolin_kathrin() {
        assert_eq!(PositionalMismatchRanker.rank("karolin", "kathrin"), Ok(3));
    }

    #[test]
    fn hamming_bounds() {
        let ranker = PositionalMismatchRanker;
        assert_eq!(ranker.rank("slate", "slate"), Ok(0));
        assert_eq!(ranker.rank("abc", "bca"), Ok(3));
        assert_eq!(ranker.rank("", ""), Ok(0));
    }

    #[test]
    fn hamming_unequal_length() {
        assert_eq!(
            PositionalMismatchRanker.rank("duck", "cow"),
            Err(RankError::UnequalLength { left: 4, right: 3 })
        );
    }

    #[test]
    fn hamming_counts_code_points() {
        // Same char count, different byte lengths
        assert_eq!(PositionalMismatchRanker.rank("née", "nee"), Ok(1));
        assert_eq!(
            PositionalMismatchRanker.rank("é", "ee"),
            Err(RankError::UnequalLength { left: 1, right: 2 })
        );
    }

    #[test]
    fn edit_distance_default_costs() {
        let ranker = EditDistanceRanker::default();
        assert_eq!(ranker.distance("least", "setal"), 6);
        assert_eq!(ranker.distance("least", "slate"), 4);
        assert_eq!(ranker.distance("setal", "slate"), 6);
    }

    #[test]
    fn edit_distance_unit_costs() {
        let ranker = EditDistanceRanker::unit();
        assert_eq!(ranker.distance("kitten", "sitting"), 3);
        assert_eq!(ranker.distance("flaw", "lawn"), 2);
        assert_eq!(ranker.distance("", "abc"), 3);
        assert_eq!(ranker.distance("abc", ""), 3);
    }

    #[test]
    fn edit_distance_identity_and_symmetry() {
        let words = ["act", "cat", "tac", "least", "slate", "", "naïve"];
        for ranker in [EditDistanceRanker::default(), EditDistanceRanker::unit()] {
            for a in words {
                assert_eq!(ranker.distance(a, a), 0);
                for b in words {
                    assert_eq!(ranker.distance(a, b), ranker.distance(b, a), "{a} {b}");
                    if a != b {
                        assert!(ranker.distance(a, b) > 0, "{a} {b}");
                    }
                }
            }
        }
    }

    #[test]
    fn edit_distance_counts_code_points() {
        assert_eq!(EditDistanceRanker::unit().distance("naïve", "naive"), 1);
    }

    #[test]
    fn edit_distance_custom_costs() {
        let ranker = EditDistanceRanker::with_costs(1, 1, 5).unwrap();
        // Delete plus insert beats a substitution costing 5
        assert_eq!(ranker.distance("a", "b"), 2);

        let insert_heavy = EditDistanceRanker::with_costs(3, 1, 1).unwrap();
        assert_eq!(insert_heavy.distance("", "ab"), 6);
        assert_eq!(insert_heavy.distance("ab", ""), 2);
    }

    #[test]
    fn edit_distance_huge_costs_saturate() {
        // Substitution never pays off, delete plus insert does
        let ranker = EditDistanceRanker::with_costs(1, 1, usize::MAX).unwrap();
        assert_eq!(ranker.distance("ab", "ba"), 2);

        let ranker = EditDistanceRanker::with_costs(1, usize::MAX / 2 + 1, 2).unwrap();
        assert_eq!(ranker.distance("abc", "abd"), 2);

        let ranker = EditDistanceRanker::with_costs(usize::MAX, 1, 1).unwrap();
        assert_eq!(ranker.distance("", "ab"), usize::MAX);
        assert_eq!(ranker.distance("ab", "ab"), 0);
    }

    #[test]
    fn edit_distance_rejects_zero_cost() {
        assert_eq!(EditDistanceRanker::with_costs(1, 0, 2), Err(RankError::ZeroCost));
    }

    #[test]
    fn ranker_type_from_name() {
        assert_eq!(
            RankerType::from_name("levenshtein"),
            Some(RankerType::EditDistance(EditDistanceRanker::default()))
        );
        assert_eq!(
            RankerType::from_name("positional-mismatch"),
            Some(RankerType::PositionalMismatch(PositionalMismatchRanker))
        );
        assert_eq!(RankerType::from_name("Hamming"), None);
        assert_eq!(RankerType::from_name(""), None);
    }

    #[test]
    fn ranker_type_names_round_trip() {
        for &name in RankerType::NAMES {
            let ranker = RankerType::from_name(name).unwrap();
            assert_eq!(RankerType::from_name(ranker.name()), Some(ranker));
        }
    }

    #[test]
    fn ranker_type_dispatches() {
        let edit = RankerType::default();
        assert_eq!(edit.rank("least", "slate"), Ok(4));

        let hamming = RankerType::from_name("hamming").unwrap();
        assert_eq!(hamming.rank("least", "setal"), Ok(4));
        assert_eq!(hamming.rank("act", "cat"), Ok(2));
    }

    #[test]
    fn with_edit_costs_only_touches_edit_distance() {
        let unit = EditDistanceRanker::unit();
        let edit = RankerType::default().with_edit_costs(unit);
        assert_eq!(edit, RankerType::EditDistance(unit));

        let hamming = RankerType::PositionalMismatch(PositionalMismatchRanker);
        assert_eq!(hamming.with_edit_costs(unit), hamming);
    }
}
