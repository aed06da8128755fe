//! Anagram groups
//!
//! An `Anagram` holds two or more words sharing one normal key, sorted alphabetically.

use super::normal::normal_key;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated group of words that are all anagrams of one another
///
/// Words are kept sorted lexicographically and every word normalizes to `normal`.
/// The only ways to obtain one are [`Anagram::new`] and [`find_anagrams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anagram {
    words: Vec<String>,
    normal: String,
}

/// Error type for words that do not form an anagram group
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnagramError {
    #[error("cannot create anagram with {count} words")]
    InsufficientMembers { count: usize },
    #[error("not anagrams: '{first}', '{conflicting}'")]
    MismatchedNormal { first: String, conflicting: String },
}

impl Anagram {
    /// Validate and normalize a raw word list into an anagram group
    ///
    /// # Errors
    /// Returns `AnagramError` if:
    /// - Fewer than two words are given
    /// - The words do not all share a normal key (the first two differing keys are reported)
    ///
    /// # Examples
    /// ```
    /// use anagram_rank::core::Anagram;
    ///
    /// let anagram = Anagram::new(vec!["cat", "act"]).unwrap();
    /// assert_eq!(anagram.normal(), "act");
    /// assert_eq!(anagram.words(), ["act", "cat"]);
    ///
    /// assert!(Anagram::new(vec!["duck", "cow"]).is_err());
    /// assert!(Anagram::new(vec!["hello"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, AnagramError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.len() < 2 {
            return Err(AnagramError::InsufficientMembers { count: words.len() });
        }

        let mut normals = words.iter().map(|w| normal_key(w));
        // Length checked above
        let first = normals.next().unwrap_or_default();
        if let Some(conflicting) = normals.find(|n| *n != first) {
            return Err(AnagramError::MismatchedNormal { first, conflicting });
        }

        words.sort();
        Ok(Self {
            words,
            normal: first,
        })
    }

    /// Build from a grouper bucket whose key is already known
    fn from_bucket(normal: String, mut words: Vec<String>) -> Self {
        debug_assert!(words.len() >= 2);
        words.sort();
        Self { words, normal }
    }

    /// Member words, sorted alphabetically
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The normal key shared by every member
    #[inline]
    #[must_use]
    pub fn normal(&self) -> &str {
        &self.normal
    }

    /// Number of member words (always at least 2)
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for Anagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Find all anagram groups among the input words
///
/// Words are bucketed by normal key; buckets with a single word are dropped.
/// Repeated input words stay as separate entries in their bucket.
/// The order of the returned groups is unspecified, see [`sort_by_normal`] and [`sort_by_count`].
///
/// # Examples
/// ```
/// use anagram_rank::core::{find_anagrams, sort_by_normal};
///
/// let mut groups = find_anagrams(&["god", "dog", "act", "cat", "cow"]);
/// sort_by_normal(&mut groups);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].words(), ["act", "cat"]);
/// assert_eq!(groups[1].words(), ["dog", "god"]);
/// ```
#[must_use]
pub fn find_anagrams<S: AsRef<str>>(words: &[S]) -> Vec<Anagram> {
    let mut buckets: FxHashMap<String, Vec<String>> = FxHashMap::default();

    for word in words {
        let word = word.as_ref();
        buckets
            .entry(normal_key(word))
            .or_default()
            .push(word.to_string());
    }

    let bucket_count = buckets.len();
    let groups: Vec<Anagram> = buckets
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(normal, members)| Anagram::from_bucket(normal, members))
        .collect();

    log::debug!(
        "grouped {} words into {bucket_count} buckets, {} anagram groups",
        words.len(),
        groups.len()
    );

    groups
}

/// Stable sort of groups by normal key
pub fn sort_by_normal(groups: &mut [Anagram]) {
    groups.sort_by(|a, b| a.normal.cmp(&b.normal));
}

/// Stable sort of groups by member count, smallest first
pub fn sort_by_count(groups: &mut [Anagram]) {
    groups.sort_by_key(Anagram::len);
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 6] = ["god", "dog", "act", "cat", "pea", "ape"];

    fn anagram(words: &[&str], normal: &str) -> Anagram {
        Anagram {
            words: words.iter().map(ToString::to_string).collect(),
            normal: normal.to_string(),
        }
    }

    #[test]
    fn new_sorts_and_normalizes() {
        let actual = Anagram::new(vec!["cat", "act"]).unwrap();
        assert_eq!(actual, anagram(&["act", "cat"], "act"));
    }

    #[test]
    fn new_rejects_mismatched_words() {
        let err = Anagram::new(vec!["duck", "cow"]).unwrap_err();
        assert_eq!(
            err,
            AnagramError::MismatchedNormal {
                first: "cdku".to_string(),
                conflicting: "cow".to_string(),
            }
        );
    }

    #[test]
    fn new_reports_first_conflict() {
        let err = Anagram::new(vec!["tar", "rat", "tsar", "star"]).unwrap_err();
        assert_eq!(
            err,
            AnagramError::MismatchedNormal {
                first: "art".to_string(),
                conflicting: "arst".to_string(),
            }
        );
    }

    #[test]
    fn new_rejects_too_few_words() {
        assert_eq!(
            Anagram::new(vec!["hello"]),
            Err(AnagramError::InsufficientMembers { count: 1 })
        );
        assert_eq!(
            Anagram::new(Vec::<String>::new()),
            Err(AnagramError::InsufficientMembers { count: 0 })
        );
    }

    #[test]
    fn new_keeps_duplicates() {
        let actual = Anagram::new(vec!["dog", "god", "dog"]).unwrap();
        assert_eq!(actual.words(), ["dog", "dog", "god"]);
        assert_eq!(actual.len(), 3);
    }

    #[test]
    fn equality_depends_on_word_order() {
        let sorted = anagram(&["act", "cat"], "act");
        let unsorted = anagram(&["cat", "act"], "act");
        assert_ne!(sorted, unsorted);
        assert_ne!(sorted, anagram(&["act", "cat", "tac"], "act"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            AnagramError::InsufficientMembers { count: 1 }.to_string(),
            "cannot create anagram with 1 words"
        );
        let mismatch = AnagramError::MismatchedNormal {
            first: "cdku".to_string(),
            conflicting: "cow".to_string(),
        };
        assert_eq!(mismatch.to_string(), "not anagrams: 'cdku', 'cow'");
    }

    #[test]
    fn find_groups_pairs() {
        let mut actual = find_anagrams(&WORDS);
        sort_by_normal(&mut actual);

        let expected = vec![
            anagram(&["act", "cat"], "act"),
            anagram(&["ape", "pea"], "aep"),
            anagram(&["dog", "god"], "dgo"),
        ];
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_drops_singletons() {
        let actual = find_anagrams(&["zebra", "cat", "act", "quiz"]);
        assert_eq!(actual.len(), 1);
        assert!(
            actual
                .iter()
                .flat_map(Anagram::words)
                .all(|w| w != "zebra" && w != "quiz")
        );
    }

    #[test]
    fn find_members_share_normal() {
        let words = ["least", "setal", "slate", "stale", "evil", "vile", "live", "zebra"];
        for group in find_anagrams(&words) {
            assert!(group.len() >= 2);
            assert!(group.words().iter().all(|w| normal_key(w) == group.normal()));
        }
    }

    #[test]
    fn find_keeps_duplicate_words() {
        let actual = find_anagrams(&["dog", "dog", "cat"]);
        assert_eq!(actual, vec![anagram(&["dog", "dog"], "dgo")]);
    }

    #[test]
    fn find_empty_input() {
        let empty: [&str; 0] = [];
        assert!(find_anagrams(&empty).is_empty());
    }

    #[test]
    fn find_accepts_owned_strings() {
        let words = vec!["tar".to_string(), "rat".to_string()];
        assert_eq!(find_anagrams(&words), vec![anagram(&["rat", "tar"], "art")]);
    }

    #[test]
    fn sort_by_count_is_stable() {
        let mut groups = vec![
            anagram(&["art", "rat", "tar"], "art"),
            anagram(&["dog", "god"], "dgo"),
            anagram(&["act", "cat"], "act"),
        ];
        sort_by_count(&mut groups);

        let normals: Vec<&str> = groups.iter().map(Anagram::normal).collect();
        assert_eq!(normals, ["dgo", "act", "art"]);
    }

    #[test]
    fn display_joins_words() {
        let group = Anagram::new(vec!["pea", "ape"]).unwrap();
        assert_eq!(group.to_string(), "ape pea");
    }
}
