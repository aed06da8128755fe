//! Anagram discovery command
//!
//! Groups a word list into anagram sets and orders them for presentation.

use crate::core::{Anagram, find_anagrams, sort_by_count, sort_by_normal};

/// Presentation order for anagram groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupSort {
    /// Smallest groups first, ties by normal key
    #[default]
    Count,
    /// Alphabetical by normal key
    Normal,
}

impl GroupSort {
    /// Supported names: "count", "normal"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "count" => Some(Self::Count),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }

    /// Sort groups in place
    pub fn apply(self, groups: &mut [Anagram]) {
        sort_by_normal(groups);
        if self == Self::Count {
            sort_by_count(groups);
        }
    }
}

/// Configuration for finding anagrams
#[derive(Debug, Clone, Copy)]
pub struct FindConfig {
    pub sort: GroupSort,
    /// Only keep groups with at least this many words
    pub min_size: usize,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self {
            sort: GroupSort::default(),
            min_size: 2,
        }
    }
}

/// Result of finding anagrams
pub struct FindResult {
    pub total_words: usize,
    pub groups: Vec<Anagram>,
}

impl FindResult {
    /// Number of input words that landed in some group
    #[must_use]
    pub fn grouped_words(&self) -> usize {
        self.groups.iter().map(Anagram::len).sum()
    }
}

/// Find, filter and order anagram groups
#[must_use]
pub fn run_find<S: AsRef<str>>(words: &[S], config: FindConfig) -> FindResult {
    let mut groups = find_anagrams(words);
    groups.retain(|g| g.len() >= config.min_size);
    config.sort.apply(&mut groups);

    log::info!(
        "found {} anagram groups among {} words",
        groups.len(),
        words.len()
    );

    FindResult {
        total_words: words.len(),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::BUILTIN;

    const WORDS: [&str; 6] = ["god", "dog", "act", "cat", "pea", "ape"];

    #[test]
    fn find_sorted_by_normal() {
        let config = FindConfig {
            sort: GroupSort::Normal,
            ..FindConfig::default()
        };
        let result = run_find(&WORDS, config);

        let normals: Vec<&str> = result.groups.iter().map(Anagram::normal).collect();
        assert_eq!(normals, ["act", "aep", "dgo"]);
        assert_eq!(result.total_words, 6);
        assert_eq!(result.grouped_words(), 6);
    }

    #[test]
    fn find_sorted_by_count_breaks_ties_by_normal() {
        let words = ["tar", "rat", "art", "dog", "god", "act", "cat"];
        let result = run_find(&words, FindConfig::default());

        let normals: Vec<&str> = result.groups.iter().map(Anagram::normal).collect();
        assert_eq!(normals, ["act", "dgo", "art"]);
    }

    #[test]
    fn find_min_size_filters_groups() {
        let config = FindConfig {
            min_size: 5,
            ..FindConfig::default()
        };
        let result = run_find(BUILTIN, config);

        assert!(result.groups.iter().all(|g| g.len() >= 5));
        let normals: Vec<&str> = result.groups.iter().map(Anagram::normal).collect();
        assert_eq!(normals, ["acert", "eilnst", "eilv", "aelst"]);
    }

    #[test]
    fn find_no_anagrams() {
        let result = run_find(&["zebra", "quiz"], FindConfig::default());
        assert!(result.groups.is_empty());
        assert_eq!(result.grouped_words(), 0);
    }

    #[test]
    fn group_sort_from_name() {
        assert_eq!(GroupSort::from_name("count"), Some(GroupSort::Count));
        assert_eq!(GroupSort::from_name("normal"), Some(GroupSort::Normal));
        assert_eq!(GroupSort::from_name("size"), None);
    }
}
