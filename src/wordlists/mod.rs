//! Word list input
//!
//! Reads raw words from files, readers or the built-in list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::find_anagrams;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_words_are_trimmed() {
        for &word in BUILTIN {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn builtin_has_anagram_groups() {
        let groups = find_anagrams(BUILTIN);
        assert_eq!(groups.len(), 14);
        assert!(groups.iter().any(|g| g.normal() == "aelst" && g.len() == 7));
    }
}
