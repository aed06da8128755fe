//! Word normalization
//!
//! Two words are anagrams of one another exactly when their normal keys match.

/// Canonical key of a word: its characters sorted by code point
///
/// Total over every input, including the empty string.
///
/// # Examples
/// ```
/// use anagram_rank::core::normal_key;
///
/// assert_eq!(normal_key("god"), "dgo");
/// assert_eq!(normal_key("dog"), normal_key("god"));
/// assert_eq!(normal_key(""), "");
/// ```
#[must_use]
pub fn normal_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
