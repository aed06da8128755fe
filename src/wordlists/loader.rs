//! Word list loading utilities
//!
//! Provides functions to load words from files, readers or embedded constants.

use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Clean-up applied to raw words before grouping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Drop repeated words, keeping the first occurrence
    pub dedupe: bool,
    /// Fold words to lowercase
    pub lowercase: bool,
}

impl InputOptions {
    /// Apply the options to a word list, preserving input order
    ///
    /// # Examples
    /// ```
    /// use anagram_rank::wordlists::loader::InputOptions;
    ///
    /// let options = InputOptions { dedupe: true, lowercase: true };
    /// let words = options.apply(vec!["Dog".into(), "god".into(), "dog".into()]);
    /// assert_eq!(words, ["dog", "god"]);
    /// ```
    #[must_use]
    pub fn apply(&self, words: Vec<String>) -> Vec<String> {
        let words: Vec<String> = if self.lowercase {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        } else {
            words
        };

        if !self.dedupe {
            return words;
        }

        let before = words.len();
        let mut seen = FxHashSet::default();
        let unique: Vec<String> = words
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();
        log::debug!("dropped {} repeated words", before - unique.len());
        unique
    }
}

/// Load words from a file, one per line
///
/// Lines are trimmed and blank lines skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use anagram_rank::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = words_from_lines(content.lines());
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load words from any buffered reader, one per line
///
/// # Errors
///
/// Returns an I/O error if reading fails or the input is not valid UTF-8.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;

    let words = words_from_lines(lines.iter().map(String::as_str));
    log::debug!("loaded {} words from reader", words.len());
    Ok(words)
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use anagram_rank::wordlists::loader::words_from_slice;
/// use anagram_rank::wordlists::BUILTIN;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
