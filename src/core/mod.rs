//! Core domain types for anagram discovery
//!
//! This module contains the normalizer, the validated `Anagram` entity and the grouper.
//! Everything here is a pure transform over in-memory words.

mod anagram;
mod normal;

pub use anagram::{Anagram, AnagramError, find_anagrams, sort_by_count, sort_by_normal};
pub use normal::normal_key;
