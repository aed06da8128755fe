//! Anagram Rank
//!
//! Groups words into anagram sets and ranks the word pairs within each set by string distance.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_rank::core::{find_anagrams, sort_by_normal};
//! use anagram_rank::ranking::{RankerType, rank_all};
//!
//! let mut groups = find_anagrams(&["god", "dog", "act", "cat", "pea", "ape"]);
//! sort_by_normal(&mut groups);
//! assert_eq!(groups.len(), 3);
//!
//! let rankings = rank_all(&groups, &RankerType::default()).unwrap();
//! for ranking in &rankings {
//!     println!("{ranking}");
//! }
//! ```

// Core domain types
pub mod core;

// Distance rankers and pair ranking
pub mod ranking;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
