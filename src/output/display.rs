//! Display functions for command results

use super::formatters::{format_group, score_bar};
use crate::commands::{DistanceResult, FindResult, RankResult};
use colored::Colorize;

/// Print anagram groups, one line per group
///
/// With `verbose`, a summary header and each group's normal key are shown too.
pub fn print_find_result(result: &FindResult, verbose: bool) {
    if verbose {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "{} groups covering {} of {} words",
            result.groups.len().to_string().bright_yellow().bold(),
            result.grouped_words(),
            result.total_words
        );
        println!("{}", "─".repeat(60).cyan());
    }

    for group in &result.groups {
        if verbose {
            println!(
                "{:>3} {} {}",
                group.len().to_string().bright_black(),
                format!("[{}]", group.normal()).bright_black(),
                format_group(group)
            );
        } else {
            println!("{}", format_group(group));
        }
    }
}

/// Print rankings as `score, wordA, wordB` lines
///
/// With `verbose`, a summary header and a score bar per line are shown too.
pub fn print_rank_result(result: &RankResult, verbose: bool) {
    if verbose {
        println!("\n{}", "═".repeat(60).cyan());
        println!(
            " {} {} ",
            "RANKINGS:".bright_cyan().bold(),
            result.ranker_name.bright_yellow().bold()
        );
        println!("{}", "═".repeat(60).cyan());
        println!("   Words:    {}", result.total_words);
        println!("   Groups:   {}", result.group_count);
        println!("   Pairs:    {}", result.pair_count);
        println!("   Time:     {:.3}s\n", result.duration.as_secs_f64());
    }

    let max_score = result
        .rankings
        .iter()
        .map(crate::ranking::Ranking::score)
        .max()
        .unwrap_or(0);

    for ranking in &result.rankings {
        if verbose {
            println!(
                "{} {ranking}",
                score_bar(ranking.score(), max_score, 12).green()
            );
        } else {
            println!("{ranking}");
        }
    }
}

/// Print the score of a single pair
pub fn print_distance_result(result: &DistanceResult) {
    println!(
        "{}, {}, {}",
        result.score.to_string().bright_yellow().bold(),
        result.a,
        result.b
    );

    let note = if result.anagrams {
        "anagrams".green()
    } else {
        "not anagrams".yellow()
    };
    println!("   {} ({note})", result.ranker_name.bright_black());
}
