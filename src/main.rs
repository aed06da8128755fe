//! Anagram Rank - CLI
//!
//! Finds anagram groups in a word list and ranks word pairs by string distance.

use anagram_rank::{
    commands::{FindConfig, GroupSort, RankConfig, measure_distance, run_find, run_rank},
    logging::init_logger,
    output::{print_distance_result, print_find_result, print_rank_result},
    ranking::{EditDistanceRanker, RankerType, SortOrder},
    wordlists::{
        BUILTIN,
        loader::{InputOptions, load_from_file, load_from_reader, words_from_slice},
    },
};
use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(
    name = "anagram_rank",
    about = "Find anagram groups in a word list and rank word pairs by string distance",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: '-' (default, stdin), 'builtin' (bundled sample), or path to file
    #[arg(short = 'w', long, global = true, default_value = "-")]
    wordlist: String,

    /// Drop repeated words before grouping
    #[arg(long, global = true)]
    dedupe: bool,

    /// Fold words to lowercase before grouping
    #[arg(long, global = true)]
    lowercase: bool,

    /// Show summaries and details (repeat for more log output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List anagram groups, one per line (default)
    Find {
        /// Group order: count (default) or normal
        #[arg(short, long, default_value = "count", value_parser = ["count", "normal"])]
        sort: String,

        /// Only show groups with at least this many words
        #[arg(short, long, default_value = "2")]
        min_size: usize,
    },

    /// Rank word pairs within every anagram group
    Rank {
        #[command(flatten)]
        ranker: RankerArgs,

        /// Smallest scores first (default: most dissimilar pairs first)
        #[arg(short, long)]
        ascending: bool,

        /// Only show the first N rankings
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Only rank groups with at least this many words
        #[arg(short, long, default_value = "2")]
        min_size: usize,
    },

    /// Score a single pair of words
    Distance {
        /// First word
        a: String,

        /// Second word
        b: String,

        #[command(flatten)]
        ranker: RankerArgs,
    },
}

#[derive(Args)]
struct RankerArgs {
    /// Ranker: edit-distance (default), levenshtein, positional-mismatch, hamming
    #[arg(short, long, default_value = "edit-distance")]
    ranker: String,

    /// Edit distance insertion cost
    #[arg(long, default_value = "1")]
    insertion_cost: usize,

    /// Edit distance deletion cost
    #[arg(long, default_value = "1")]
    deletion_cost: usize,

    /// Edit distance substitution cost
    #[arg(long, default_value = "2")]
    substitution_cost: usize,
}

impl RankerArgs {
    /// Resolve the named ranker, applying any edit costs
    fn resolve(&self) -> Result<RankerType> {
        let ranker = RankerType::from_name(&self.ranker).ok_or_else(|| {
            anyhow!(
                "unknown ranker '{}', expected one of: {}",
                self.ranker,
                RankerType::NAMES.join(", ")
            )
        })?;

        // Costs only apply to edit distance
        if !matches!(ranker, RankerType::EditDistance(_)) {
            return Ok(ranker);
        }

        let costs = EditDistanceRanker::with_costs(
            self.insertion_cost,
            self.deletion_cost,
            self.substitution_cost,
        )?;

        Ok(ranker.with_edit_costs(costs))
    }
}

/// Load raw words based on the -w flag
///
/// - "-": Read one word per line from stdin
/// - "builtin": Use the bundled sample word list
/// - "<path>": Load wordlist from file
fn load_words(wordlist: &str) -> Result<Vec<String>> {
    match wordlist {
        "-" => load_from_reader(io::stdin().lock()).context("failed to read words from stdin"),
        "builtin" => Ok(words_from_slice(BUILTIN)),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let verbose = cli.verbose > 0;
    let options = InputOptions {
        dedupe: cli.dedupe,
        lowercase: cli.lowercase,
    };

    // Default to Find mode if no command given
    let command = cli.command.unwrap_or(Commands::Find {
        sort: "count".to_string(),
        min_size: 2,
    });

    match command {
        Commands::Find { sort, min_size } => {
            let words = read_input(&cli.wordlist, options)?;
            run_find_command(&words, &sort, min_size, verbose)
        }
        Commands::Rank {
            ranker,
            ascending,
            top,
            min_size,
        } => {
            // Resolve the ranker before reading input
            let ranker = ranker.resolve()?;
            let order = if ascending {
                SortOrder::Ascending
            } else {
                SortOrder::Descending
            };
            let config = RankConfig {
                order,
                top,
                min_size,
                ..RankConfig::new(ranker)
            };

            let words = read_input(&cli.wordlist, options)?;
            run_rank_command(&words, config, verbose)
        }
        Commands::Distance { a, b, ranker } => run_distance_command(&a, &b, &ranker.resolve()?),
    }
}

fn read_input(wordlist: &str, options: InputOptions) -> Result<Vec<String>> {
    let words = options.apply(load_words(wordlist)?);
    log::info!("read {} words from '{wordlist}'", words.len());
    Ok(words)
}

fn run_find_command(words: &[String], sort: &str, min_size: usize, verbose: bool) -> Result<()> {
    let Some(sort) = GroupSort::from_name(sort) else {
        bail!("unknown sort '{sort}', expected count or normal");
    };

    let result = run_find(words, FindConfig { sort, min_size });
    print_find_result(&result, verbose);
    Ok(())
}

fn run_rank_command(words: &[String], config: RankConfig, verbose: bool) -> Result<()> {
    let result = run_rank(words, config).context("ranking failed")?;
    print_rank_result(&result, verbose);
    Ok(())
}

fn run_distance_command(a: &str, b: &str, ranker: &RankerType) -> Result<()> {
    let result = measure_distance(a, b, ranker)?;
    print_distance_result(&result);
    Ok(())
}
