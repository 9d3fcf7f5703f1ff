//! Ruzzle Solver - CLI
//!
//! Finds and ranks every word on a Ruzzle board, interactively or one board at a time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ruzzle_solver::{
    commands::{BenchmarkConfig, SimpleConfig, SolveConfig, run_benchmark, run_simple, solve_board},
    dictionary::{Dictionary, loader},
    output::{print_benchmark_result, print_solve_result},
    solver::SearchOptions,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ruzzle_solver",
    about = "Find every word on a Ruzzle board, ranked by score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited word file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    log_level: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: enter boards one after another (default)
    Simple {
        #[command(flatten)]
        search: SearchArgs,

        /// Show at most this many words per board
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print each word's tile path
        #[arg(long)]
        paths: bool,
    },

    /// Solve a single board
    Solve {
        /// Board letters, row by row (e.g. 16 letters for a 4×4 board)
        letters: String,

        /// One bonus digit per tile: 0 none, 1 DL, 2 TL, 3 DW, 4 TW
        bonuses: Option<String>,

        #[command(flatten)]
        search: SearchArgs,

        /// Show at most this many words
        #[arg(short, long, default_value = "25")]
        limit: usize,

        /// Print each word's tile path
        #[arg(long)]
        paths: bool,
    },

    /// Benchmark the search on random boards
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Board side length
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,

        /// Search starting tiles in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

/// Search flags shared by `simple` and `solve`
#[derive(clap::Args, Clone, Copy)]
struct SearchArgs {
    /// Show each word once, with its best-scoring path
    #[arg(short, long)]
    unique: bool,

    /// Search starting tiles in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Ignore words shorter than this many tiles
    #[arg(short, long, default_value = "1")]
    min_length: usize,
}

impl SearchArgs {
    const fn options(self) -> SearchOptions {
        SearchOptions {
            min_length: self.min_length,
            parallel: self.parallel,
        }
    }
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            unique: false,
            parallel: false,
            min_length: 1,
        }
    }
}

fn init_tracing(level: u8) {
    let default = match level {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary based on the -d flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    match source {
        "embedded" => Ok(loader::embedded()),
        path => loader::load_from_file(path)
            .with_context(|| format!("Could not load dictionary from '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple {
        search: SearchArgs::default(),
        limit: None,
        paths: false,
    });

    match command {
        Commands::Simple {
            search,
            limit,
            paths,
        } => run_simple_command(&dictionary, search, limit, paths),
        Commands::Solve {
            letters,
            bonuses,
            search,
            limit,
            paths,
        } => run_solve_command(&dictionary, letters, bonuses, search, limit, paths),
        Commands::Benchmark {
            count,
            size,
            seed,
            parallel,
        } => run_benchmark_command(&dictionary, count, size, seed, parallel),
    }
}

fn run_simple_command(
    dictionary: &Dictionary,
    search: SearchArgs,
    limit: Option<usize>,
    paths: bool,
) -> Result<()> {
    let config = SimpleConfig {
        options: search.options(),
        unique: search.unique,
        limit,
        verbose: paths,
    };
    run_simple(dictionary, config).context("Interactive session failed")
}

fn run_solve_command(
    dictionary: &Dictionary,
    letters: String,
    bonuses: Option<String>,
    search: SearchArgs,
    limit: usize,
    paths: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(letters, bonuses);
    config.options = search.options();
    config.unique = search.unique;

    let result = solve_board(&config, dictionary).context("Invalid board")?;
    print_solve_result(&result, Some(limit), paths);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    count: usize,
    size: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<()> {
    println!("Running benchmark on {count} random {size}×{size} boards...");

    let config = BenchmarkConfig {
        count,
        size,
        seed,
        options: SearchOptions {
            parallel,
            ..SearchOptions::default()
        },
        show_progress: true,
    };

    let result = run_benchmark(dictionary, &config).context("Benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
