//! Simple interactive CLI mode
//!
//! Prompts for a board, prints the ranked words, and repeats.

use super::solve::{SolveConfig, solve_board};
use crate::dictionary::Dictionary;
use crate::output::print_solve_result;
use crate::solver::SearchOptions;
use colored::Colorize;
use std::io::{self, Write};

/// Settings that apply to every board entered in interactive mode
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleConfig {
    pub options: SearchOptions,
    pub unique: bool,
    /// Maximum number of words to print per board
    pub limit: Option<usize>,
    pub verbose: bool,
}

/// Run the simple interactive CLI mode
///
/// Malformed boards are reported and the prompt repeats. The loop ends on `quit`
/// or end of input.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(dictionary: &Dictionary, config: SimpleConfig) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Ruzzle Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter the board letters row by row as one string (e.g. 16 letters for 4×4).");
    println!("Then enter one bonus digit per tile, or press enter for none:\n");
    println!("  0 = none   1 = double letter   2 = triple letter");
    println!("  3 = double word   4 = triple word\n");
    println!("Commands: 'quit' to exit\n");

    loop {
        let Some(letters) = get_user_input("Letters")? else {
            break;
        };
        if is_quit(&letters) {
            break;
        }
        if letters.is_empty() {
            continue;
        }

        let Some(bonuses) = get_user_input("Bonuses")? else {
            break;
        };
        if is_quit(&bonuses) {
            break;
        }

        let mut solve_config = SolveConfig::new(letters, Some(bonuses));
        solve_config.options = config.options;
        solve_config.unique = config.unique;

        match solve_board(&solve_config, dictionary) {
            Ok(result) => print_solve_result(&result, config.limit, config.verbose),
            Err(e) => {
                tracing::warn!(error = %e, "rejected board input");
                println!("{} {e}\n", "❌ Invalid board:".red().bold());
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
