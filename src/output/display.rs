//! Display functions for command results

use super::formatters::{bonus_legend, colored_tile, create_progress_bar, format_path};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::Board;
use colored::Colorize;

/// Print a board as a grid of coloured letters
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|&tile| format!(" {} ", colored_tile(tile))).collect();
        println!("   {}", line.join(" "));
    }
    println!("\n   {}", bonus_legend());
}

/// Print the result of solving a board
///
/// Shows at most `limit` words. With `verbose`, each word's tile path is printed too.
pub fn print_solve_result(result: &SolveResult, limit: Option<usize>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    print_board(&result.board);
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}\n", "No words found.".yellow().bold());
        return;
    }

    let top_score = result.words[0].score;
    let shown = limit.unwrap_or(result.words.len()).min(result.words.len());

    println!(
        "\n📊 Found {} words ({} paths) in {:.2}ms\n",
        result.words.len().to_string().bright_yellow().bold(),
        result.total_paths,
        result.duration.as_secs_f64() * 1000.0
    );

    for (i, entry) in result.words.iter().take(shown).enumerate() {
        let bar = create_progress_bar(entry.score as f64, top_score as f64, 20);
        println!(
            "  {:>4}. {:<16} {:>4}  {}",
            (i + 1).to_string().bright_black(),
            entry.word().to_uppercase().bright_white().bold(),
            entry.score.to_string().bright_yellow(),
            bar.green()
        );
        if verbose {
            println!(
                "        {}",
                format_path(&result.board, entry.path.cells()).bright_black()
            );
        }
    }

    if shown < result.words.len() {
        println!(
            "\n  {}",
            format!("… and {} more", result.words.len() - shown).bright_black()
        );
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Search:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    if let Some((word, score)) = &result.best_word {
        println!(
            "   Best word:        {} ({score})",
            word.to_uppercase().bright_white().bold()
        );
    }

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);
}
