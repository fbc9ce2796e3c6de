//! Display functions for command results

use colored::Colorize;

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, OpeningSummary, SolveResult};
use crate::solver::{GuessSource, SolveStatus};

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult<'_>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.report.steps {
        let source = match step.source {
            GuessSource::Opening => " (opening)".bright_black().to_string(),
            GuessSource::Strategy => String::new(),
        };
        println!(
            "\nTurn {}: {} {}{source}",
            step.round,
            colored_guess(step.guess, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Time:       {:.1}ms",
                step.elapsed.as_secs_f64() * 1000.0
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    match result.report.status {
        SolveStatus::Solved(word) => println!(
            "{}",
            format!(
                "✅ Solved: {} in {} rounds",
                word.text().to_uppercase(),
                result.report.rounds
            )
            .green()
            .bold()
        ),
        SolveStatus::Exhausted { remaining } => println!(
            "{}",
            format!(
                "❌ Out of rounds after {} with {remaining} candidates left",
                result.report.rounds
            )
            .red()
            .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} challenge words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.worst_case);

    if let Some((best, entropy)) = &result.best {
        println!(
            "\n   Best opener: {} ({entropy:.3} bits)",
            best.to_uppercase().bright_green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({}) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    let pct = |n: usize| {
        if result.total_words == 0 {
            0.0
        } else {
            n as f64 / result.total_words as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", pct(result.solved)).green()
    );
    if result.failed() > 0 {
        println!(
            "   Failed:           {} {}",
            result.failed(),
            format!("({:.1}%)", pct(result.failed())).red()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    for (rounds, &count) in &result.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "   {rounds:2}: {} {count:4} ({:5.1}%)",
            bar.green(),
            pct(count)
        );
    }

    println!("\n🎯 {}", "First guesses:".bright_cyan().bold());
    let mut openers: Vec<(&String, &usize)> = result.first_guesses.iter().collect();
    openers.sort_by_key(|&(_, count)| std::cmp::Reverse(*count));
    for (word, count) in openers.iter().take(5) {
        println!("   {}: {count} games", word.to_uppercase());
    }

    if !result.exhausted.is_empty() {
        println!("\n😰 {}", "Out of rounds:".yellow().bold());
        for word in result.exhausted.iter().take(10) {
            println!("   {}", word.to_uppercase().yellow());
        }
    }

    if !result.errors.is_empty() {
        println!("\n❌ {}", "Errors:".red().bold());
        for (word, err) in result.errors.iter().take(10) {
            println!("   {}: {err}", word.to_uppercase().red());
        }
    }
}

/// Print a summary of a freshly built opening table
pub fn print_opening_summary(summary: &OpeningSummary, path: &std::path::Path) {
    println!(
        "{} {}",
        "Opening table written to".green().bold(),
        path.display()
    );
    println!(
        "   First guess:     {}",
        summary.first_guess.to_uppercase().bright_yellow().bold()
    );
    println!("   Feedback codes:  {}", summary.partitions);
    println!("   Second guesses:  {}", summary.second_guesses);
    println!("   Largest group:   {}", summary.largest_partition);
}
