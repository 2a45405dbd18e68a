//! Display functions for command results

use super::formatters::accuracy_bar;
use crate::commands::{SimulationResult, ThemeOverview};
use crate::session::{AccuracyTier, RoundSummary};
use colored::{ColoredString, Colorize};

fn tier_colored(text: &str, percent: f64) -> ColoredString {
    match AccuracyTier::from_percent(percent) {
        AccuracyTier::Low => text.red(),
        AccuracyTier::Medium => text.yellow(),
        AccuracyTier::High => text.green(),
    }
}

/// Print the end-of-round summary
pub fn print_round_summary(summary: &RoundSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    if summary.won {
        println!(
            "{}",
            format!("🎉 Congratulations, {}! You guessed the word!", summary.player_name)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("💀 Game over, {}!", summary.player_name).red().bold()
        );
        println!(
            "The word was: {}",
            summary.word.to_uppercase().bright_yellow().bold()
        );
        println!("Meaning: {}", summary.hint);
    }

    let bar = accuracy_bar(summary.accuracy, 30);
    println!(
        "🎯 Final accuracy: [{}] {}",
        tier_colored(&bar, summary.accuracy),
        tier_colored(&format!("{:.1}%", summary.accuracy), summary.accuracy)
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Wins:             {} ({})",
        result.wins,
        format!("{:.1}%", result.win_rate).bright_yellow().bold()
    );
    println!(
        "   Avg accuracy:     {}",
        tier_colored(
            &format!("{:.1}%", result.average_accuracy),
            result.average_accuracy
        )
    );
    println!("   Avg wrong:        {:.2}", result.average_wrong_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Wrong-guess distribution:".bright_cyan().bold());
    let mut wrong_counts: Vec<_> = result.wrong_guess_distribution.iter().collect();
    wrong_counts.sort_unstable();
    for (&wrong, &count) in wrong_counts {
        let pct = if result.total_rounds > 0 {
            (count as f64 / result.total_rounds as f64) * 100.0
        } else {
            0.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {wrong:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the theme catalog
pub fn print_theme_overviews(overviews: &[ThemeOverview]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "THEMES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for overview in overviews {
        let lengths: Vec<String> = overview
            .filterable_lengths
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "   {:<12} {} words, {}-{} letters (filters: {})",
            overview.name.bright_yellow().bold(),
            overview.word_count,
            overview.min_length,
            overview.max_length,
            lengths.join(", ")
        );
    }
    println!();
}
