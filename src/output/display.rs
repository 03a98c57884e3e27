//! Display functions for command results

use super::formatters::{format_tagged, frequency_bar};
use crate::commands::AnalysisResult;
use colored::Colorize;

/// Number of tagged words shown in the analysis summary
const TAGGED_SAMPLE: usize = 20;

/// Print the diagnostics of a text analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let analysis = &result.analysis;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TEXT ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nLexical diversity: {}",
        format!("{}", result.lexical_diversity).bright_yellow()
    );

    let sample = &analysis.tagged[..analysis.tagged.len().min(TAGGED_SAMPLE)];
    println!("First {TAGGED_SAMPLE} tagged words: {}", format_tagged(sample));
    println!("Total filtered tokens: {}", analysis.filtered_tokens);
    println!("Number of nouns: {}", analysis.noun_count);

    if analysis.ranked.is_empty() {
        return;
    }

    println!("\n📊 {}", "Most frequent nouns:".bright_cyan().bold());
    let max_count = analysis.ranked[0].count;
    let width = analysis
        .ranked
        .iter()
        .map(|r| r.word.chars().count())
        .max()
        .unwrap_or(0);

    for ranked in &analysis.ranked {
        println!(
            "   {:<width$} {} {}",
            ranked.word,
            frequency_bar(ranked.count, max_count, 20).green(),
            ranked.count
        );
    }
    println!();
}
