//! Styled terminal output.
//!
//! All user-facing lines go through `OutputFormatter` so styling stays
//! consistent: green checkmarks for completed moves, yellow warnings for
//! recovered conditions, red crosses for errors.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;

/// Centralized CLI output with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Success line with a green checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Error line with a red cross, to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Warning line with a yellow marker.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Informational line in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Unstyled line.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Dry-run line in yellow.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Progress bar for a move pass over `total` files.
    ///
    /// Per-file lines should be printed through the bar (`pb.println`) so
    /// they land above it instead of tearing it.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:30.green/white}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("=> "),
        );
        pb
    }

    /// Per-category move counts for one source directory.
    pub fn summary(category_counts: &HashMap<String, usize>, total_moved: usize) {
        println!("\n{}", "Summary:".bold());

        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        for (category, count) in categories {
            println!(
                "  {}/: {} {}",
                category,
                count.to_string().green(),
                if *count == 1 { "file" } else { "files" }
            );
        }

        println!(
            "  Total: {} {}",
            total_moved.to_string().green().bold(),
            if total_moved == 1 { "file" } else { "files" }
        );
    }
}
