//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the message helpers every igitt command prints
//! through, the spinner shown while git runs and the status report layout.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, status colours from the table
//! - **Standardized spacing**: Newline before command outputs
//! - **Aligned report**: Paths start in the same column

use crate::core::colors::format_status_line;
use crate::core::status_classifier::ClassifiedReport;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
/// - Newlines before and after for spacing
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".bright_green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints an underlined section header
///
/// # Format
/// ```text
///
/// <header>:
/// =========
///
/// ```
pub fn print_section_header(header: &str) {
    let title = format!("{header}:");
    println!("\n{}", title.white());
    println!("{}\n", "=".repeat(title.chars().count()));
}

/// Print a classified status report, or the up-to-date line for a clean tree
pub fn print_status_report(report: &ClassifiedReport) {
    if report.is_clean() {
        println!("{} Up to date.", "✓".bright_green());
        return;
    }

    print_section_header("Files with changes");
    let width = report.title_width();
    for entry in report {
        println!("{}", format_status_line(entry, width));
    }
}

/// Spinner shown while a blocking git call runs
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner
}
