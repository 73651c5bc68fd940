//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from the
//! pipeline. Functions here only print.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{Buckets, ReleaseRange};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line per bucket, e.g. `  New Features: 2`
pub fn classification_lines(buckets: &Buckets) -> Vec<String> {
    buckets
        .non_empty()
        .map(|(category, commits)| format!("  {}: {}", category.title(), commits.len()))
        .collect()
}

/// Display how the commits in `range` were classified.
///
/// # Arguments
/// * `range` - The resolved release range
/// * `scanned` - Number of commits read from the log
/// * `buckets` - The classified commits
pub fn display_classification(range: &ReleaseRange, scanned: usize, buckets: &Buckets) {
    println!(
        "\n{}",
        style(format!("Classified commits in {}", range.display_label())).bold()
    );
    println!(
        "{}",
        style(format!(
            "{} commits scanned, {} reportable:",
            scanned,
            buckets.total()
        ))
        .underlined()
    );

    for line in classification_lines(buckets) {
        println!("{}", line);
    }
}

/// Print a rendered document under a title, used for previews.
pub fn display_document(title: &str, contents: &str) {
    println!("\n{}", style(title).bold());
    println!("{}", contents);
}
