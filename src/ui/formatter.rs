//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. Functions here have no side effects beyond printing.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{Tag, VersionClass};
use crate::publisher::PublishReport;

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

/// Display the version tags fetched from the remote.
///
/// Shows up to 10 tags from the provided list; if more exist, displays a
/// count of the remainder.
pub fn display_fetched_versions(tags: &[Tag]) {
    println!("\n{}", style("Versions found on the remote:").bold());

    for tag in tags.iter().take(10) {
        println!("  - {}", tag);
    }

    if tags.len() > 10 {
        println!("  ... and {} more versions", tags.len() - 10);
    }
}

/// Display the publish plan: one line per version with its classification,
/// then the computed latest release and snapshot.
pub fn display_publish_plan(
    entries: &[Tag],
    latest_release: Option<&Tag>,
    latest_snapshot: Option<&Tag>,
) {
    println!("\n{}", style("Publish plan:").bold());

    for tag in entries {
        let class = match tag.classify() {
            VersionClass::Stable => style("stable").green(),
            VersionClass::Snapshot => style("snapshot").yellow(),
        };
        println!("  {} ({})", tag, class);
    }

    match latest_release {
        Some(tag) => println!("\n  Latest release:  {}", style(tag).green()),
        None => println!("\n  Latest release:  {}", style("n/a").dim()),
    }
    if let Some(tag) = latest_snapshot {
        println!("  Latest snapshot: {}", style(tag).yellow());
    }
}

/// Display the outcome of a build: published versions, skipped versions with
/// their reasons, and the rendered latest labels.
pub fn display_publish_summary(report: &PublishReport) {
    println!("\n{}", style("Published versions:").bold());
    for tag in &report.published {
        println!("  {} {}", style("✓").green(), tag);
    }

    if !report.skipped.is_empty() {
        println!("\n{}", style("Skipped versions:").bold());
        for (tag, reason) in &report.skipped {
            println!("  {} {} - {}", style("✗").red(), tag, reason);
        }
    }

    match &report.latest_release {
        Some(tag) => println!("\n  Latest release:  {}", tag),
        None => println!("\n  Latest release:  n/a"),
    }
    if let Some(tag) = &report.latest_snapshot {
        println!("  Latest snapshot: {}", tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_fetched_versions_many() {
        let tags: Vec<Tag> = (0..12)
            .map(|i| Tag::Release(Version::new(1, 0, i)))
            .collect();
        display_fetched_versions(&tags);
    }

    #[test]
    fn test_display_publish_plan() {
        let entries = vec![Tag::Master, Tag::Release(Version::new(1, 2, 5))];
        let latest = Tag::Release(Version::new(1, 2, 5));
        display_publish_plan(&entries, Some(&latest), Some(&Tag::Master));
        display_publish_plan(&entries, None, None);
    }
}
