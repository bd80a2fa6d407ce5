//! Pure formatting functions for console output.
//!
//! The tracker runs unattended, so everything it reports goes through these
//! helpers: status and success lines to stdout, errors and warnings to stderr.

use crate::boundary::TrackerWarning;
use crate::domain::{IssueDraft, MacVersion};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a non-fatal warning to the operator.
pub fn display_boundary_warning(warning: &TrackerWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Display the latest release found in the release notes.
pub fn display_latest_version(version: &MacVersion) {
    if version.release_date.is_empty() {
        println!("\x1b[1mLatest macOS version:\x1b[0m {}", version);
    } else {
        println!(
            "\x1b[1mLatest macOS version:\x1b[0m {} ({})",
            version, version.release_date
        );
    }
}

/// Display the issue a dry run would have created.
///
/// # Arguments
/// * `draft` - Rendered title and body
/// * `labels` - Labels that would be attached
pub fn display_issue_preview(draft: &IssueDraft, labels: &[String]) {
    println!("\n\x1b[1mIssue preview:\x1b[0m");
    println!("  Title:  \x1b[32m{}\x1b[0m", draft.title);
    if !labels.is_empty() {
        println!("  Labels: {}", labels.join(", "));
    }
    for line in draft.body.lines() {
        println!("  | {}", line);
    }
}
