//! User interface module - console output for an unattended run.
//!
//! Nothing here prompts; a scheduled job has no one to answer.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_issue_preview, display_latest_version,
    display_status, display_success,
};
