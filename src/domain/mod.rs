//! Domain logic - release versions, issue titles and issue bodies, independent of any network I/O

pub mod issue;
pub mod title;
pub mod version;

pub use issue::IssueDraft;
pub use title::{version_descriptor, TitleFormat, TitlePattern, ISSUE_VERSION_PATTERN};
pub use version::{needs_issue, MacVersion};
