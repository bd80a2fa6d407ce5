//! Main workflow orchestration logic
//!
//! One run is: fetch the latest release, mint a token, list tracked versions,
//! decide, and maybe create an issue. Nothing is retried and nothing is kept
//! between runs; any failure aborts the run before an issue is created.

use crate::auth::CredentialProvider;
use crate::boundary::TrackerWarning;
use crate::domain::{needs_issue, IssueDraft, MacVersion, TitleFormat, TitlePattern};
use crate::error::Result;
use crate::github::{list_tracked_versions, AuthorFilter, CreatedIssue, IssueTracker, NewIssue};
use crate::release::ReleaseSource;
use crate::ui;

/// Options for a single run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Do everything except creating the issue
    pub dry_run: bool,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// An issue already records this release
    AlreadyTracked { latest: MacVersion },
    /// A new issue was filed
    Created {
        latest: MacVersion,
        issue: CreatedIssue,
        title: String,
    },
    /// An issue was needed but not created because of `--dry-run`
    DryRun { latest: MacVersion, draft: IssueDraft },
}

/// Composes the release source, credentials and issue tracker into one run
pub struct Tracker<'a> {
    source: &'a dyn ReleaseSource,
    credentials: &'a dyn CredentialProvider,
    issues: &'a dyn IssueTracker,
    title_format: TitleFormat,
    title_pattern: TitlePattern,
    authors: AuthorFilter,
    labels: Vec<String>,
}

impl<'a> Tracker<'a> {
    pub fn new(
        source: &'a dyn ReleaseSource,
        credentials: &'a dyn CredentialProvider,
        issues: &'a dyn IssueTracker,
        title_format: TitleFormat,
    ) -> Self {
        Tracker {
            source,
            credentials,
            issues,
            title_format,
            title_pattern: TitlePattern::default(),
            authors: AuthorFilter::default(),
            labels: Vec::new(),
        }
    }

    /// Labels attached to created issues
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Which authors' issues count as already tracked
    pub fn with_authors(mut self, authors: AuthorFilter) -> Self {
        self.authors = authors;
        self
    }

    /// Execute one run
    ///
    /// # Returns
    /// The outcome, or the first error from fetching, authenticating, listing
    /// or creating.
    pub fn run(&self, options: &RunOptions) -> Result<RunOutcome> {
        let latest = self.source.fetch_latest_version()?;
        ui::display_latest_version(&latest);

        let token = self.credentials.mint_installation_token()?;

        let tracked = list_tracked_versions(
            self.issues,
            &token,
            &self.title_pattern,
            &self.authors,
        )
        .collect::<Result<Vec<MacVersion>>>()?;
        ui::display_status(&format!("Found {} tracked versions", tracked.len()));

        if !needs_issue(&latest, &tracked) {
            ui::display_success("Issue already exists, nothing to do");
            return Ok(RunOutcome::AlreadyTracked { latest });
        }

        ui::display_status("No existing issue found for this version");
        for warning in collect_warnings(&latest, &tracked) {
            ui::display_boundary_warning(&warning);
        }

        let draft = IssueDraft::for_release(&latest, &self.title_format, self.source.source_url());

        if options.dry_run {
            ui::display_issue_preview(&draft, &self.labels);
            return Ok(RunOutcome::DryRun { latest, draft });
        }

        ui::display_status(&format!("Creating new issue with title: {}", draft.title));
        let issue = self.issues.create_issue(
            &token,
            &NewIssue {
                title: draft.title.clone(),
                body: draft.body,
                labels: self.labels.clone(),
            },
        )?;
        ui::display_success(&format!("Created issue #{} {}", issue.number, issue.html_url));

        Ok(RunOutcome::Created {
            latest,
            issue,
            title: draft.title,
        })
    }
}

/// Warnings worth surfacing for a release that is about to be reported
pub fn collect_warnings(latest: &MacVersion, tracked: &[MacVersion]) -> Vec<TrackerWarning> {
    let mut warnings = Vec::new();

    if latest.release_date.is_empty() {
        warnings.push(TrackerWarning::MissingReleaseDate {
            version: latest.to_string(),
        });
    }

    if let Some(previous) = tracked
        .iter()
        .find(|other| other.same_release(latest) && other.build != latest.build)
    {
        warnings.push(TrackerWarning::BuildChangedAtSameVersion {
            version: latest.full_version(),
            tracked_build: previous.build.clone(),
            latest_build: latest.build.clone(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_warnings_for_dated_new_release() {
        let latest = MacVersion::new(15, 1, 0, "24B83").with_release_date("October 28, 2024");
        let tracked = vec![MacVersion::new(15, 0, 0, "24A335")];
        assert!(collect_warnings(&latest, &tracked).is_empty());
    }

    #[test]
    fn test_missing_date_warning() {
        let latest = MacVersion::new(15, 0, 0, "24A5279h");
        let warnings = collect_warnings(&latest, &[]);
        assert_eq!(
            warnings,
            vec![TrackerWarning::MissingReleaseDate {
                version: "15.0.0 24A5279h".to_string()
            }]
        );
    }

    #[test]
    fn test_build_changed_warning() {
        let latest = MacVersion::new(15, 0, 0, "24A335").with_release_date("September 16, 2024");
        let tracked = vec![MacVersion::new(15, 0, 0, "24A5279h")];
        let warnings = collect_warnings(&latest, &tracked);
        assert_eq!(
            warnings,
            vec![TrackerWarning::BuildChangedAtSameVersion {
                version: "15.0.0".to_string(),
                tracked_build: "24A5279h".to_string(),
                latest_build: "24A335".to_string(),
            }]
        );
    }
}
