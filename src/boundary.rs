use std::fmt;

/// Non-fatal conditions noticed during a run.
/// These never change what the run does; they are reported to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerWarning {
    /// The release cell had no parenthesized date; the issue's date field will be empty
    MissingReleaseDate { version: String },
    /// An issue is being filed only because the build changed at an already tracked version
    BuildChangedAtSameVersion {
        version: String,
        tracked_build: String,
        latest_build: String,
    },
}

impl fmt::Display for TrackerWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerWarning::MissingReleaseDate { version } => {
                write!(f, "No release date found for macOS {}", version)
            }
            TrackerWarning::BuildChangedAtSameVersion {
                version,
                tracked_build,
                latest_build,
            } => {
                write!(
                    f,
                    "macOS {} is already tracked with build {}; reporting build {} as a new release",
                    version, tracked_build, latest_build
                )
            }
        }
    }
}
