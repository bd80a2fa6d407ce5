use crate::domain::title::TitleFormat;
use crate::domain::version::MacVersion;

/// Title and markdown body for an issue announcing a release
#[derive(Debug, Clone, PartialEq)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
}

impl IssueDraft {
    /// Render the issue announcing `version`, crediting `source_url`
    pub fn for_release(version: &MacVersion, format: &TitleFormat, source_url: &str) -> Self {
        let title = format.render(version);
        let body = format!(
            "New macOS version available:\n\
             \n\
             |||\n\
             |:-|:-|\n\
             |Version|{}|\n\
             |Build|{}|\n\
             |Date|{}|\n\
             \n\
             Source: {}\n",
            version.full_version(),
            version.build,
            version.release_date,
            source_url
        );

        IssueDraft { title, body }
    }
}
