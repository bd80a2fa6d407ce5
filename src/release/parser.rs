//! Extraction of the latest release from the macOS version history page.
//!
//! The page has no API and its markup drifts, so lookups are positional in a
//! loose way: the last qualifying row of the first release table, and the last
//! cell of that row.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::domain::MacVersion;
use crate::error::{Result, TrackerError};

/// Heading text identifying the releases section (case-sensitive substring)
pub const RELEASES_HEADING: &str = "Releases";

/// Class carried by the release table
pub const RELEASE_TABLE_CLASS: &str = "wikitable";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| TrackerError::parse(format!("Invalid selector '{}': {:?}", css, e)))
}

fn version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").expect("version pattern compiles"))
}

fn build_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(([A-Za-z0-9]+)\)").expect("build pattern compiles"))
}

/// Parenthesized fragment ending in a four-digit year
fn date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(([^\(]+[0-9]{4})\)").expect("date pattern compiles"))
}

/// Parse the latest release out of the version history page
///
/// # Errors
/// * `TrackerError::Parse` - no releases section, no release table after it,
///   no data rows, or a last cell without version and build
pub fn parse_latest_version(html: &str) -> Result<MacVersion> {
    let document = Html::parse_document(html);
    let section = find_releases_section(&document)?;
    let table = find_release_table(&document, section)?;
    let text = last_release_cell_text(table)?;
    parse_release_cell(&text)
}

/// First `div` whose first heading (h1-h6) mentions "Releases"
fn find_releases_section(document: &Html) -> Result<ElementRef<'_>> {
    let divs = selector("div")?;
    let headings = selector("h1, h2, h3, h4, h5, h6")?;

    document
        .select(&divs)
        .find(|div| {
            div.select(&headings)
                .next()
                .map(|heading| heading.text().collect::<String>().contains(RELEASES_HEADING))
                .unwrap_or(false)
        })
        .ok_or_else(|| TrackerError::parse("Could not find a section with a Releases heading"))
}

/// First `table.wikitable` following the section start in document order
fn find_release_table<'a>(document: &'a Html, section: ElementRef<'a>) -> Result<ElementRef<'a>> {
    let section_id = section.id();

    document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != section_id)
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| {
            element.value().name() == "table"
                && element
                    .value()
                    .classes()
                    .any(|class| class == RELEASE_TABLE_CLASS)
        })
        .ok_or_else(|| TrackerError::parse("Could not find the Releases table"))
}

/// Text of the last cell of the last row with more than one data cell
fn last_release_cell_text(table: ElementRef<'_>) -> Result<String> {
    let rows = selector("tr")?;
    let cells = selector("td")?;

    let last_row = table
        .select(&rows)
        .map(|row| row.select(&cells).collect::<Vec<_>>())
        .filter(|row_cells| row_cells.len() > 1)
        .last()
        .ok_or_else(|| TrackerError::parse("Releases table has no data rows"))?;

    let cell = last_row
        .last()
        .ok_or_else(|| TrackerError::parse("Release row has no cells"))?;

    Ok(cell.text().collect::<String>().trim().to_string())
}

/// Parse a release cell such as `"14.5 (23F79) (May 13, 2024)"`.
///
/// Version and build are required. The date is best-effort and left empty when
/// no parenthesized fragment ends in a four-digit year.
pub fn parse_release_cell(text: &str) -> Result<MacVersion> {
    let version = version_regex().captures(text).and_then(|c| c.get(1));
    let build = build_regex().captures(text).and_then(|c| c.get(1));

    let (version, build) = match (version, build) {
        (Some(version), Some(build)) => (version.as_str(), build.as_str()),
        _ => {
            return Err(TrackerError::parse(format!(
                "Failed to parse version or build number from '{}'",
                text
            )))
        }
    };

    let release_date = date_regex()
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let parts = version
        .split('.')
        .map(|part| {
            part.parse::<u32>().map_err(|_| {
                TrackerError::parse(format!("Invalid version component '{}' in '{}'", part, text))
            })
        })
        .collect::<Result<Vec<u32>>>()?;

    Ok(MacVersion {
        major: parts[0],
        minor: parts[1],
        patch: parts.get(2).copied().unwrap_or(0),
        build: build.to_string(),
        release_date,
    })
}
