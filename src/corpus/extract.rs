// Header and body extraction for Project Gutenberg plain-text files.
//
// A Gutenberg file is a labeled header block (Title:, Author:, ...), a
// start-of-ebook marker line, the narrative, and an end-of-ebook marker
// followed by license boilerplate. Nothing here fails: missing labels fall
// back to sentinels and missing markers fall back to a best-effort body.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::warn;

use super::document::{strip_bom, RawDocument};
use crate::models::Metadata;

static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*\*\s*START OF (?:THE|THIS) PROJECT GUTENBERG EBOOK")
        .expect("start marker pattern is valid")
});

static END_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*\*\s*END OF (?:THE|THIS) PROJECT GUTENBERG EBOOK")
        .expect("end marker pattern is valid")
});

// Trailing "[eBook #1342]" style note on the release date line
static BRACKET_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[.*$").expect("bracket pattern is valid"));

const TITLE_LABELS: &[&str] = &["Title:"];
const AUTHOR_LABELS: &[&str] = &["Author:"];
const RELEASE_DATE_LABELS: &[&str] = &["Release date:", "Release Date:"];
const LANGUAGE_LABELS: &[&str] = &["Language:"];

/// Which rule produced the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySource {
    /// Both markers found, in order
    Markers,
    /// Only the start marker was found
    AfterStart,
    /// Only the end marker was found
    BeforeEnd,
    /// No usable markers; header and boilerplate lines stripped
    Fallback,
}

/// Output of the extractor for one document.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub metadata: Metadata,
    pub body: String,
    pub body_source: BodySource,
}

/// Split a raw document into metadata and body text.
pub fn extract(doc: &RawDocument) -> Extracted {
    let text = strip_bom(&doc.contents);

    let start = START_MARKER.find(text);
    let end = END_MARKER.find(text);

    // Labels are only trusted in the header, before the narrative starts
    let header = match start {
        Some(m) => &text[..m.start()],
        None => text,
    };
    let metadata = extract_metadata(header);

    let (body, body_source) = match (start, end) {
        (Some(s), Some(e)) => {
            let body_start = line_end(text, s.end());
            if e.start() >= body_start {
                (&text[body_start..e.start()], BodySource::Markers)
            } else {
                (text, BodySource::Fallback)
            }
        }
        (Some(s), None) => (&text[line_end(text, s.end())..], BodySource::AfterStart),
        (None, Some(e)) => (&text[..e.start()], BodySource::BeforeEnd),
        (None, None) => (text, BodySource::Fallback),
    };

    let body = match body_source {
        BodySource::Fallback => strip_boilerplate(body),
        _ => strip_bom(body.trim()).to_string(),
    };

    if body_source != BodySource::Markers {
        warn!(
            id = doc.id.as_str(),
            source = ?body_source,
            "Start/end markers missing or malformed, using best-effort body"
        );
    }

    Extracted {
        metadata,
        body,
        body_source,
    }
}

/// Scan header lines for the labeled metadata fields. First match wins.
pub fn extract_metadata(header: &str) -> Metadata {
    let defaults = Metadata::default();

    let release_date = find_label(header, RELEASE_DATE_LABELS)
        .map(|v| BRACKET_NOTE.replace(&v, "").trim().to_string())
        .filter(|v| !v.is_empty());

    Metadata {
        title: find_label(header, TITLE_LABELS).unwrap_or(defaults.title),
        author: find_label(header, AUTHOR_LABELS).unwrap_or(defaults.author),
        release_date: release_date.unwrap_or(defaults.release_date),
        language: find_label(header, LANGUAGE_LABELS).unwrap_or(defaults.language),
    }
}

/// Value of the first line starting with any of `labels`, trimmed.
/// Lines whose value is empty are skipped.
fn find_label(header: &str, labels: &[&str]) -> Option<String> {
    header.lines().find_map(|line| {
        let line = line.trim_start();
        labels
            .iter()
            .find_map(|label| line.strip_prefix(label))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}

/// Byte offset just past the newline that ends the line containing `pos`.
fn line_end(text: &str, pos: usize) -> usize {
    match text[pos..].find('\n') {
        Some(offset) => pos + offset + 1,
        None => text.len(),
    }
}

fn is_header_line(line: &str) -> bool {
    let line = line.trim_start();
    TITLE_LABELS
        .iter()
        .chain(AUTHOR_LABELS)
        .chain(RELEASE_DATE_LABELS)
        .chain(LANGUAGE_LABELS)
        .any(|label| line.starts_with(label))
}

/// Drop labeled header lines and `***` marker lines from a marker-less text.
fn strip_boilerplate(text: &str) -> String {
    text.lines()
        .filter(|line| !is_header_line(line) && !line.trim_start().starts_with("***"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
