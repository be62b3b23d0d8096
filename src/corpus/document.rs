// Raw documents — reading corpus files from disk.
//
// A RawDocument is the file contents plus an identifier taken from the file
// stem (e.g. `pg1342.txt` -> `pg1342`). The byte-order mark some Gutenberg
// files carry is stripped on read so later stages never see it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

const BOM: char = '\u{feff}';

/// An unparsed corpus document. Immutable once read.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub id: String,
    pub contents: String,
}

impl RawDocument {
    /// Build a document from in-memory text, stripping a leading BOM.
    pub fn new(id: impl Into<String>, contents: &str) -> Self {
        Self {
            id: id.into(),
            contents: strip_bom(contents).to_string(),
        }
    }

    /// Read a document from disk. Invalid UTF-8 is replaced rather than
    /// rejected, since a handful of bad bytes shouldn't cost a whole novel.
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(id, &text))
    }
}

/// Remove a single leading byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// List corpus files in `dir` whose names start with `prefix` and end in
/// `.txt`, sorted by file name so runs are deterministic.
pub fn discover_documents(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("listing corpus directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Unreadable directory entry, skipping");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(prefix) && name.ends_with(".txt") {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_stripped_once() {
        let doc = RawDocument::new("pg1", "\u{feff}Title: X");
        assert_eq!(doc.contents, "Title: X");

        // Only the leading mark is removed
        assert_eq!(strip_bom("a\u{feff}b"), "a\u{feff}b");
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pg20.txt", "pg1342.txt", "notes.txt", "pg11.md"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let found = discover_documents(dir.path(), "pg").unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["pg1342.txt", "pg20.txt"]);
    }

    #[test]
    fn test_read_uses_file_stem_as_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pg84.txt");
        fs::write(&path, "\u{feff}hello").unwrap();

        let doc = RawDocument::read(&path).unwrap();
        assert_eq!(doc.id, "pg84");
        assert_eq!(doc.contents, "hello");
    }
}
