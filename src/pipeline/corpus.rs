// Corpus run: analyze every document in order, collect the records, and
// persist them as one artifact.
//
// A document that fails is skipped with a warning. The run itself only
// fails when nothing succeeded or the artifact can't be written.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use super::context::AnalysisContext;
use super::document::analyze_path;
use crate::models::{CorpusInfo, CorpusRecord, TextRecord};

/// Analyze the files at `paths`, in order, into a corpus record.
pub fn analyze_corpus(ctx: &AnalysisContext, paths: &[PathBuf]) -> Result<CorpusRecord> {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(ProgressStyle::with_template(
        "  Analyzing [{bar:30}] {pos}/{len} {msg}",
    )?);

    let mut texts = Vec::with_capacity(paths.len());
    for path in paths {
        pb.set_message(path.display().to_string());
        match analyze_path(ctx, path) {
            Ok(record) => texts.push(record),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to analyze document, skipping");
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let skipped = paths.len() - texts.len();
    info!(analyzed = texts.len(), skipped, "Corpus analysis complete");

    build_corpus_record(texts)
}

/// Wrap per-document records in the corpus envelope. Zero records is a
/// run-fatal condition.
pub fn build_corpus_record(texts: Vec<TextRecord>) -> Result<CorpusRecord> {
    if texts.is_empty() {
        anyhow::bail!("No documents were analyzed successfully, nothing to write");
    }
    Ok(CorpusRecord {
        corpus_info: CorpusInfo {
            total_texts: texts.len(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        },
        texts,
    })
}

/// Write the artifact as pretty-printed JSON, creating parent directories.
pub fn write_corpus(record: &CorpusRecord, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), texts = record.texts.len(), "Wrote corpus artifact");
    Ok(())
}

/// Load a previously written artifact.
pub fn read_corpus(path: &Path) -> Result<CorpusRecord> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}
