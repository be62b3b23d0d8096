// Single-document pipeline: extract -> preprocess -> frequencies ->
// sentiment -> style -> topics.
//
// Each stage reads the previous stage's output and produces a new value.
// Sentiment reads the body text while style metrics read both token streams,
// so neither can disturb the other.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use super::context::AnalysisContext;
use crate::analysis::frequency::analyze_frequencies;
use crate::analysis::style::compute_style;
use crate::corpus::document::RawDocument;
use crate::corpus::extract::extract;
use crate::models::TextRecord;
use crate::sentiment::score_document;
use crate::topics::pseudo_documents;

/// Run every per-document stage. Malformed or degenerate input degrades to
/// defaults and empty results; this never fails.
pub fn analyze_document(ctx: &AnalysisContext, doc: &RawDocument) -> TextRecord {
    let extracted = extract(doc);
    let processed = ctx.preprocessor.process(&extracted.body);

    let frequencies = analyze_frequencies(&processed.filtered_tokens, ctx.top_k);
    let sentiment = score_document(ctx.scorer.as_ref(), &extracted.body, &processed.sentences);
    let style_metrics = compute_style(
        &processed.raw_tokens,
        &processed.filtered_tokens,
        processed.sentence_count(),
    );
    let topics = ctx
        .topic_modeler
        .fit(&pseudo_documents(&ctx.preprocessor, &processed.sentences));

    info!(
        id = doc.id.as_str(),
        title = extracted.metadata.title.as_str(),
        words = style_metrics.total_words_all,
        sentences = style_metrics.total_sentences,
        sentiment = sentiment.classification.as_str(),
        topics = topics.len(),
        "Analyzed text"
    );

    TextRecord {
        id: doc.id.clone(),
        metadata: extracted.metadata,
        top_words: frequencies.top_words,
        word_frequencies: frequencies.table,
        sentiment,
        style_metrics,
        topics,
    }
}

/// Read a corpus file and analyze it. Only reading can fail.
pub fn analyze_path(ctx: &AnalysisContext, path: &Path) -> Result<TextRecord> {
    let doc = RawDocument::read(path)?;
    Ok(analyze_document(ctx, &doc))
}
