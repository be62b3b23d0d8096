// Topic modeling — single-document LDA over sentence pseudo-documents.
//
// One text is the unit of analysis, so its sentences stand in for the
// documents a topic model normally needs.

pub mod lda;
pub mod traits;
pub mod vectorizer;

use crate::text::{tokenize, Preprocessor};

/// Turn sentences into pseudo-documents of filtered tokens.
pub fn pseudo_documents(preprocessor: &Preprocessor, sentences: &[String]) -> Vec<Vec<String>> {
    sentences
        .iter()
        .map(|s| preprocessor.filter_tokens(&tokenize(s)))
        .collect()
}
