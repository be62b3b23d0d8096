// Vocabulary overlap between two documents.
//
// Compares the key sets of two full frequency tables:
//
//   shared  = |A ∩ B|
//   union   = |A ∪ B| = |A| + |B| - |A ∩ B|
//   jaccard = shared / union
//
// Counts are ignored; only which words each document uses matters.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::models::TextRecord;

/// Overlap statistics for a pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocabularyOverlap {
    pub shared: usize,
    pub union: usize,
    pub jaccard: f64,
    /// Shared words, alphabetical
    pub shared_words: Vec<String>,
}

/// Full overlap statistics between two frequency tables.
pub fn vocabulary_overlap(
    a: &BTreeMap<String, u64>,
    b: &BTreeMap<String, u64>,
) -> VocabularyOverlap {
    let keys_a: HashSet<&String> = a.keys().collect();
    let keys_b: HashSet<&String> = b.keys().collect();

    let mut shared_words: Vec<String> = keys_a
        .intersection(&keys_b)
        .map(|k| k.to_string())
        .collect();
    shared_words.sort();

    let shared = shared_words.len();
    let union = keys_a.union(&keys_b).count();
    let jaccard = if union == 0 {
        0.0
    } else {
        shared as f64 / union as f64
    };

    VocabularyOverlap {
        shared,
        union,
        jaccard,
        shared_words,
    }
}

/// Convenience wrapper over two analyzed texts.
pub fn compare_texts(a: &TextRecord, b: &TextRecord) -> VocabularyOverlap {
    vocabulary_overlap(&a.word_frequencies, &b.word_frequencies)
}
