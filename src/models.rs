// Data models — the output schema of a pipeline run.
//
// These structs serialize to the JSON artifact consumed by the presentation
// layer. Field names and nesting are the contract: the consumer indexes them
// by name, so nothing here gets renamed or made optional.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The single artifact written per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub corpus_info: CorpusInfo,
    pub texts: Vec<TextRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusInfo {
    /// Number of texts that made it into `texts` (skipped documents excluded)
    pub total_texts: usize,
    /// UTC timestamp, RFC 3339
    pub generated_at: String,
}

/// Everything computed for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRecord {
    pub id: String,
    pub metadata: Metadata,
    pub top_words: Vec<WordCount>,
    /// Full filtered-token frequency table. Ordered so the artifact is
    /// byte-stable across runs.
    pub word_frequencies: BTreeMap<String, u64>,
    pub sentiment: SentimentRecord,
    pub style_metrics: StyleMetrics,
    pub topics: Vec<Topic>,
}

/// Header fields of a document. Missing labels hold a sentinel, never null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub release_date: String,
    pub language: String,
}

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            author: UNKNOWN.to_string(),
            release_date: NOT_AVAILABLE.to_string(),
            language: UNKNOWN.to_string(),
        }
    }
}

/// One entry of the top-words ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
    /// count / total filtered tokens
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub classification: Classification,
    pub sentence_sentiments: SentenceSentiments,
}

/// Distribution of per-sentence compound scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSentiments {
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
}

/// Sentiment tag derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Positive,
    Negative,
    Neutral,
}

impl Classification {
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;

    /// Tag a compound score. Thresholds are inclusive.
    pub fn from_compound(compound: f64) -> Self {
        match compound {
            c if c >= Self::POSITIVE_THRESHOLD => Classification::Positive,
            c if c <= Self::NEGATIVE_THRESHOLD => Classification::Negative,
            _ => Classification::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Positive => "positive",
            Classification::Negative => "negative",
            Classification::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lexical diversity and length statistics.
///
/// Suffix-less counts are over filtered tokens; the `_all` counts are over
/// raw tokens, so the two pairs show diversity before and after filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    pub type_token_ratio: f64,
    pub vocabulary_richness: f64,
    pub unique_words: usize,
    pub total_words: usize,
    pub unique_words_all: usize,
    pub total_words_all: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub total_sentences: usize,
}

/// A latent theme, summarized by its highest-weight terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// 1-based
    pub topic_id: usize,
    pub words: Vec<String>,
}
