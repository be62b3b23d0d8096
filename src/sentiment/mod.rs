// Sentiment scoring — whole-document valence plus the distribution of
// per-sentence compound scores.

pub mod lexicon;
pub mod traits;
pub mod vader;

use crate::models::{Classification, SentenceSentiments, SentimentRecord};
use traits::ValenceScorer;

/// Score a document once as a whole and once per sentence.
pub fn score_document(
    scorer: &dyn ValenceScorer,
    body: &str,
    sentences: &[String],
) -> SentimentRecord {
    let scores = scorer.polarity_scores(body);

    let per_sentence: Vec<f64> = sentences
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| scorer.compound(s))
        .collect();
    let (mean, std) = mean_and_std(&per_sentence);

    SentimentRecord {
        compound: scores.compound,
        positive: scores.positive,
        negative: scores.negative,
        neutral: scores.neutral,
        classification: Classification::from_compound(scores.compound),
        sentence_sentiments: SentenceSentiments { mean, std },
    }
}

/// Arithmetic mean and population standard deviation. (0, 0) when empty.
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
