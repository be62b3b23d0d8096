// Stylometric metrics — lexical diversity and length statistics.
//
// Diversity over filtered tokens (type-token ratio) sits next to the same
// counts over raw tokens, so consumers can compare the document as written
// with its content words. Every ratio is guarded: an empty document yields
// zeros, never NaN.

use std::collections::HashSet;

use crate::models::StyleMetrics;

/// Compute style metrics from both token streams and the sentence count.
pub fn compute_style(raw: &[String], filtered: &[String], sentence_count: usize) -> StyleMetrics {
    let unique_words = count_unique(filtered);
    let total_words = filtered.len();
    let unique_words_all = count_unique(raw);
    let total_words_all = raw.len();

    let char_total: usize = raw.iter().map(|w| w.chars().count()).sum();

    StyleMetrics {
        type_token_ratio: round_to(ratio(unique_words, total_words), 4),
        vocabulary_richness: round_to(herdan_c(unique_words, total_words), 4),
        unique_words,
        total_words,
        unique_words_all,
        total_words_all,
        avg_word_length: round_to(ratio(char_total, total_words_all), 2),
        avg_sentence_length: round_to(ratio(total_words_all, sentence_count), 2),
        total_sentences: sentence_count,
    }
}

fn count_unique(tokens: &[String]) -> usize {
    tokens.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Herdan's C: ln(types) / ln(tokens). Less sensitive to text length than
/// the plain type-token ratio. Zero when there are fewer than two tokens.
pub fn herdan_c(unique: usize, total: usize) -> f64 {
    if total <= 1 || unique == 0 {
        0.0
    } else {
        (unique as f64).ln() / (total as f64).ln()
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
