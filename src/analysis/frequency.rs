// Bag-of-words frequency table and top-K ranking.

use std::collections::{BTreeMap, HashMap};

use crate::models::WordCount;

/// How many entries the top-words ranking holds at most.
pub const TOP_K: usize = 50;

/// Word counts for one document.
#[derive(Debug, Clone, Default)]
pub struct Frequencies {
    /// Full token -> count table
    pub table: BTreeMap<String, u64>,
    /// min(top_k, vocabulary) entries, count descending, ties in
    /// first-occurrence order
    pub top_words: Vec<WordCount>,
    /// Total number of tokens counted
    pub total: usize,
}

/// Count tokens and rank the `top_k` most frequent.
///
/// Ties are broken by where a word first appeared in `tokens`, never
/// alphabetically, so the ranking follows reading order.
pub fn analyze_frequencies(tokens: &[String], top_k: usize) -> Frequencies {
    // Vocabulary in first-occurrence order, with counts
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut vocabulary: Vec<(&str, u64)> = Vec::new();
    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => vocabulary[i].1 += 1,
            None => {
                index.insert(token.as_str(), vocabulary.len());
                vocabulary.push((token.as_str(), 1));
            }
        }
    }

    let table: BTreeMap<String, u64> = vocabulary
        .iter()
        .map(|&(word, count)| (word.to_string(), count))
        .collect();

    // Stable sort keeps first-occurrence order among equal counts
    let mut ranked = vocabulary;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let total = tokens.len();
    let top_words = ranked
        .into_iter()
        .take(top_k)
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
            frequency: relative_frequency(count, total),
        })
        .collect();

    Frequencies {
        table,
        top_words,
        total,
    }
}

/// count / total, or 0 for an empty document.
pub fn relative_frequency(count: u64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_and_frequency() {
        let f = analyze_frequencies(&tokens(&["robot", "loved", "robot", "robot", "happy"]), TOP_K);
        assert_eq!(f.total, 5);
        assert_eq!(f.table["robot"], 3);
        assert_eq!(f.top_words[0].word, "robot");
        assert_eq!(f.top_words[0].count, 3);
        assert!((f.top_words[0].frequency - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_ties_follow_first_occurrence() {
        let f = analyze_frequencies(&tokens(&["zebra", "apple", "mango", "apple", "zebra"]), TOP_K);
        let order: Vec<&str> = f.top_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_top_k_truncates() {
        let words: Vec<String> = (0..80).map(|i| format!("word{i}")).collect();
        let f = analyze_frequencies(&words, TOP_K);
        assert_eq!(f.top_words.len(), TOP_K);
        assert_eq!(f.table.len(), 80);
        assert_eq!(f.top_words[0].word, "word0");
    }

    #[test]
    fn test_empty_tokens() {
        let f = analyze_frequencies(&[], TOP_K);
        assert!(f.table.is_empty());
        assert!(f.top_words.is_empty());
        assert_eq!(f.total, 0);
    }
}
