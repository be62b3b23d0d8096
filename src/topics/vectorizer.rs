// Count vectorizer — builds the term-by-pseudo-document data the topic
// model is fit on.
//
// Terms must appear in at least `min_df` pseudo-documents; when more terms
// qualify than `max_features`, the most frequent ones are kept. Vocabulary
// order is first occurrence, which is also the tie-break order downstream.

use std::collections::HashMap;

/// Vocabulary plus each pseudo-document re-expressed as term ids.
#[derive(Debug, Clone, Default)]
pub struct DocumentTerms {
    pub vocabulary: Vec<String>,
    /// Token sequences as vocabulary indices. Documents left empty after
    /// pruning are dropped.
    pub documents: Vec<Vec<usize>>,
}

impl DocumentTerms {
    pub fn token_count(&self) -> usize {
        self.documents.iter().map(Vec::len).sum()
    }
}

pub struct CountVectorizer {
    pub min_df: usize,
    pub max_features: usize,
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self {
            min_df: 2,
            max_features: 1000,
        }
    }
}

/// Per-term statistics gathered in one pass.
struct TermStats {
    first_seen: usize,
    doc_freq: usize,
    total: usize,
    last_doc: usize,
}

impl CountVectorizer {
    pub fn fit_transform(&self, docs: &[Vec<String>]) -> DocumentTerms {
        let mut stats: HashMap<&str, TermStats> = HashMap::new();
        for (d, doc) in docs.iter().enumerate() {
            for token in doc {
                let next_index = stats.len();
                let entry = stats.entry(token.as_str()).or_insert(TermStats {
                    first_seen: next_index,
                    doc_freq: 0,
                    total: 0,
                    last_doc: usize::MAX,
                });
                entry.total += 1;
                if entry.last_doc != d {
                    entry.last_doc = d;
                    entry.doc_freq += 1;
                }
            }
        }

        let mut kept: Vec<(&str, &TermStats)> = stats
            .iter()
            .filter(|(_, s)| s.doc_freq >= self.min_df)
            .map(|(t, s)| (*t, s))
            .collect();

        if kept.len() > self.max_features {
            kept.sort_by(|a, b| {
                b.1.total
                    .cmp(&a.1.total)
                    .then(a.1.first_seen.cmp(&b.1.first_seen))
            });
            kept.truncate(self.max_features);
        }
        kept.sort_by_key(|(_, s)| s.first_seen);

        let vocabulary: Vec<String> = kept.iter().map(|(t, _)| t.to_string()).collect();
        let ids: HashMap<&str, usize> = kept
            .iter()
            .enumerate()
            .map(|(id, (t, _))| (*t, id))
            .collect();

        let documents = docs
            .iter()
            .map(|doc| {
                doc.iter()
                    .filter_map(|t| ids.get(t.as_str()).copied())
                    .collect::<Vec<_>>()
            })
            .filter(|doc| !doc.is_empty())
            .collect();

        DocumentTerms {
            vocabulary,
            documents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<Vec<String>> {
        texts
            .iter()
            .map(|t| t.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_min_df_prunes_and_orders() {
        let d = docs(&["sea whale ship", "ship sea sea", "garden rose"]);
        let dt = CountVectorizer::default().fit_transform(&d);

        assert_eq!(dt.vocabulary, vec!["sea", "ship"]);
        assert_eq!(dt.documents, vec![vec![0, 1], vec![1, 0, 0]]);
        assert_eq!(dt.token_count(), 5);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let d = docs(&["aa bb cc cc", "aa bb cc cc"]);
        let v = CountVectorizer {
            min_df: 1,
            max_features: 2,
        };
        let dt = v.fit_transform(&d);
        // cc (4) then aa (2, seen before bb); vocabulary in first-seen order
        assert_eq!(dt.vocabulary, vec!["aa", "cc"]);
    }

    #[test]
    fn test_empty_input() {
        let dt = CountVectorizer::default().fit_transform(&[]);
        assert!(dt.vocabulary.is_empty());
        assert!(dt.documents.is_empty());
    }
}
