// Latent Dirichlet Allocation fit by collapsed Gibbs sampling.
//
// Every token carries a topic assignment. Each sweep re-samples every
// assignment from
//
//   p(k) ∝ (n_dk + α) · (n_kw + β) / (n_k + V·β)
//
// where n_dk counts topic k in document d, n_kw counts word w in topic k and
// n_k is the size of topic k. The sampler is seeded per fit, so the same
// input always produces the same topics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::traits::TopicModeler;
use super::vectorizer::CountVectorizer;
use crate::models::Topic;

pub const DEFAULT_TOPICS: usize = 3;
pub const DEFAULT_WORDS_PER_TOPIC: usize = 8;
pub const DEFAULT_ITERATIONS: usize = 200;
pub const DEFAULT_SEED: u64 = 42;

pub struct LdaModeler {
    pub n_topics: usize,
    pub words_per_topic: usize,
    pub iterations: usize,
    pub seed: u64,
    pub vectorizer: CountVectorizer,
}

impl Default for LdaModeler {
    fn default() -> Self {
        Self {
            n_topics: DEFAULT_TOPICS,
            words_per_topic: DEFAULT_WORDS_PER_TOPIC,
            iterations: DEFAULT_ITERATIONS,
            seed: DEFAULT_SEED,
            vectorizer: CountVectorizer::default(),
        }
    }
}

/// Sampler state for one fit.
struct GibbsState {
    /// Topic assignment of every token, per document
    assignments: Vec<Vec<usize>>,
    doc_topic: Vec<Vec<usize>>,
    topic_word: Vec<Vec<usize>>,
    topic_total: Vec<usize>,
}

impl GibbsState {
    fn init(
        documents: &[Vec<usize>],
        n_topics: usize,
        vocab_size: usize,
        rng: &mut StdRng,
    ) -> Self {
        let mut state = Self {
            assignments: Vec::with_capacity(documents.len()),
            doc_topic: vec![vec![0; n_topics]; documents.len()],
            topic_word: vec![vec![0; vocab_size]; n_topics],
            topic_total: vec![0; n_topics],
        };
        for (d, doc) in documents.iter().enumerate() {
            let topics: Vec<usize> = doc
                .iter()
                .map(|&w| {
                    let k = rng.random_range(0..n_topics);
                    state.doc_topic[d][k] += 1;
                    state.topic_word[k][w] += 1;
                    state.topic_total[k] += 1;
                    k
                })
                .collect();
            state.assignments.push(topics);
        }
        state
    }
}

impl LdaModeler {
    /// Topic-term weights (`n_kw + β`) after fitting, one row per topic.
    /// `None` when the input is too small for `n_topics` components.
    pub fn topic_term_weights(
        &self,
        pseudo_docs: &[Vec<String>],
    ) -> Option<(Vec<String>, Vec<Vec<f64>>)> {
        let terms = self.vectorizer.fit_transform(pseudo_docs);
        let k_count = self.n_topics;
        let vocab_size = terms.vocabulary.len();

        if k_count == 0 || vocab_size == 0 || terms.documents.len() < k_count {
            debug!(
                documents = terms.documents.len(),
                vocabulary = vocab_size,
                "Too little material for topic modeling"
            );
            return None;
        }

        debug!(
            documents = terms.documents.len(),
            vocabulary = vocab_size,
            tokens = terms.token_count(),
            iterations = self.iterations,
            "Fitting topic model"
        );

        let alpha = 1.0 / k_count as f64;
        let beta = 1.0 / k_count as f64;
        let v_beta = vocab_size as f64 * beta;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut state = GibbsState::init(&terms.documents, k_count, vocab_size, &mut rng);
        let mut probs = vec![0.0; k_count];

        for _ in 0..self.iterations {
            for (d, doc) in terms.documents.iter().enumerate() {
                for (n, &w) in doc.iter().enumerate() {
                    let old = state.assignments[d][n];
                    state.doc_topic[d][old] -= 1;
                    state.topic_word[old][w] -= 1;
                    state.topic_total[old] -= 1;

                    let mut total = 0.0;
                    for (k, p) in probs.iter_mut().enumerate() {
                        *p = (state.doc_topic[d][k] as f64 + alpha)
                            * (state.topic_word[k][w] as f64 + beta)
                            / (state.topic_total[k] as f64 + v_beta);
                        total += *p;
                    }

                    let mut u = rng.random::<f64>() * total;
                    let mut new = k_count - 1;
                    for (k, p) in probs.iter().enumerate() {
                        if u < *p {
                            new = k;
                            break;
                        }
                        u -= p;
                    }

                    state.assignments[d][n] = new;
                    state.doc_topic[d][new] += 1;
                    state.topic_word[new][w] += 1;
                    state.topic_total[new] += 1;
                }
            }
        }

        let weights = state
            .topic_word
            .iter()
            .map(|row| row.iter().map(|&c| c as f64 + beta).collect())
            .collect();
        Some((terms.vocabulary, weights))
    }
}

/// Indices of the `n` largest weights, descending; ties by index.
fn top_indices(weights: &[f64], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    order.truncate(n);
    order
}

impl TopicModeler for LdaModeler {
    fn fit(&self, pseudo_docs: &[Vec<String>]) -> Vec<Topic> {
        let Some((vocabulary, weights)) = self.topic_term_weights(pseudo_docs) else {
            return Vec::new();
        };

        weights
            .iter()
            .enumerate()
            .map(|(k, row)| Topic {
                topic_id: k + 1,
                words: top_indices(row, self.words_per_topic)
                    .into_iter()
                    .map(|i| vocabulary[i].clone())
                    .collect(),
            })
            .collect()
    }
}
