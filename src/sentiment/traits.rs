// Valence scorer trait — the swap-ready abstraction for sentiment.
//
// The pipeline only needs polarity scores for a piece of text. The default
// implementation is a lexicon-and-rule scorer; any other lexicon or model
// can be plugged in behind this trait.

/// Polarity of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    /// Normalized net valence in [-1, 1]
    pub compound: f64,
    /// Proportion of positive valence (0.0 to 1.0)
    pub positive: f64,
    /// Proportion of negative valence (0.0 to 1.0)
    pub negative: f64,
    /// Proportion of neutral tokens (0.0 to 1.0)
    pub neutral: f64,
}

impl PolarityScores {
    /// Scores for text with no sentiment-bearing content at all.
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
        }
    }
}

/// Trait for scoring the valence of text.
pub trait ValenceScorer: Send + Sync {
    /// Score a single text (a sentence or a whole document).
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// Compound score only. Default implementation delegates to
    /// `polarity_scores`.
    fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}
