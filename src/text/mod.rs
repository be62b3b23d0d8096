// Text preprocessing — sentences, tokens, lemmas, stop-words.
//
// The Preprocessor turns a body of text into two token streams: raw tokens
// (every alphabetic word, lowercased) for style metrics, and filtered tokens
// (lemmatized, stop-words and short words removed) for frequency, topic and
// richness analysis.

pub mod lemmatizer;
pub mod sentences;
pub mod stopwords;
pub mod traits;

use lemmatizer::MorphyLemmatizer;
use stopwords::StopWords;
use traits::Lemmatizer;

/// Filtered tokens must be longer than this many characters.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Split text into lowercased runs of alphabetic characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Output of preprocessing one body of text.
#[derive(Debug, Clone, Default)]
pub struct Preprocessed {
    pub raw_tokens: Vec<String>,
    pub filtered_tokens: Vec<String>,
    pub sentences: Vec<String>,
}

impl Preprocessed {
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Immutable preprocessing configuration, built once and shared by
/// reference across documents.
pub struct Preprocessor {
    stop_words: StopWords,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(StopWords::english(), Box::new(MorphyLemmatizer::default()))
    }
}

impl Preprocessor {
    pub fn new(stop_words: StopWords, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Segment, tokenize and filter a body of text.
    pub fn process(&self, body: &str) -> Preprocessed {
        let raw_tokens = tokenize(body);
        let filtered_tokens = self.filter_tokens(&raw_tokens);
        Preprocessed {
            raw_tokens,
            filtered_tokens,
            sentences: sentences::split_sentences(body),
        }
    }

    /// Lemmatize and drop stop-words and short tokens. Both the surface
    /// form and the lemma must pass the filter.
    pub fn filter_tokens(&self, raw: &[String]) -> Vec<String> {
        raw.iter()
            .filter(|token| self.is_content_word(token))
            .map(|token| self.lemmatizer.lemmatize(token))
            .filter(|lemma| self.is_content_word(lemma))
            .collect()
    }

    fn is_content_word(&self, token: &str) -> bool {
        token.chars().count() > MIN_TOKEN_CHARS
            && token.chars().all(char::is_alphabetic)
            && !self.stop_words.contains(token)
    }
}
