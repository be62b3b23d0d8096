// Lemmatizer trait — swap-ready abstraction.
//
// The preprocessor only needs "word in, canonical form out". The default
// implementation is rule-based; a dictionary-backed lemmatizer can replace it
// without touching the pipeline.

/// Maps an inflected, lowercased word to its canonical dictionary form.
pub trait Lemmatizer: Send + Sync {
    /// Return the lemma of `word`. Must be a pure function of its input.
    fn lemmatize(&self, word: &str) -> String;
}

/// Identity lemmatizer, for callers that want surface forms only.
pub struct NoopLemmatizer;

impl Lemmatizer for NoopLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}
