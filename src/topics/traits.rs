// Topic modeler trait — swap-ready abstraction.
//
// The pipeline hands a modeler the pseudo-documents of one text and gets back
// ranked topics. LDA is the default; any decomposition that ranks terms per
// topic can stand in.

use crate::models::Topic;

/// Decomposes a set of pseudo-documents into latent topics.
pub trait TopicModeler: Send + Sync {
    /// Fit a model over tokenized pseudo-documents and summarize each topic
    /// by its highest-weight terms. Degenerate input yields fewer topics
    /// (possibly none), never an error.
    fn fit(&self, pseudo_docs: &[Vec<String>]) -> Vec<Topic>;
}
