// Run-wide analysis context.
//
// Everything shared across documents lives here and is read-only for the
// whole run: the preprocessor (stop-words + lemmatizer), the valence scorer
// and the topic modeler with its fixed seed.

use anyhow::Result;
use tracing::info;

use crate::analysis::frequency::TOP_K;
use crate::config::Config;
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::traits::ValenceScorer;
use crate::sentiment::vader::VaderScorer;
use crate::text::lemmatizer::MorphyLemmatizer;
use crate::text::stopwords::StopWords;
use crate::text::Preprocessor;
use crate::topics::lda::LdaModeler;
use crate::topics::traits::TopicModeler;

pub struct AnalysisContext {
    pub preprocessor: Preprocessor,
    pub scorer: Box<dyn ValenceScorer>,
    pub topic_modeler: Box<dyn TopicModeler>,
    /// Length of the top-words ranking
    pub top_k: usize,
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self {
            preprocessor: Preprocessor::default(),
            scorer: Box::new(VaderScorer::default()),
            topic_modeler: Box::new(LdaModeler::default()),
            top_k: TOP_K,
        }
    }
}

impl AnalysisContext {
    /// Build the context for a run from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let stop_words = StopWords::english().with_extra(&config.extra_stop_words);
        let preprocessor = Preprocessor::new(stop_words, Box::new(MorphyLemmatizer::default()));

        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::builtin(),
        };

        let topic_modeler = LdaModeler {
            iterations: config.topic_iterations,
            ..LdaModeler::default()
        };

        info!(
            stop_words = preprocessor.stop_words().len(),
            lexicon = lexicon.len(),
            topic_iterations = config.topic_iterations,
            "Analysis context ready"
        );

        Ok(Self {
            preprocessor,
            scorer: Box::new(VaderScorer::new(lexicon)),
            topic_modeler: Box::new(topic_modeler),
            top_k: TOP_K,
        })
    }
}
