use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::topics::lda::DEFAULT_ITERATIONS;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the corpus files
    pub corpus_dir: PathBuf,
    /// Where the JSON artifact is written (and read by `show`/`compare`)
    pub output_path: PathBuf,
    /// Only files whose names start with this prefix are analyzed
    pub file_prefix: String,
    /// Optional VADER-format lexicon replacing the built-in one
    pub lexicon_path: Option<PathBuf>,
    /// Words added to the English stop-word list
    pub extra_stop_words: Vec<String>,
    /// Gibbs sampling sweeps per topic model fit
    pub topic_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("."),
            output_path: PathBuf::from("corpus_analysis.json"),
            file_prefix: "pg".to_string(),
            lexicon_path: None,
            extra_stop_words: Vec::new(),
            topic_iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Every setting has a
    /// default, so this only fails on values that don't parse.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let topic_iterations = match env::var("DISTANT_READING_TOPIC_ITERATIONS") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DISTANT_READING_TOPIC_ITERATIONS={v} is not a number"))?,
            Err(_) => defaults.topic_iterations,
        };

        Ok(Self {
            corpus_dir: env::var("DISTANT_READING_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_dir),
            output_path: env::var("DISTANT_READING_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            file_prefix: env::var("DISTANT_READING_FILE_PREFIX").unwrap_or(defaults.file_prefix),
            lexicon_path: env::var("DISTANT_READING_LEXICON")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            extra_stop_words: env::var("DISTANT_READING_EXTRA_STOPWORDS")
                .map(|v| parse_word_list(&v))
                .unwrap_or_default(),
            topic_iterations,
        })
    }

    /// Check that the corpus directory exists before starting a run.
    pub fn require_corpus_dir(&self) -> Result<()> {
        if !self.corpus_dir.is_dir() {
            anyhow::bail!(
                "Corpus directory {} does not exist.\n\
                 Set DISTANT_READING_CORPUS_DIR or pass --corpus-dir.",
                self.corpus_dir.display()
            );
        }
        Ok(())
    }
}

/// Split a comma-separated list, dropping blanks.
fn parse_word_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_word_list() {
        assert_eq!(
            parse_word_list(" chapter, ,gutenberg ,"),
            vec!["chapter", "gutenberg"]
        );
    }

    #[test]
    fn test_require_corpus_dir() {
        let mut config = Config::default();
        config.corpus_dir = PathBuf::from("/nonexistent/corpus");
        assert!(config.require_corpus_dir().is_err());

        let dir = tempfile::tempdir().unwrap();
        config.corpus_dir = dir.path().to_path_buf();
        assert!(config.require_corpus_dir().is_ok());
    }
}
