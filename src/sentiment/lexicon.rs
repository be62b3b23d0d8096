// Valence lexicon — word -> mean sentiment rating.
//
// Uses the VADER lexicon file layout: one entry per line, tab-separated,
// token first and mean valence second (any further columns are ignored).
// A compact English lexicon is compiled in; a full lexicon file can be
// loaded instead through configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

const BUILTIN: &str = include_str!("lexicon.tsv");

/// Immutable token -> valence map.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// The compiled-in English lexicon.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN)
    }

    /// Load a lexicon file in VADER layout.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon {}", path.display()))?;
        let lexicon = Self::parse(&text);
        if lexicon.is_empty() {
            anyhow::bail!("Lexicon {} has no usable entries", path.display());
        }
        info!(path = %path.display(), entries = lexicon.len(), "Loaded valence lexicon");
        Ok(lexicon)
    }

    /// Parse lexicon text. Blank lines and `#` comments are skipped;
    /// malformed lines are logged and skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries = HashMap::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(token), Some(value)) = (fields.next(), fields.next()) else {
                warn!(line = lineno + 1, "Lexicon line has fewer than two fields, skipping");
                continue;
            };
            match value.trim().parse::<f64>() {
                Ok(v) => {
                    entries.insert(token.trim().to_lowercase(), v);
                }
                Err(_) => {
                    warn!(line = lineno + 1, value, "Lexicon valence is not a number, skipping");
                }
            }
        }
        Self { entries }
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
