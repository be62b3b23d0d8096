use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use distant_reading::analysis::overlap::compare_texts;
use distant_reading::config::Config;
use distant_reading::corpus::document::discover_documents;
use distant_reading::models::{CorpusRecord, TextRecord};
use distant_reading::output::terminal;
use distant_reading::pipeline::context::AnalysisContext;
use distant_reading::pipeline::corpus::{analyze_corpus, read_corpus, write_corpus};

/// Distant reading: word frequencies, sentiment, style metrics and topics
/// for a corpus of Project Gutenberg texts.
#[derive(Parser)]
#[command(name = "distant-reading", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every corpus file and write the JSON artifact
    Analyze {
        /// Directory holding the corpus files
        #[arg(long)]
        corpus_dir: Option<PathBuf>,

        /// Where to write the artifact (default: corpus_analysis.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Only analyze files whose names start with this prefix (default: pg)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Show the analysis of one text from an existing artifact
    Show {
        /// The text id (file name without extension, e.g. pg1342)
        id: String,

        /// Artifact to read (default: the configured output path)
        #[arg(long)]
        input: Option<PathBuf>,

        /// How many top words to print (default: 15)
        #[arg(long, default_value = "15")]
        words: usize,
    },

    /// Compare the vocabularies of two texts from an existing artifact
    Compare {
        id_a: String,
        id_b: String,

        /// Artifact to read (default: the configured output path)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("distant_reading=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            corpus_dir,
            output,
            prefix,
        } => {
            if let Some(dir) = corpus_dir {
                config.corpus_dir = dir;
            }
            if let Some(path) = output {
                config.output_path = path;
            }
            if let Some(prefix) = prefix {
                config.file_prefix = prefix;
            }
            config.require_corpus_dir()?;

            let paths = discover_documents(&config.corpus_dir, &config.file_prefix)?;
            if paths.is_empty() {
                anyhow::bail!(
                    "No files matching {}*.txt in {}",
                    config.file_prefix,
                    config.corpus_dir.display()
                );
            }
            info!(
                count = paths.len(),
                dir = %config.corpus_dir.display(),
                "Found corpus files"
            );

            let ctx = AnalysisContext::from_config(&config)?;
            let record = analyze_corpus(&ctx, &paths)?;
            write_corpus(&record, &config.output_path)?;

            terminal::display_corpus_summary(&record);
            println!(
                "Wrote {} texts to {}",
                record.corpus_info.total_texts,
                config.output_path.display().to_string().bold()
            );
        }

        Commands::Show { id, input, words } => {
            let record = load_artifact(input.unwrap_or(config.output_path))?;
            let text = find_text(&record, &id)?;
            terminal::display_text_detail(text, words);
        }

        Commands::Compare { id_a, id_b, input } => {
            let record = load_artifact(input.unwrap_or(config.output_path))?;
            let a = find_text(&record, &id_a)?;
            let b = find_text(&record, &id_b)?;
            let overlap = compare_texts(a, b);
            terminal::display_overlap(a, b, &overlap, 20);
        }
    }

    Ok(())
}

fn load_artifact(path: PathBuf) -> Result<CorpusRecord> {
    read_corpus(&path).with_context(|| {
        format!(
            "No usable artifact at {}. Run `distant-reading analyze` first.",
            path.display()
        )
    })
}

fn find_text<'a>(record: &'a CorpusRecord, id: &str) -> Result<&'a TextRecord> {
    record.texts.iter().find(|t| t.id == id).with_context(|| {
        let known: Vec<&str> = record.texts.iter().map(|t| t.id.as_str()).collect();
        format!("No text with id {id}. Known ids: {}", known.join(", "))
    })
}
