// Colored terminal output for corpus summaries, single texts and
// vocabulary comparisons. main.rs delegates all display here.

use colored::Colorize;

use crate::analysis::overlap::VocabularyOverlap;
use crate::models::{Classification, CorpusRecord, TextRecord};

/// Display one summary line per analyzed text.
pub fn display_corpus_summary(record: &CorpusRecord) {
    println!(
        "\n{}",
        format!(
            "=== Corpus Analysis ({} texts, generated {}) ===",
            record.corpus_info.total_texts, record.corpus_info.generated_at
        )
        .bold()
    );
    println!();

    println!(
        "  {:<10} {:<36} {:<22} {:>8}  {:<9} {:>6} {:>7}",
        "Id".dimmed(),
        "Title".dimmed(),
        "Author".dimmed(),
        "Words".dimmed(),
        "Sentiment".dimmed(),
        "TTR".dimmed(),
        "Topics".dimmed(),
    );
    println!("  {}", "-".repeat(110).dimmed());

    for text in &record.texts {
        println!(
            "  {:<10} {:<36} {:<22} {:>8}  {:<9} {:>6.4} {:>7}",
            text.id,
            super::truncate_chars(&text.metadata.title, 32),
            super::truncate_chars(&text.metadata.author, 18),
            text.style_metrics.total_words_all,
            colorize_classification(text.sentiment.classification),
            text.style_metrics.type_token_ratio,
            text.topics.len(),
        );
    }
    println!();
}

/// Display the full analysis of a single text.
pub fn display_text_detail(text: &TextRecord, max_words: usize) {
    let m = &text.metadata;
    println!("\n{}", format!("=== {} ({}) ===", m.title, text.id).bold());
    println!("  Author: {}", m.author);
    println!("  Released: {}  |  Language: {}", m.release_date, m.language);

    let s = &text.sentiment;
    println!(
        "\n  Sentiment: {} (compound {:.4}; pos {:.3} / neg {:.3} / neu {:.3})",
        colorize_classification(s.classification),
        s.compound,
        s.positive,
        s.negative,
        s.neutral,
    );
    println!(
        "    Per sentence: mean {:.4}, std {:.4}",
        s.sentence_sentiments.mean, s.sentence_sentiments.std
    );

    let st = &text.style_metrics;
    println!("\n  Style:");
    println!(
        "    Words: {} content / {} total  |  Unique: {} / {}",
        st.total_words, st.total_words_all, st.unique_words, st.unique_words_all
    );
    println!(
        "    TTR: {:.4}  Richness: {:.4}  Avg word: {:.2}  Avg sentence: {:.2}  Sentences: {}",
        st.type_token_ratio,
        st.vocabulary_richness,
        st.avg_word_length,
        st.avg_sentence_length,
        st.total_sentences
    );

    if !text.top_words.is_empty() {
        println!("\n  Top words:");
        for (i, w) in text.top_words.iter().take(max_words).enumerate() {
            println!(
                "    {:>2}. {:<18} {:>6}  {:.4}",
                i + 1,
                w.word,
                w.count,
                w.frequency
            );
        }
    }

    if text.topics.is_empty() {
        println!("\n  Topics: {}", "none (text too short)".dimmed());
    } else {
        println!("\n  Topics:");
        for topic in &text.topics {
            println!("    {}. {}", topic.topic_id, topic.words.join(", ").dimmed());
        }
    }
    println!();
}

/// Display vocabulary overlap between two texts.
pub fn display_overlap(
    a: &TextRecord,
    b: &TextRecord,
    overlap: &VocabularyOverlap,
    max_words: usize,
) {
    println!(
        "\n{}",
        format!("=== Vocabulary overlap: {} vs {} ===", a.id, b.id).bold()
    );
    println!(
        "  {:<10} {} ({} distinct words)",
        a.id,
        a.metadata.title,
        a.word_frequencies.len()
    );
    println!(
        "  {:<10} {} ({} distinct words)",
        b.id,
        b.metadata.title,
        b.word_frequencies.len()
    );
    println!(
        "\n  Shared: {}  |  Union: {}  |  Jaccard: {:.4}",
        overlap.shared.to_string().bold(),
        overlap.union,
        overlap.jaccard
    );

    // Most frequent shared words by combined count
    let mut shared: Vec<(&str, u64)> = overlap
        .shared_words
        .iter()
        .map(|w| {
            let count = a.word_frequencies.get(w).copied().unwrap_or(0)
                + b.word_frequencies.get(w).copied().unwrap_or(0);
            (w.as_str(), count)
        })
        .collect();
    shared.sort_by(|x, y| y.1.cmp(&x.1).then(x.0.cmp(y.0)));

    if !shared.is_empty() {
        let preview: Vec<&str> = shared.iter().take(max_words).map(|(w, _)| *w).collect();
        println!("  Most used shared words: {}", preview.join(", ").dimmed());
    }
    println!();
}

/// Colorize a sentiment classification.
fn colorize_classification(c: Classification) -> colored::ColoredString {
    match c {
        Classification::Positive => c.as_str().green(),
        Classification::Negative => c.as_str().red(),
        Classification::Neutral => c.as_str().yellow(),
    }
}
