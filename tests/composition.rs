// Composition tests — verifying that the pipeline stages chain together.
//
// These tests exercise the data flow between modules:
//   RawDocument -> Extract -> Preprocess -> Frequencies/Sentiment/Style/Topics
//     -> TextRecord -> CorpusRecord -> JSON artifact
// Filesystem access is confined to tempfile directories.

use std::collections::BTreeSet;
use std::fs;

use distant_reading::analysis::overlap::compare_texts;
use distant_reading::corpus::document::{discover_documents, RawDocument};
use distant_reading::models::Classification;
use distant_reading::pipeline::context::AnalysisContext;
use distant_reading::pipeline::corpus::{
    analyze_corpus, build_corpus_record, read_corpus, write_corpus,
};
use distant_reading::pipeline::document::analyze_document;

fn gutenberg(header: &str, body: &str) -> String {
    format!(
        "{header}\n\n*** START OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\n{body}\n\n\
         *** END OF THE PROJECT GUTENBERG EBOOK SAMPLE ***\n\nLicense text follows here.\n"
    )
}

const ROBOT_BODY: &str = "The robot loved the robot. The robot was happy.";

const SEA_BODY: &str = "The captain sailed the ship across the ocean. \
    The ocean was calm and the captain was proud of the ship. \
    A storm struck the ship far out on the ocean. \
    The captain steered the ship through the storm. \
    Waves crashed over the ship while the captain shouted orders. \
    At dawn the storm passed and the ocean was calm again.";

// ============================================================
// Chain: Extract -> Preprocess -> Frequencies/Sentiment/Style
// ============================================================

#[test]
fn robot_document_end_to_end() {
    let ctx = AnalysisContext::default();
    let doc = RawDocument::new("pg1", &gutenberg("Title: X\nAuthor: Y", ROBOT_BODY));
    let record = analyze_document(&ctx, &doc);

    assert_eq!(record.id, "pg1");
    assert_eq!(record.metadata.title, "X");
    assert_eq!(record.metadata.author, "Y");
    assert_eq!(record.metadata.release_date, "N/A");
    assert_eq!(record.metadata.language, "Unknown");

    let top = &record.top_words[0];
    let total = record.style_metrics.total_words;
    assert_eq!(top.word, "robot");
    assert_eq!(top.count, 3);
    assert!(
        (top.frequency - 3.0 / total as f64).abs() < 1e-12,
        "frequency {} should be 3/{total}",
        top.frequency
    );

    assert_eq!(record.sentiment.classification, Classification::Positive);
    assert!(record.sentiment.compound >= 0.05);
    assert_eq!(record.style_metrics.total_sentences, 2);
    assert_eq!(record.style_metrics.total_words_all, 9);

    // Richness is Herdan's C over the filtered stream
    let m = &record.style_metrics;
    let herdan = (m.unique_words as f64).ln() / (m.total_words as f64).ln();
    assert!(
        (m.vocabulary_richness - (herdan * 1e4).round() / 1e4).abs() < 1e-9,
        "richness {} should be ln({})/ln({})",
        m.vocabulary_richness,
        m.unique_words,
        m.total_words
    );

    // Boilerplate after the end marker never reaches the token stream
    assert!(!record.word_frequencies.contains_key("license"));
}

#[test]
fn document_without_markers_still_produces_record() {
    let ctx = AnalysisContext::default();
    let doc = RawDocument::new(
        "pg2",
        "Title: Emma\nAuthor: Jane Austen\n\nEmma Woodhouse was handsome, clever, and rich.",
    );
    let record = analyze_document(&ctx, &doc);

    assert_eq!(record.metadata.title, "Emma");
    assert_eq!(record.metadata.author, "Jane Austen");
    assert!(record.word_frequencies.contains_key("woodhouse"));
    // Header labels are not part of the body
    assert!(!record.word_frequencies.contains_key("title"));
    assert!(!record.word_frequencies.contains_key("author"));
}

#[test]
fn empty_document_degrades_to_defaults() {
    let ctx = AnalysisContext::default();
    let record = analyze_document(&ctx, &RawDocument::new("pg3", ""));

    assert_eq!(record.metadata.title, "Unknown");
    assert!(record.top_words.is_empty());
    assert!(record.word_frequencies.is_empty());
    assert!(record.topics.is_empty());
    assert_eq!(record.style_metrics.total_sentences, 0);
    assert_eq!(record.style_metrics.type_token_ratio, 0.0);
    assert_eq!(record.style_metrics.avg_sentence_length, 0.0);
    assert_eq!(record.sentiment.classification, Classification::Neutral);
    assert_eq!(record.sentiment.sentence_sentiments.mean, 0.0);
}

// ============================================================
// Record invariants
// ============================================================

#[test]
fn frequency_table_sums_to_filtered_token_count() {
    let ctx = AnalysisContext::default();
    let record = analyze_document(&ctx, &RawDocument::new("pg4", &gutenberg("", SEA_BODY)));

    let sum: u64 = record.word_frequencies.values().sum();
    assert_eq!(sum as usize, record.style_metrics.total_words);
    assert_eq!(
        record.word_frequencies.len(),
        record.style_metrics.unique_words
    );
}

#[test]
fn top_words_are_ordered_and_consistent_with_table() {
    let ctx = AnalysisContext::default();
    let record = analyze_document(&ctx, &RawDocument::new("pg5", &gutenberg("", SEA_BODY)));

    assert!(record.top_words.len() <= 50);
    assert_eq!(
        record.top_words.len(),
        record.word_frequencies.len().min(50)
    );
    for pair in record.top_words.windows(2) {
        assert!(
            pair[0].count >= pair[1].count,
            "{} ({}) listed before {} ({})",
            pair[0].word,
            pair[0].count,
            pair[1].word,
            pair[1].count
        );
    }
    for w in &record.top_words {
        assert_eq!(record.word_frequencies.get(&w.word), Some(&w.count));
    }
}

#[test]
fn scores_stay_in_bounds() {
    let ctx = AnalysisContext::default();
    for body in [ROBOT_BODY, SEA_BODY, "Terrible, awful, horrible day!!!"] {
        let record = analyze_document(&ctx, &RawDocument::new("pg6", &gutenberg("", body)));
        let s = &record.sentiment;
        assert!((-1.0..=1.0).contains(&s.compound));
        assert!(
            (s.positive + s.negative + s.neutral - 1.0).abs() < 0.01,
            "proportions should sum to ~1, got {} {} {}",
            s.positive,
            s.negative,
            s.neutral
        );
        assert!((0.0..=1.0).contains(&record.style_metrics.type_token_ratio));
        assert!(s.sentence_sentiments.std >= 0.0);
    }
}

#[test]
fn topics_have_expected_shape() {
    let ctx = AnalysisContext::default();
    let record = analyze_document(&ctx, &RawDocument::new("pg7", &gutenberg("", SEA_BODY)));

    assert_eq!(record.topics.len(), 3);
    for (i, topic) in record.topics.iter().enumerate() {
        assert_eq!(topic.topic_id, i + 1);
        assert!(!topic.words.is_empty());
        assert!(topic.words.len() <= 8);
        for w in &topic.words {
            assert!(
                record.word_frequencies.contains_key(w),
                "topic word {w} should be a filtered token"
            );
        }
    }
}

#[test]
fn repeated_runs_are_identical_except_timestamp() {
    let ctx = AnalysisContext::default();
    let doc = RawDocument::new("pg8", &gutenberg("Title: Sea", SEA_BODY));

    let a = build_corpus_record(vec![analyze_document(&ctx, &doc)]).unwrap();
    let b = build_corpus_record(vec![analyze_document(&ctx, &doc)]).unwrap();

    let a_json = serde_json::to_value(&a.texts).unwrap();
    let b_json = serde_json::to_value(&b.texts).unwrap();
    assert_eq!(a_json, b_json);
}

// ============================================================
// Artifact schema
// ============================================================

fn keys(value: &serde_json::Value) -> BTreeSet<&str> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect()
}

fn set(names: &[&'static str]) -> BTreeSet<&'static str> {
    names.iter().copied().collect()
}

#[test]
fn artifact_has_exact_field_names() {
    let ctx = AnalysisContext::default();
    let doc = RawDocument::new("pg9", &gutenberg("Title: Sea", SEA_BODY));
    let record = build_corpus_record(vec![analyze_document(&ctx, &doc)]).unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(keys(&json), set(&["corpus_info", "texts"]));
    assert_eq!(
        keys(&json["corpus_info"]),
        set(&["total_texts", "generated_at"])
    );

    let text = &json["texts"][0];
    assert_eq!(
        keys(text),
        set(&[
            "id",
            "metadata",
            "top_words",
            "word_frequencies",
            "sentiment",
            "style_metrics",
            "topics",
        ])
    );
    assert_eq!(
        keys(&text["metadata"]),
        set(&["title", "author", "release_date", "language"])
    );
    assert_eq!(
        keys(&text["top_words"][0]),
        set(&["word", "count", "frequency"])
    );
    assert_eq!(
        keys(&text["sentiment"]),
        set(&[
            "compound",
            "positive",
            "negative",
            "neutral",
            "classification",
            "sentence_sentiments",
        ])
    );
    assert_eq!(
        keys(&text["sentiment"]["sentence_sentiments"]),
        set(&["mean", "std"])
    );
    assert_eq!(
        keys(&text["style_metrics"]),
        set(&[
            "type_token_ratio",
            "vocabulary_richness",
            "unique_words",
            "total_words",
            "unique_words_all",
            "total_words_all",
            "avg_word_length",
            "avg_sentence_length",
            "total_sentences",
        ])
    );
    assert_eq!(keys(&text["topics"][0]), set(&["topic_id", "words"]));

    let classification = text["sentiment"]["classification"].as_str().unwrap();
    assert!(["positive", "negative", "neutral"].contains(&classification));
    assert_eq!(json["corpus_info"]["total_texts"], 1);
}

// ============================================================
// Corpus run: discover -> analyze -> write -> read
// ============================================================

#[test]
fn corpus_run_writes_readable_artifact() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("pg2.txt"),
        gutenberg("Title: Sea", SEA_BODY),
    )
    .unwrap();
    fs::write(
        dir.path().join("pg1.txt"),
        gutenberg("Title: X\nAuthor: Y", ROBOT_BODY),
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not part of the corpus").unwrap();

    let paths = discover_documents(dir.path(), "pg").unwrap();
    assert_eq!(paths.len(), 2);

    let ctx = AnalysisContext::default();
    let record = analyze_corpus(&ctx, &paths).unwrap();
    let ids: Vec<&str> = record.texts.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["pg1", "pg2"]);
    assert_eq!(record.corpus_info.total_texts, 2);

    let out = dir.path().join("out").join("corpus_analysis.json");
    write_corpus(&record, &out).unwrap();
    let raw = fs::read_to_string(&out).unwrap();
    assert!(raw.starts_with("{\n  \"corpus_info\""));

    let loaded = read_corpus(&out).unwrap();
    assert_eq!(loaded.corpus_info.total_texts, 2);
    assert_eq!(loaded.texts[0].metadata.title, "X");
    assert_eq!(loaded.texts[1].word_frequencies, record.texts[1].word_frequencies);
    assert_eq!(loaded.texts[1].topics, record.texts[1].topics);
    assert_eq!(
        loaded.texts[0].sentiment.classification,
        Classification::Positive
    );
}

#[test]
fn non_ascii_metadata_written_unescaped() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = AnalysisContext::default();
    let doc = RawDocument::new(
        "pg10",
        &gutenberg("Title: Les Misérables\nAuthor: Victor Hugo", ROBOT_BODY),
    );
    let record = build_corpus_record(vec![analyze_document(&ctx, &doc)]).unwrap();
    let out = dir.path().join("a.json");
    write_corpus(&record, &out).unwrap();

    let raw = fs::read_to_string(&out).unwrap();
    assert!(raw.contains("Les Misérables"));
}

// ============================================================
// Record comparison
// ============================================================

#[test]
fn overlap_between_records_is_symmetric() {
    let ctx = AnalysisContext::default();
    let a = analyze_document(&ctx, &RawDocument::new("pg1", &gutenberg("", ROBOT_BODY)));
    let b = analyze_document(
        &ctx,
        &RawDocument::new("pg2", &gutenberg("", "The robot sailed the ocean with the captain.")),
    );

    let ab = compare_texts(&a, &b);
    let ba = compare_texts(&b, &a);
    assert_eq!(ab.shared, ba.shared);
    assert_eq!(ab.union, ba.union);
    assert!((ab.jaccard - ba.jaccard).abs() < 1e-12);
    assert!(ab.shared_words.contains(&"robot".to_string()));
    assert_eq!(
        ab.union,
        a.word_frequencies.len() + b.word_frequencies.len() - ab.shared
    );
}
