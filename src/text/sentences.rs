// Punctuation-based sentence segmentation.
//
// A sentence ends at a run of `.`, `!` or `?` (plus any closing quotes or
// brackets) that is followed by whitespace, unless the period belongs to a
// known abbreviation or a name initial, or the next word starts lowercase.
// Line breaks alone never end a sentence.

use std::collections::HashSet;
use std::sync::LazyLock;

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "capt", "col", "gen", "lt",
        "sgt", "hon", "messrs", "mme", "mlle", "esq", "viz", "cf", "vs",
    ]
    .into_iter()
    .collect()
});

// Abbreviations only when a number follows: "No. 7", "Vol. 2", "Ch. 12"
const NUMBERED_ABBREVIATIONS: &[&str] = &["no", "nos", "vol", "ch", "pp"];

// Capitalized words that usually open a sentence rather than continue a name
static SENTENCE_OPENERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "and", "as", "at", "but", "for", "he", "her", "his", "how", "i", "if", "in",
        "it", "its", "my", "no", "not", "now", "of", "on", "once", "one", "our", "she", "so",
        "that", "the", "their", "then", "there", "these", "they", "this", "those", "to", "we",
        "what", "when", "where", "which", "while", "who", "why", "yes", "you", "your",
    ]
    .into_iter()
    .collect()
});

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}' | '_')
}

/// The word after a candidate boundary, with trailing punctuation kept.
fn next_word(rest: &[(usize, char)]) -> String {
    rest.iter()
        .map(|&(_, c)| c)
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| !c.is_whitespace())
        .collect()
}

/// "R." in "J. R. Smith"
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}

/// Whether the period after `prefix` belongs to an abbreviation or an
/// initial, given the word that follows it.
fn ends_with_abbreviation(prefix: &str, following: &str) -> bool {
    let Some(word) = prefix.split_whitespace().last() else {
        return false;
    };
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        // The pronoun ends sentences; other capitals are initials only
        // when a name continues after them
        if !first.is_uppercase() || word == "I" {
            return false;
        }
        return continues_name(following);
    }

    let lower = word.to_lowercase();
    if NUMBERED_ABBREVIATIONS.contains(&lower.as_str()) {
        return following.starts_with(|c: char| c.is_ascii_digit());
    }
    ABBREVIATIONS.contains(lower.as_str())
}

fn continues_name(following: &str) -> bool {
    if is_initial(following) {
        return true;
    }
    let bare = following.trim_matches(|c: char| !c.is_alphanumeric());
    bare.starts_with(char::is_uppercase)
        && !SENTENCE_OPENERS.contains(bare.to_lowercase().as_str())
}

fn next_word_is_lowercase(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace())
        .is_some_and(|c| c.is_lowercase())
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

/// Split text into sentences with internal whitespace collapsed.
/// Blank input yields no sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && (is_terminator(chars[j].1) || is_closing(chars[j].1)) {
            j += 1;
        }

        let followed_by_space = chars.get(j).is_some_and(|&(_, n)| n.is_whitespace());
        let following = next_word(&chars[j..]);
        let boundary = followed_by_space
            && !(c == '.' && ends_with_abbreviation(&text[start..pos], &following))
            && !next_word_is_lowercase(&chars[j..]);

        if boundary {
            let end = chars[j].0;
            push_sentence(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }

    push_sentence(&mut sentences, &text[start..]);
    sentences
}
