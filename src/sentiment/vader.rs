// Lexicon-and-rule valence scorer (VADER rules).
//
// Each word's lexicon valence is adjusted by its neighborhood:
// - boosters/dampeners up to three words back ("very", "barely")
// - ALL-CAPS emphasis when the rest of the text isn't shouting
// - negation up to three words back ("not", "never", "-n't")
// - "least" flips valence unless it reads "at least"/"very least"
// - "but" halves what came before it and amplifies what follows
// The summed valence is boosted by `!`/`?` emphasis and squashed into
// [-1, 1]; positive/negative/neutral are proportions of the token mass.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::lexicon::Lexicon;
use super::traits::{PolarityScores, ValenceScorer};

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
/// Normalization constant: compound = x / sqrt(x² + ALPHA)
const ALPHA: f64 = 15.0;

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

static BOOSTERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let increase = [
        "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
        "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
        "exceptionally", "extreme", "extremely", "fabulously", "greatly", "highly", "hugely",
        "incredible", "incredibly", "intensely", "major", "majorly", "more", "most",
        "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
        "thoroughly", "total", "totally", "tremendous", "tremendously", "unbelievably",
        "unusually", "utter", "utterly", "very",
    ];
    let decrease = [
        "almost", "barely", "hardly", "kinda", "kindof", "less", "little", "marginal",
        "marginally", "occasional", "occasionally", "partly", "scarce", "scarcely", "slight",
        "slightly", "somewhat", "sorta", "sortof",
    ];
    increase
        .into_iter()
        .map(|w| (w, B_INCR))
        .chain(decrease.into_iter().map(|w| (w, B_DECR)))
        .collect()
});

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Strip surrounding punctuation unless that would leave two or fewer
/// characters (which keeps emoticons like ":)" intact).
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

/// Squash an unbounded valence sum into [-1, 1].
pub fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Extra emphasis from exclamation and question marks.
fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

/// Rule-based scorer over a valence lexicon.
pub struct VaderScorer {
    lexicon: Lexicon,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

/// Tokens of one text with the flags the rules need.
struct Tokens<'a> {
    words: Vec<&'a str>,
    lower: Vec<String>,
    /// Some, but not all, words are ALL CAPS
    cap_differential: bool,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        let caps = words.iter().filter(|w| is_upper(w)).count();
        Self {
            cap_differential: caps > 0 && caps < words.len(),
            words,
            lower,
        }
    }
}

impl VaderScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Booster/dampener contribution of `word` towards a neighbor with
    /// `valence`.
    fn scalar_inc_dec(&self, word: &str, lower: &str, valence: f64, cap_differential: bool) -> f64 {
        let Some(&base) = BOOSTERS.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if is_upper(word) && cap_differential {
            if valence > 0.0 {
                scalar += C_INCR;
            } else {
                scalar -= C_INCR;
            }
        }
        scalar
    }

    fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
        let back = |n: usize| lower[i - n].as_str();
        match start_i {
            0 => {
                if is_negation(back(1)) {
                    return valence * N_SCALAR;
                }
            }
            1 => {
                if back(2) == "never" && matches!(back(1), "so" | "this") {
                    return valence * 1.25;
                }
                if back(2) == "without" && back(1) == "doubt" {
                    return valence;
                }
                if is_negation(back(2)) {
                    return valence * N_SCALAR;
                }
            }
            _ => {
                if (back(3) == "never" && matches!(back(2), "so" | "this"))
                    || matches!(back(1), "so" | "this")
                {
                    return valence * 1.25;
                }
                if back(3) == "without" && (back(2) == "doubt" || back(1) == "doubt") {
                    return valence;
                }
                if is_negation(back(3)) {
                    return valence * N_SCALAR;
                }
            }
        }
        valence
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 0 && lower[i - 1] == "least" && !self.lexicon.contains("least") {
            if i > 1 && matches!(lower[i - 2].as_str(), "at" | "very") {
                return valence;
            }
            return valence * N_SCALAR;
        }
        valence
    }

    /// Valence of the word at `i` after all contextual rules.
    fn word_valence(&self, tokens: &Tokens<'_>, i: usize) -> f64 {
        let lower = &tokens.lower;
        let item = lower[i].as_str();
        let Some(base) = self.lexicon.get(item) else {
            return 0.0;
        };

        let mut valence = base;

        // "no" directly before another sentiment word is a negator, not a sentiment
        if item == "no" && i + 1 < lower.len() && self.lexicon.contains(&lower[i + 1]) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(tokens.words[i]) && tokens.cap_differential {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i <= start_i {
                break;
            }
            let j = i - (start_i + 1);
            if self.lexicon.contains(&lower[j]) {
                continue;
            }
            let mut s =
                self.scalar_inc_dec(tokens.words[j], &lower[j], valence, tokens.cap_differential);
            if start_i == 1 {
                s *= 0.95;
            } else if start_i == 2 {
                s *= 0.9;
            }
            valence += s;
            valence = Self::negation_check(valence, lower, start_i, i);
        }

        self.least_check(valence, lower, i)
    }

    /// Per-token valences, with booster words contributing zero.
    fn sentiments(&self, tokens: &Tokens<'_>) -> Vec<f64> {
        let lower = &tokens.lower;
        let mut sentiments: Vec<f64> = (0..lower.len())
            .map(|i| {
                let item = lower[i].as_str();
                if BOOSTERS.contains_key(item) {
                    return 0.0;
                }
                if item == "kind" && lower.get(i + 1).is_some_and(|n| n == "of") {
                    return 0.0;
                }
                self.word_valence(tokens, i)
            })
            .collect();

        // Contrast: "but" shifts weight to the clause after it
        if let Some(but) = lower.iter().position(|w| w == "but") {
            for (i, s) in sentiments.iter_mut().enumerate() {
                if i < but {
                    *s *= 0.5;
                } else if i > but {
                    *s *= 1.5;
                }
            }
        }
        sentiments
    }
}

impl ValenceScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let tokens = Tokens::new(text);
        let sentiments = self.sentiments(&tokens);
        if sentiments.is_empty() {
            return PolarityScores::neutral();
        }

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut pos_sum = 0.0;
        let mut neg_sum = 0.0;
        let mut neu_count = 0.0;
        for &s in &sentiments {
            if s > 0.0 {
                // +1 compensates for neutral words counted as 1
                pos_sum += s + 1.0;
            } else if s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        PolarityScores {
            compound: round_to(compound, 4),
            positive: round_to((pos_sum / total).abs(), 3),
            negative: round_to((neg_sum / total).abs(), 3),
            neutral: round_to((neu_count / total).abs(), 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> PolarityScores {
        VaderScorer::default().polarity_scores(text)
    }

    #[test]
    fn test_positive_text() {
        let s = score("The robot loved the robot. The robot was happy.");
        // loved 2.9 + happy 2.7 = 5.6 -> 5.6 / sqrt(5.6² + 15)
        assert!((s.compound - 0.8225).abs() < 1e-3, "got {}", s.compound);
        assert!(s.positive > 0.0);
        assert_eq!(s.negative, 0.0);
    }

    #[test]
    fn test_negation_flips() {
        assert!(score("She was happy.").compound > 0.0);
        assert!(score("She was not happy.").compound < 0.0);
    }

    #[test]
    fn test_booster_increases() {
        assert!(score("It was very good.").compound > score("It was good.").compound);
        assert!(score("It was barely good.").compound < score("It was good.").compound);
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(score("It was GOOD today").compound > score("It was good today").compound);
    }

    #[test]
    fn test_exclamation_emphasis() {
        assert!(score("What a good day!!").compound > score("What a good day").compound);
    }

    #[test]
    fn test_but_shifts_weight() {
        let s = score("The food was good but the service was terrible.");
        assert!(s.compound < 0.0, "got {}", s.compound);
    }

    #[test]
    fn test_least_handling() {
        assert!(score("It was at least good").compound > 0.0);
        assert!(score("It was the least good").compound < 0.0);
    }

    #[test]
    fn test_neutral_and_empty() {
        let s = score("The table stood in the hall.");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
        assert_eq!(score(""), PolarityScores::neutral());
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let s = score("I love the garden but I hate the rain and the cold wind.");
        let sum = s.positive + s.negative + s.neutral;
        assert!((sum - 1.0).abs() < 0.01, "sum {sum}");
    }

    #[test]
    fn test_compound_bounded() {
        let text = "love ".repeat(500);
        let s = score(&text);
        assert!(s.compound <= 1.0 && s.compound > 0.99);
    }
}
