// Rule-based noun lemmatizer in the style of WordNet's morphy.
//
// Without a dictionary to validate candidates, the suffix rules are guarded
// by an exception table (irregular plurals) and a list of words that merely
// end in "s". Verbs and adjectives pass through unchanged, matching a noun
// lemmatizer's default behavior.

use std::collections::HashMap;

use super::traits::Lemmatizer;

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("gentlemen", "gentleman"),
    ("gentlewomen", "gentlewoman"),
    ("horsemen", "horseman"),
    ("fishermen", "fisherman"),
    ("countrymen", "countryman"),
    ("noblemen", "nobleman"),
    ("clergymen", "clergyman"),
    ("workmen", "workman"),
    ("seamen", "seaman"),
    ("footmen", "footman"),
    ("policemen", "policeman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("brethren", "brother"),
    ("wives", "wife"),
    ("lives", "life"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("wolves", "wolf"),
    ("calves", "calf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("selves", "self"),
    ("thieves", "thief"),
    ("sheaves", "sheaf"),
    ("elves", "elf"),
    ("dwarves", "dwarf"),
    ("scarves", "scarf"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("oases", "oasis"),
    ("headaches", "headache"),
    ("moustaches", "moustache"),
    ("mustaches", "mustache"),
    ("niches", "niche"),
    ("cliches", "cliche"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("volcanoes", "volcano"),
    ("mosquitoes", "mosquito"),
    ("torpedoes", "torpedo"),
    ("vetoes", "veto"),
];

/// Words that end in "s" but are already in canonical form, including
/// third-person verb forms whose stem would not be a word.
const INVARIANT: &[&str] = &[
    "goes",
    "does",
    "undergoes",
    "forgoes",
    "foregoes",
    "always",
    "perhaps",
    "towards",
    "afterwards",
    "besides",
    "sometimes",
    "whereas",
    "unless",
    "news",
    "series",
    "species",
    "means",
    "politics",
    "economics",
    "physics",
    "mathematics",
    "lens",
    "alms",
    "riches",
    "thanks",
    "measles",
    "clothes",
    "scissors",
    "trousers",
    "summons",
    "innings",
    "headquarters",
    "whereabouts",
    "nowadays",
    "upwards",
    "downwards",
    "backwards",
    "forwards",
    "nevertheless",
    "christmas",
    "athens",
    "paris",
];

/// WordNet-style noun lemmatizer.
pub struct MorphyLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
}

impl Default for MorphyLemmatizer {
    fn default() -> Self {
        let mut irregular: HashMap<&'static str, &'static str> =
            IRREGULAR.iter().copied().collect();
        for &word in INVARIANT {
            irregular.insert(word, word);
        }
        Self { irregular }
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return lemma.to_string();
        }
        detach_suffix(word).unwrap_or_else(|| word.to_string())
    }
}

/// Apply the first matching plural-detachment rule, if any.
fn detach_suffix(word: &str) -> Option<String> {
    // Short words ("bus", "gas", "yes") are never treated as plurals
    if word.chars().count() <= 3 || !word.ends_with('s') {
        return None;
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        // "stories" -> "story", but "ties"/"lies" -> "tie"/"lie"
        return if stem.chars().count() > 1 {
            Some(format!("{stem}y"))
        } else {
            word.strip_suffix('s').map(str::to_string)
        };
    }

    let stem = if ["sses", "ches", "shes", "xes", "zzes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        word.strip_suffix("es")
    } else {
        word.strip_suffix('s')
    };
    stem.map(str::to_string)
}
