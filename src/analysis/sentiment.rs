//! Sentiment Scoring
//!
//! Lexicon-based polarity for check-in notes. Each known word carries a
//! polarity in [-1, 1]; the score is the mean over matched words, with a
//! preceding negator flipping and damping the word's polarity.

use regex::Regex;
use std::sync::OnceLock;

/// Polarity applied to a word following a negator, as a multiplier
const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "isn't", "isnt", "wasn't", "can't", "cannot",
];

const LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("love", 0.5),
    ("excited", 0.4),
    ("productive", 0.5),
    ("calm", 0.3),
    ("fine", 0.4),
    ("proud", 0.8),
    ("motivated", 0.6),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("fun", 0.3),
    ("supported", 0.5),
    ("better", 0.5),
    ("relaxed", 0.4),
    // negative
    ("bad", -0.7),
    ("sad", -0.5),
    ("tired", -0.4),
    ("exhausted", -0.6),
    ("drained", -0.5),
    ("overworked", -0.6),
    ("stressed", -0.7),
    ("angry", -0.5),
    ("hate", -0.8),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("toxic", -0.7),
    ("worried", -0.4),
    ("anxious", -0.5),
    ("frustrated", -0.6),
    ("ignored", -0.4),
    ("lonely", -0.5),
    ("worse", -0.4),
    ("boring", -0.6),
];

fn word_pattern() -> &'static Regex {
    static WORDS: OnceLock<Regex> = OnceLock::new();
    WORDS.get_or_init(|| Regex::new(r"[a-z']+").expect("static word pattern"))
}

fn polarity_of(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, p)| *p)
}

/// Polarity of `text` in [-1.0, 1.0]; 0.0 when no word is in the lexicon.
pub fn sentiment(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let mut total = 0.0;
    let mut matched = 0usize;
    let mut negated = false;

    for token in word_pattern().find_iter(&lowered) {
        let word = token.as_str();

        if NEGATORS.contains(&word) {
            negated = true;
            continue;
        }

        if let Some(polarity) = polarity_of(word) {
            total += if negated { polarity * NEGATION_FACTOR } else { polarity };
            matched += 1;
        }
        negated = false;
    }

    if matched == 0 {
        return 0.0;
    }

    (total / matched as f64).clamp(-1.0, 1.0)
}
