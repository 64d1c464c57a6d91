//! Lexicon-based sentiment scoring.
//!
//! This module provides [`SentimentScorer`], a small self-contained scorer
//! that labels each message Positive, Negative, or Neutral. It uses an
//! embedded valence lexicon of everyday chat words plus a short negation
//! window, so scoring needs no model files and no network access.
//!
//! # Example
//!
//! ```rust
//! use chatscope::record::Sentiment;
//! use chatscope::sentiment::SentimentScorer;
//!
//! let scorer = SentimentScorer::new();
//!
//! assert_eq!(scorer.classify("this is great, I love it"), Sentiment::Positive);
//! assert_eq!(scorer.classify("what a terrible day"), Sentiment::Negative);
//! assert_eq!(scorer.classify("see you at 5"), Sentiment::Neutral);
//! ```

use std::collections::HashMap;

use crate::record::Sentiment;

/// Valence entries in AFINN style: integer scores in `[-5, 5]`.
const LEXICON: &[(&str, i8)] = &[
    // Positive
    ("amazing", 4), ("awesome", 4), ("beautiful", 3), ("best", 3), ("better", 2),
    ("blessed", 2), ("brilliant", 4), ("calm", 2), ("celebrate", 3), ("cheers", 2),
    ("comfortable", 2), ("congrats", 2), ("congratulations", 2), ("cool", 1), ("cute", 2),
    ("delicious", 3), ("delight", 3), ("delighted", 3), ("easy", 1), ("enjoy", 2),
    ("enjoyed", 2), ("excellent", 3), ("excited", 3), ("exciting", 3), ("fabulous", 4),
    ("fantastic", 4), ("favorite", 2), ("fine", 2), ("free", 1), ("friendly", 2),
    ("fun", 4), ("funny", 4), ("generous", 2), ("glad", 3), ("good", 3),
    ("gorgeous", 3), ("grateful", 3), ("great", 3), ("greatest", 3), ("haha", 3),
    ("happy", 3), ("hehe", 2), ("helpful", 2), ("hilarious", 3), ("hope", 2),
    ("hopefully", 2), ("hug", 2), ("hugs", 2), ("impressed", 3), ("impressive", 3),
    ("interesting", 2), ("joy", 3), ("kind", 2), ("laugh", 2), ("like", 2),
    ("liked", 2), ("likes", 2), ("lol", 3), ("lmao", 4), ("love", 3),
    ("loved", 3), ("lovely", 3), ("loves", 3), ("lucky", 3), ("nice", 3),
    ("ok", 1), ("okay", 1), ("peace", 2), ("perfect", 3), ("pleasant", 3),
    ("pleased", 3), ("pleasure", 3), ("proud", 2), ("rofl", 4), ("safe", 1),
    ("smart", 1), ("smile", 2), ("strong", 2), ("stunning", 4), ("super", 3),
    ("sweet", 2), ("thank", 2), ("thankful", 2), ("thanks", 2), ("thx", 2),
    ("welcome", 2), ("win", 4), ("winner", 4), ("winning", 4), ("won", 3),
    ("wonderful", 4), ("wow", 4), ("yay", 2), ("yeah", 1), ("yes", 1),
    ("yummy", 3),
    // Negative
    ("afraid", -2), ("angry", -3), ("annoyed", -2), ("annoying", -2), ("anxious", -2),
    ("awful", -3), ("bad", -3), ("bored", -2), ("boring", -3), ("broke", -1),
    ("broken", -1), ("cancelled", -1), ("crap", -3), ("crashed", -2), ("crazy", -2),
    ("cry", -1), ("crying", -2), ("damn", -4), ("dead", -3), ("death", -2),
    ("delayed", -1), ("die", -3), ("difficult", -1), ("dirty", -2), ("disappointed", -2),
    ("disappointing", -2), ("disaster", -2), ("disgusting", -3), ("doubt", -1), ("dumb", -3),
    ("expensive", -2), ("fail", -2), ("failed", -2), ("failure", -2), ("fake", -3),
    ("fear", -2), ("fight", -1), ("gross", -2), ("hate", -3), ("hated", -3),
    ("hates", -3), ("hell", -4), ("horrible", -3), ("hurt", -2), ("hurts", -2),
    ("idiot", -3), ("ignored", -2), ("ill", -2), ("issue", -2), ("issues", -2),
    ("late", -1), ("liar", -3), ("lie", -2), ("lies", -2), ("lonely", -2),
    ("lose", -3), ("loser", -3), ("losing", -3), ("lost", -3), ("mad", -3),
    ("meh", -1), ("mess", -2), ("miss", -2), ("missed", -2), ("missing", -2),
    ("nasty", -3), ("nervous", -2), ("pain", -2), ("painful", -2), ("panic", -3),
    ("poor", -2), ("problem", -2), ("problems", -2), ("regret", -2), ("ruined", -2),
    ("sad", -2), ("scam", -2), ("scared", -2), ("sick", -2), ("sorry", -1),
    ("stressed", -2), ("stupid", -2), ("suck", -3), ("sucks", -3), ("terrible", -3),
    ("tired", -2), ("trouble", -2), ("ugh", -2), ("ugly", -3), ("unfortunate", -2),
    ("unfortunately", -2), ("unhappy", -2), ("upset", -2), ("useless", -2), ("waste", -1),
    ("wasted", -2), ("weird", -1), ("worried", -3), ("worry", -3), ("worse", -3),
    ("worst", -3), ("wrong", -2), ("wtf", -4),
];

/// Words that flip the valence of the next two tokens.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "can't", "cant", "don't", "dont",
    "doesn't", "doesnt", "didn't", "didnt", "isn't", "isnt", "wasn't", "wasnt", "aren't", "arent",
    "weren't", "werent", "won't", "wont", "wouldn't", "wouldnt", "couldn't", "couldnt",
    "shouldn't", "shouldnt", "ain't", "aint", "hardly", "barely",
];

/// Labels message text with a sentiment.
///
/// The scorer averages the valence of every lexicon word in the text, with
/// a two-token negation window ("not good" scores like "bad"). Texts with
/// no lexicon word at all score exactly `0.0` and classify as
/// [`Neutral`](Sentiment::Neutral).
///
/// Construction builds the lookup table once; clone or reuse the scorer
/// across messages rather than rebuilding it per call.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Creates a scorer with the embedded lexicon.
    pub fn new() -> Self {
        let lexicon = LEXICON
            .iter()
            .map(|&(word, score)| (word, f64::from(score) / 5.0))
            .collect();
        Self { lexicon }
    }

    /// Computes the polarity of a text in `[-1, 1]`.
    ///
    /// The result is the mean valence of matched lexicon words, `0.0` when
    /// nothing matches.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negation_window = 0u8;

        for token in tokenize(text) {
            if NEGATIONS.contains(&token.as_str()) {
                negation_window = 2;
                continue;
            }
            if let Some(&valence) = self.lexicon.get(token.as_str()) {
                total += if negation_window > 0 { -valence } else { valence };
                matched += 1;
            }
            negation_window = negation_window.saturating_sub(1);
        }

        if matched == 0 {
            0.0
        } else {
            total / matched as f64
        }
    }

    /// Classifies a text by the sign of its polarity.
    pub fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

/// Lowercases and splits on anything that is not a letter, digit, or
/// apostrophe, normalizing curly apostrophes so "don’t" negates.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '\u{2019}')
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase().replace('\u{2019}', "'"))
}
