// Lexicon-based polarity scorer.
//
// Each polar word carries a weight in [-1, 1]. An intensifier scales the next
// polar word, a negator flips it and halves its strength ("not good" is mildly
// negative, not the opposite of "good"). Modifiers expire at the next polar
// word or clause punctuation. The score is the mean over polar words, clamped
// and rounded to 3 decimals.

use std::collections::HashMap;

use super::traits::SentimentScorer;
use crate::text::{is_punctuation, tokenize};

const NEGATION_FACTOR: f64 = -0.5;

const POSITIVE: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("positive", 0.4),
    ("success", 0.6),
    ("successful", 0.7),
    ("win", 0.6),
    ("wins", 0.6),
    ("won", 0.5),
    ("victory", 0.6),
    ("gain", 0.4),
    ("gains", 0.4),
    ("growth", 0.4),
    ("improve", 0.5),
    ("improved", 0.5),
    ("improvement", 0.5),
    ("strong", 0.4),
    ("stronger", 0.4),
    ("support", 0.3),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("happy", 0.8),
    ("celebrate", 0.6),
    ("celebrated", 0.6),
    ("praise", 0.6),
    ("praised", 0.6),
    ("benefit", 0.4),
    ("benefits", 0.4),
    ("safe", 0.5),
    ("secure", 0.4),
    ("peace", 0.5),
    ("peaceful", 0.6),
    ("agreement", 0.3),
    ("boost", 0.4),
    ("recovery", 0.4),
    ("progress", 0.4),
    ("effective", 0.6),
    ("historic", 0.3),
    ("landmark", 0.3),
    ("welcome", 0.5),
    ("welcomed", 0.5),
    ("love", 0.5),
    ("thrilled", 0.8),
    ("optimistic", 0.6),
    ("remarkable", 0.7),
    ("impressive", 0.8),
    ("fair", 0.5),
    ("honest", 0.6),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.6),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("poor", -0.4),
    ("negative", -0.3),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("loss", -0.4),
    ("losses", -0.4),
    ("lose", -0.4),
    ("lost", -0.4),
    ("crisis", -0.6),
    ("attack", -0.6),
    ("attacks", -0.6),
    ("killed", -0.8),
    ("kill", -0.8),
    ("dead", -0.6),
    ("death", -0.6),
    ("deadly", -0.8),
    ("violence", -0.7),
    ("violent", -0.8),
    ("war", -0.6),
    ("threat", -0.5),
    ("threats", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("angry", -0.6),
    ("anger", -0.6),
    ("outrage", -0.7),
    ("scandal", -0.6),
    ("corrupt", -0.8),
    ("corruption", -0.7),
    ("fraud", -0.7),
    ("chaos", -0.7),
    ("collapse", -0.7),
    ("decline", -0.4),
    ("weak", -0.4),
    ("dangerous", -0.6),
    ("danger", -0.6),
    ("disaster", -0.8),
    ("criticism", -0.4),
    ("criticized", -0.4),
    ("condemn", -0.6),
    ("condemned", -0.6),
    ("wrong", -0.5),
    ("unfair", -0.5),
    ("sad", -0.5),
    ("hate", -0.8),
    ("controversial", -0.3),
    ("worried", -0.5),
    ("concern", -0.3),
    ("concerns", -0.3),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("deeply", 1.3),
    ("incredibly", 1.5),
    ("so", 1.2),
    ("too", 1.2),
];

const NEGATORS: &[&str] = &["not", "no", "never", "n't", "nor", "without", "hardly"];

/// Polarity scorer backed by a built-in English lexicon.
pub struct LexiconSentimentScorer {
    polarity: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentimentScorer {
    pub fn new() -> Self {
        Self {
            polarity: POSITIVE.iter().chain(NEGATIVE).copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut polar_words = 0usize;
        let mut negated = false;
        let mut intensity = 1.0;

        for token in tokenize(text) {
            if is_punctuation(&token) {
                negated = false;
                intensity = 1.0;
                continue;
            }
            if NEGATORS.contains(&token.as_str()) {
                negated = true;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token.as_str()) {
                intensity = factor;
                continue;
            }
            if let Some(&weight) = self.polarity.get(token.as_str()) {
                let mut score = (weight * intensity).clamp(-1.0, 1.0);
                if negated {
                    score *= NEGATION_FACTOR;
                }
                total += score;
                polar_words += 1;
                negated = false;
                intensity = 1.0;
            }
        }

        if polar_words == 0 {
            return 0.0;
        }

        let mean = (total / polar_words as f64).clamp(-1.0, 1.0);
        (mean * 1000.0).round() / 1000.0
    }
}
