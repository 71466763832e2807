// Keyword frequency summaries over a corpus of articles.
//
// Counts how often each pole's expanded keywords occur across all documents.
// The poles are counted independently: a token in both sets counts for both.
// Ranking is by count, ties keep first-encountered order, so the same corpus
// always yields the same tables.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::text::tokenize;

/// Default number of keywords kept per pole.
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Ranked `(keyword, count)` pairs, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordCounts {
    pub entries: Vec<(String, usize)>,
}

impl KeywordCounts {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count for a keyword, if it made the ranking.
    pub fn get(&self, keyword: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, c)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

/// Top-`top_k` left and right keyword counts across `documents`.
pub fn summarize_keywords<S: AsRef<str>>(
    documents: &[S],
    left_keywords: &BTreeSet<String>,
    right_keywords: &BTreeSet<String>,
    top_k: usize,
) -> (KeywordCounts, KeywordCounts) {
    let tokens = corpus_tokens(documents);
    (
        rank(&tokens, |t| left_keywords.contains(t), top_k),
        rank(&tokens, |t| right_keywords.contains(t), top_k),
    )
}

/// Top-`top_k` counts of tokens in either keyword set, each counted once.
pub fn combined_frequencies<S: AsRef<str>>(
    documents: &[S],
    left_keywords: &BTreeSet<String>,
    right_keywords: &BTreeSet<String>,
    top_k: usize,
) -> KeywordCounts {
    let tokens = corpus_tokens(documents);
    rank(
        &tokens,
        |t| left_keywords.contains(t) || right_keywords.contains(t),
        top_k,
    )
}

fn corpus_tokens<S: AsRef<str>>(documents: &[S]) -> Vec<String> {
    documents
        .iter()
        .flat_map(|doc| tokenize(doc.as_ref()))
        .collect()
}

fn rank(tokens: &[String], matches: impl Fn(&str) -> bool, top_k: usize) -> KeywordCounts {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for token in tokens.iter().filter(|t| matches(t.as_str())) {
        match slots.get(token.as_str()) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                slots.insert(token.as_str(), order.len());
                order.push((token.clone(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(top_k);

    KeywordCounts { entries: order }
}
