// Document bias scoring.
//
// A document's score is the mean projection of its content tokens onto the
// bias axis. Scoring never fails: missing text, all-stop-word text and text
// with no vocabulary matches all come out as a neutral 0.0, so one bad
// article can't abort a batch.

use rayon::prelude::*;
use tracing::trace;

use super::axis::BiasAxis;
use crate::embeddings::EmbeddingStore;
use crate::text::content_tokens;

/// Input to the scorer: either usable text or nothing to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentText<'a> {
    Text(&'a str),
    Empty,
}

impl<'a> DocumentText<'a> {
    /// Classify raw text; blank strings are `Empty`.
    pub fn new(text: &'a str) -> Self {
        if text.trim().is_empty() {
            DocumentText::Empty
        } else {
            DocumentText::Text(text)
        }
    }

    /// Classify optional text, as delivered by article feeds.
    pub fn from_option(text: Option<&'a str>) -> Self {
        text.map_or(DocumentText::Empty, DocumentText::new)
    }
}

impl<'a> From<&'a str> for DocumentText<'a> {
    fn from(text: &'a str) -> Self {
        DocumentText::new(text)
    }
}

/// Mean projection of the document's embeddable content tokens onto `axis`.
///
/// Deterministic for a fixed store, axis and stop-word list. Projections are
/// summed in sorted order, so reordering the tokens never changes the result.
pub fn score_document(text: DocumentText<'_>, store: &EmbeddingStore, axis: &BiasAxis) -> f64 {
    let DocumentText::Text(text) = text else {
        return 0.0;
    };

    let tokens = content_tokens(text);
    let mut projections: Vec<f64> = tokens
        .iter()
        .filter_map(|t| store.lookup(t))
        .map(|v| axis.project(v))
        .collect();

    trace!(
        tokens = tokens.len(),
        out_of_vocabulary = tokens.len() - projections.len(),
        "Filtered document tokens"
    );

    if projections.is_empty() {
        return 0.0;
    }

    projections.sort_by(f64::total_cmp);
    projections.iter().sum::<f64>() / projections.len() as f64
}

/// Score many documents in parallel. Output order matches input order.
pub fn score_batch(texts: &[&str], store: &EmbeddingStore, axis: &BiasAxis) -> Vec<f64> {
    texts
        .par_iter()
        .map(|text| score_document(DocumentText::new(text), store, axis))
        .collect()
}
