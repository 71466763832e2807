// BiasModel: the immutable per-session scoring context.
//
// Bundles the embedding store with the axis and keyword sets derived from
// it. All four are built together and never swapped afterwards, so every
// document scored through one model is measured against the same axis.
// Independent models (different corpora, different seeds) can coexist.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use super::axis::{build_axis, BiasAxis};
use super::expand::{expand_anchors, DEFAULT_EXPANSION_TOPN};
use super::keywords::{combined_frequencies, summarize_keywords, KeywordCounts};
use super::scorer::{score_batch, score_document, DocumentText};
use super::seeds::{LEFT_SEEDS, RIGHT_SEEDS};
use crate::embeddings::EmbeddingStore;
use crate::error::BiasError;

/// Seeds and expansion width used to derive a model.
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    /// Nearest neighbours pulled in per seed
    pub topn: usize,
    pub left_seeds: Vec<String>,
    pub right_seeds: Vec<String>,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            topn: DEFAULT_EXPANSION_TOPN,
            left_seeds: LEFT_SEEDS.iter().map(|s| s.to_string()).collect(),
            right_seeds: RIGHT_SEEDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExpansionConfig {
    /// Default seeds with a custom expansion width.
    pub fn with_topn(topn: usize) -> Self {
        Self {
            topn,
            ..Self::default()
        }
    }
}

/// Store, axis and expanded keyword sets from one corpus snapshot.
pub struct BiasModel {
    store: Arc<EmbeddingStore>,
    axis: BiasAxis,
    left_keywords: BTreeSet<String>,
    right_keywords: BTreeSet<String>,
}

/// Expand both seed lists and derive the axis from `store`.
pub fn build_bias_model(
    store: Arc<EmbeddingStore>,
    config: &ExpansionConfig,
) -> Result<BiasModel, BiasError> {
    let left_keywords = expand_anchors(&store, &config.left_seeds, config.topn);
    let right_keywords = expand_anchors(&store, &config.right_seeds, config.topn);
    let axis = build_axis(&store, &left_keywords, &right_keywords)?;

    Ok(BiasModel {
        store,
        axis,
        left_keywords,
        right_keywords,
    })
}

impl BiasModel {
    /// Load the corpus at `path`, then build the model from it.
    pub fn load(path: &Path, config: &ExpansionConfig) -> Result<Self, BiasError> {
        let store = EmbeddingStore::load(path)?;
        build_bias_model(Arc::new(store), config)
    }

    pub fn store(&self) -> &EmbeddingStore {
        &self.store
    }

    pub fn axis(&self) -> &BiasAxis {
        &self.axis
    }

    pub fn left_keywords(&self) -> &BTreeSet<String> {
        &self.left_keywords
    }

    pub fn right_keywords(&self) -> &BTreeSet<String> {
        &self.right_keywords
    }

    /// Bias score of one document against this model's axis.
    pub fn score(&self, text: DocumentText<'_>) -> f64 {
        score_document(text, &self.store, &self.axis)
    }

    /// Bias scores for many documents, in input order.
    pub fn score_batch(&self, texts: &[&str]) -> Vec<f64> {
        score_batch(texts, &self.store, &self.axis)
    }

    /// Per-pole keyword counts across `documents`.
    pub fn summarize<S: AsRef<str>>(
        &self,
        documents: &[S],
        top_k: usize,
    ) -> (KeywordCounts, KeywordCounts) {
        summarize_keywords(documents, &self.left_keywords, &self.right_keywords, top_k)
    }

    /// Counts of any ideologically loaded keyword across `documents`.
    pub fn biased_words<S: AsRef<str>>(&self, documents: &[S], top_k: usize) -> KeywordCounts {
        combined_frequencies(documents, &self.left_keywords, &self.right_keywords, top_k)
    }
}
