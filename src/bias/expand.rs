// Anchor expansion: grow each pole's seed list through the embedding space.
//
// Every seed present in the store contributes its `topn` nearest neighbours.
// Seeds missing from the vocabulary are skipped (vocabularies differ between
// corpus versions) but the skip is logged so silent data loss shows up in
// diagnostics. Seeds are always part of the output, present or not.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::embeddings::EmbeddingStore;

/// Default neighbours pulled in per seed.
pub const DEFAULT_EXPANSION_TOPN: usize = 15;

/// Expand `seeds` to `seeds ∪ neighbours(seed, topn)` for every seed in the store.
pub fn expand_anchors<S: AsRef<str>>(
    store: &EmbeddingStore,
    seeds: &[S],
    topn: usize,
) -> BTreeSet<String> {
    let mut expanded: BTreeSet<String> = seeds.iter().map(|s| s.as_ref().to_string()).collect();
    let mut skipped = Vec::new();

    for seed in seeds {
        let seed = seed.as_ref();
        if !store.contains(seed) {
            skipped.push(seed);
            continue;
        }
        expanded.extend(store.most_similar(seed, topn).into_iter().map(|(w, _)| w));
    }

    if !skipped.is_empty() {
        warn!(
            skipped = skipped.len(),
            seeds = seeds.len(),
            "Seeds missing from embedding vocabulary"
        );
        debug!(missing = ?skipped, "Skipped seeds");
    }

    info!(
        seeds = seeds.len(),
        keywords = expanded.len(),
        topn = topn,
        "Expanded anchor seeds"
    );

    expanded
}
