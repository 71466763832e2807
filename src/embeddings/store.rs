// Read-only word embedding store backed by a pretrained GloVe corpus.
//
// The corpus is a word2vec-style text file: an optional "<count> <dim>"
// header, then one "<word> <f32> <f32> ..." row per vocabulary entry. All
// vectors live in one row-major buffer with precomputed norms so the exact
// nearest-neighbour scan over the whole vocabulary stays a tight loop.
//
// The store is built once per process and never mutated afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::error::BiasError;

/// Origin label used in errors for stores built from in-memory entries.
const IN_MEMORY: &str = "<in-memory>";

/// Immutable vocabulary -> vector lookup.
pub struct EmbeddingStore {
    dim: usize,
    words: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<f32>,
    norms: Vec<f32>,
}

impl EmbeddingStore {
    /// Load a corpus file. Files ending in `.gz` are decompressed on the fly.
    pub fn load(path: &Path) -> Result<Self, BiasError> {
        let origin = path.display().to_string();

        if !path.exists() {
            return Err(BiasError::load(
                origin,
                "file not found. Run `slant download-model` to fetch the embedding corpus",
            ));
        }

        let file = File::open(path).map_err(|e| BiasError::load(&origin, e.to_string()))?;
        let is_gzip = path.extension().is_some_and(|ext| ext == "gz");

        let store = if is_gzip {
            Self::from_reader(BufReader::with_capacity(1 << 20, GzDecoder::new(file)), &origin)?
        } else {
            Self::from_reader(BufReader::with_capacity(1 << 20, file), &origin)?
        };

        info!(
            words = store.len(),
            dim = store.dim(),
            path = %origin,
            "Loaded embedding store"
        );

        Ok(store)
    }

    /// Parse a corpus from any buffered reader. `origin` names the source in errors.
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self, BiasError> {
        let mut builder = StoreBuilder::default();
        let mut row: Vec<f32> = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                BiasError::load(origin, format!("read failed at line {}: {e}", line_no + 1))
            })?;

            // Fields are separated by ASCII spaces only; words may contain
            // other whitespace such as U+00A0.
            let line = line.trim_end_matches([' ', '\r']);
            let mut parts = line.split(' ').filter(|s| !s.is_empty());
            let Some(word) = parts.next() else {
                continue;
            };

            row.clear();
            for value in parts {
                let parsed: f32 = value.parse().map_err(|_| {
                    BiasError::load(
                        origin,
                        format!("invalid number {value:?} at line {}", line_no + 1),
                    )
                })?;
                row.push(parsed);
            }

            // word2vec header: "<vocab size> <dim>"
            if line_no == 0 && row.len() == 1 && word.parse::<usize>().is_ok() {
                let dim = row[0] as usize;
                if dim == 0 || row[0].fract() != 0.0 {
                    return Err(BiasError::load(origin, format!("invalid header: {line:?}")));
                }
                builder.dim = Some(dim);
                continue;
            }

            builder
                .push(word, &row)
                .map_err(|reason| BiasError::load(origin, format!("line {}: {reason}", line_no + 1)))?;
        }

        builder.finish(origin)
    }

    /// Build a store from in-memory `(word, vector)` entries.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, BiasError>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: AsRef<str>,
    {
        let mut builder = StoreBuilder::default();
        for (word, vector) in entries {
            builder
                .push(word.as_ref(), &vector)
                .map_err(|reason| BiasError::load(IN_MEMORY, reason))?;
        }
        builder.finish(IN_MEMORY)
    }

    /// Vector width.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of vocabulary entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The vector for `word`, if it is in the vocabulary.
    pub fn lookup(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&i| self.row(i))
    }

    /// The `topn` vocabulary entries closest to `word` by cosine similarity.
    ///
    /// Exact scan over the full vocabulary. The query word itself is never
    /// returned; equal similarities keep vocabulary order. Returns an empty
    /// list for out-of-vocabulary words.
    pub fn most_similar(&self, word: &str, topn: usize) -> Vec<(String, f32)> {
        let Some(&query) = self.index.get(word) else {
            return Vec::new();
        };
        let query_norm = self.norms[query];
        if topn == 0 || query_norm == 0.0 {
            return Vec::new();
        }

        let q = self.row(query);
        let mut scored: Vec<(usize, f32)> = (0..self.len())
            .filter(|&i| i != query && self.norms[i] > 0.0)
            .map(|i| (i, dot_f32(self.row(i), q) / (self.norms[i] * query_norm)))
            .collect();

        let by_rank = |a: &(usize, f32), b: &(usize, f32)| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0));

        if scored.len() > topn {
            scored.select_nth_unstable_by(topn - 1, by_rank);
            scored.truncate(topn);
        }
        scored.sort_by(by_rank);

        debug!(word = word, neighbours = scored.len(), "Ranked nearest neighbours");

        scored
            .into_iter()
            .map(|(i, sim)| (self.words[i].clone(), sim))
            .collect()
    }

    fn row(&self, i: usize) -> &[f32] {
        &self.vectors[i * self.dim..(i + 1) * self.dim]
    }
}

/// Accumulates rows and enforces a single vector width.
#[derive(Default)]
struct StoreBuilder {
    dim: Option<usize>,
    words: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<f32>,
    norms: Vec<f32>,
}

impl StoreBuilder {
    fn push(&mut self, word: &str, vector: &[f32]) -> Result<(), String> {
        if vector.is_empty() {
            return Err(format!("word {word:?} has no vector components"));
        }
        let dim = *self.dim.get_or_insert(vector.len());
        if vector.len() != dim {
            return Err(format!(
                "word {word:?} has {} components, expected {dim}",
                vector.len()
            ));
        }

        // First occurrence wins
        if self.index.contains_key(word) {
            return Ok(());
        }

        self.index.insert(word.to_string(), self.words.len());
        self.words.push(word.to_string());
        self.vectors.extend_from_slice(vector);
        self.norms.push(dot_f32(vector, vector).sqrt());
        Ok(())
    }

    fn finish(self, origin: &str) -> Result<EmbeddingStore, BiasError> {
        match self.dim {
            Some(dim) if !self.words.is_empty() => Ok(EmbeddingStore {
                dim,
                words: self.words,
                index: self.index,
                vectors: self.vectors,
                norms: self.norms,
            }),
            _ => Err(BiasError::load(origin, "corpus contains no vectors")),
        }
    }
}

fn dot_f32(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
