// Pretrained word embeddings: corpus download and the read-only store.

pub mod download;
pub mod store;

pub use store::EmbeddingStore;
