// Slant: political bias and sentiment analysis for news outlets
//
// This is the library root. Each module corresponds to a major subsystem:
// the embedding-based bias core, article ingestion, sentiment and the
// dashboard that ties them together.

pub mod analysis;
pub mod bias;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod news;
pub mod output;
pub mod sentiment;
pub mod status;
pub mod text;

pub use bias::{build_bias_model, score_document, summarize_keywords, BiasModel, DocumentText};
pub use error::BiasError;
