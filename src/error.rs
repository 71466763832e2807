// Error taxonomy for the bias-scoring core.
//
// Setup failures are fatal and typed so the CLI can tell the user what to do
// next. Per-document scoring and keyword summarizing never produce errors:
// bad input degrades to a neutral score or an empty count list instead.

use thiserror::Error;

/// Fatal errors raised while building a bias model.
#[derive(Debug, Clone, Error)]
pub enum BiasError {
    /// The pretrained embedding corpus could not be read or parsed.
    #[error("failed to load embeddings from {path}: {reason}")]
    EmbeddingLoad { path: String, reason: String },

    /// One or both poles produced no usable direction.
    #[error("bias axis unavailable: {reason}")]
    BiasAxisUnavailable { reason: String },
}

impl BiasError {
    pub(crate) fn load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        BiasError::EmbeddingLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn axis(reason: impl Into<String>) -> Self {
        BiasError::BiasAxisUnavailable {
            reason: reason.into(),
        }
    }
}
