// Semantic bias scoring: anchor expansion, axis construction, document
// projection and keyword summaries.

pub mod axis;
pub mod expand;
pub mod keywords;
pub mod model;
pub mod scorer;
pub mod seeds;

pub use axis::BiasAxis;
pub use keywords::{summarize_keywords, KeywordCounts};
pub use model::{build_bias_model, BiasModel, ExpansionConfig};
pub use scorer::{score_document, DocumentText};
