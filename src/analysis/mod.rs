// Batch analysis: scores fetched articles and aggregates them for display.

pub mod dashboard;
pub mod pipeline;

pub use dashboard::{build_dashboard, Dashboard, DailyBias, Headline, Verdict};
pub use pipeline::{score_articles, ScoredArticle};
