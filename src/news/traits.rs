// Article source trait: lets the analyze pipeline run against NewsAPI or
// any other provider of cleaned articles.

use anyhow::Result;
use async_trait::async_trait;

use super::articles::Article;

/// Anything that can supply recent articles for an outlet.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch cleaned articles for `source_id`, newest first.
    async fn fetch_articles(&self, source_id: &str) -> Result<Vec<Article>>;
}
