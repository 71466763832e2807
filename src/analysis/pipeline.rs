// Article scoring: bias and sentiment for a batch of cleaned articles.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::bias::BiasModel;
use crate::news::Article;
use crate::sentiment::SentimentScorer;

/// An article with its bias and sentiment scores attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: Article,
    /// Negative leans left, positive leans right
    pub bias: f64,
    /// Polarity in [-1, 1]
    pub sentiment: f64,
}

/// Score every article's content, in parallel, preserving input order.
pub fn score_articles(
    model: &BiasModel,
    sentiment: &dyn SentimentScorer,
    articles: Vec<Article>,
) -> Vec<ScoredArticle> {
    let contents: Vec<&str> = articles.iter().map(|a| a.content.as_str()).collect();
    let biases = model.score_batch(&contents);
    let polarities: Vec<f64> = contents
        .par_iter()
        .map(|content| sentiment.polarity(content))
        .collect();

    let scored: Vec<ScoredArticle> = articles
        .into_iter()
        .zip(biases)
        .zip(polarities)
        .map(|((article, bias), polarity)| ScoredArticle {
            article,
            bias,
            sentiment: polarity,
        })
        .collect();

    info!(count = scored.len(), "Scored articles");
    scored
}
