// Dashboard summary: aggregates a scored batch into the numbers the
// terminal view and markdown report display.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use super::pipeline::ScoredArticle;
use crate::bias::{BiasModel, KeywordCounts};

/// Mean bias beyond this (either side) gets a leaning verdict.
pub const VERDICT_THRESHOLD: f64 = 0.1;
/// Per-article bias beyond this counts as left or right.
pub const BIAS_THRESHOLD: f64 = 0.2;
/// Per-article polarity beyond this counts as positive or negative.
pub const SENTIMENT_THRESHOLD: f64 = 0.05;
pub const HEADLINES_PER_SIDE: usize = 5;
pub const BIASED_WORDS_TOP: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    LeftLeaning,
    Centrist,
    RightLeaning,
}

impl Verdict {
    pub fn from_mean_bias(mean: f64) -> Self {
        if mean < -VERDICT_THRESHOLD {
            Verdict::LeftLeaning
        } else if mean > VERDICT_THRESHOLD {
            Verdict::RightLeaning
        } else {
            Verdict::Centrist
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::LeftLeaning => "Left-Leaning",
            Verdict::Centrist => "Centrist",
            Verdict::RightLeaning => "Right-Leaning",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BiasDistribution {
    pub left: usize,
    pub neutral: usize,
    pub right: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// Mean bias of the articles published on one UTC date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBias {
    pub date: NaiveDate,
    pub mean_bias: f64,
    pub articles: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub title: String,
    pub url: String,
    pub bias: f64,
}

/// Everything the dashboard shows for one outlet.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub article_count: usize,
    pub mean_bias: f64,
    pub mean_sentiment: f64,
    pub verdict: Verdict,
    pub bias_distribution: BiasDistribution,
    pub sentiment_distribution: SentimentDistribution,
    pub daily_trend: Vec<DailyBias>,
    pub most_left: Vec<Headline>,
    pub most_right: Vec<Headline>,
    pub left_keywords: KeywordCounts,
    pub right_keywords: KeywordCounts,
    pub biased_words: KeywordCounts,
}

/// Aggregate a scored batch. The batch must not be empty.
pub fn build_dashboard(
    model: &BiasModel,
    articles: &[ScoredArticle],
    top_keywords: usize,
) -> Result<Dashboard> {
    if articles.is_empty() {
        anyhow::bail!("No articles to analyze. Try a different source.");
    }

    let n = articles.len() as f64;
    let mean_bias = articles.iter().map(|a| a.bias).sum::<f64>() / n;
    let mean_sentiment = articles.iter().map(|a| a.sentiment).sum::<f64>() / n;

    let contents: Vec<&str> = articles.iter().map(|a| a.article.content.as_str()).collect();
    let (left_keywords, right_keywords) = model.summarize(&contents, top_keywords);
    let biased_words = model.biased_words(&contents, BIASED_WORDS_TOP);

    Ok(Dashboard {
        article_count: articles.len(),
        mean_bias,
        mean_sentiment,
        verdict: Verdict::from_mean_bias(mean_bias),
        bias_distribution: bias_distribution(articles),
        sentiment_distribution: sentiment_distribution(articles),
        daily_trend: daily_trend(articles),
        most_left: extreme_headlines(articles, |a, b| a.total_cmp(&b)),
        most_right: extreme_headlines(articles, |a, b| b.total_cmp(&a)),
        left_keywords,
        right_keywords,
        biased_words,
    })
}

pub fn bias_distribution(articles: &[ScoredArticle]) -> BiasDistribution {
    let mut dist = BiasDistribution::default();
    for article in articles {
        if article.bias < -BIAS_THRESHOLD {
            dist.left += 1;
        } else if article.bias > BIAS_THRESHOLD {
            dist.right += 1;
        } else {
            dist.neutral += 1;
        }
    }
    dist
}

pub fn sentiment_distribution(articles: &[ScoredArticle]) -> SentimentDistribution {
    let mut dist = SentimentDistribution::default();
    for article in articles {
        if article.sentiment > SENTIMENT_THRESHOLD {
            dist.positive += 1;
        } else if article.sentiment < -SENTIMENT_THRESHOLD {
            dist.negative += 1;
        } else {
            dist.neutral += 1;
        }
    }
    dist
}

/// Mean bias per UTC publish date, oldest first.
pub fn daily_trend(articles: &[ScoredArticle]) -> Vec<DailyBias> {
    let mut by_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for article in articles {
        let entry = by_day
            .entry(article.article.published_at.date_naive())
            .or_insert((0.0, 0));
        entry.0 += article.bias;
        entry.1 += 1;
    }

    by_day
        .into_iter()
        .map(|(date, (sum, count))| DailyBias {
            date,
            mean_bias: sum / count as f64,
            articles: count,
        })
        .collect()
}

// Stable sort keeps input order among equal scores.
fn extreme_headlines(
    articles: &[ScoredArticle],
    order: impl Fn(f64, f64) -> Ordering,
) -> Vec<Headline> {
    let mut ranked: Vec<&ScoredArticle> = articles.iter().collect();
    ranked.sort_by(|a, b| order(a.bias, b.bias));
    ranked
        .into_iter()
        .take(HEADLINES_PER_SIDE)
        .map(|a| Headline {
            title: a.article.title.clone(),
            url: a.article.url.clone(),
            bias: a.bias,
        })
        .collect()
}
