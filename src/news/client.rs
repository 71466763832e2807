// NewsAPI client: recent articles for one outlet.
//
// Uses the `/v2/everything` endpoint, which covers the last month on the
// free tier. Errors come back as `{"status":"error","code":..,"message":..}`,
// sometimes with a 2xx status, so the body is checked either way.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use super::articles::{clean_articles, Article, RawArticle};
use super::traits::ArticleSource;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org";

/// Days of history requested, counting back from today.
const WINDOW_DAYS: u64 = 29;
const PAGE_SIZE: &str = "100";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    total_results: Option<u64>,
    #[serde(default)]
    articles: Vec<RawArticle>,
    code: Option<String>,
    message: Option<String>,
}

pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("slant/0.1 (news-bias-analysis)")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch the raw (uncleaned) articles for `source_id`.
    pub async fn fetch_raw(&self, source_id: &str) -> Result<Vec<RawArticle>> {
        let url = format!("{}/v2/everything", self.base_url);
        let (from, to) = date_window(Utc::now().date_naive());
        let (from, to) = (from.to_string(), to.to_string());

        debug!(source = source_id, from = %from, to = %to, "NewsAPI request");

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("sources", source_id),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
            ])
            .send()
            .await
            .with_context(|| format!("NewsAPI request failed for {source_id}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read NewsAPI response body")?;

        parse_response(status.as_u16(), &body)
    }
}

#[async_trait]
impl ArticleSource for NewsApiClient {
    async fn fetch_articles(&self, source_id: &str) -> Result<Vec<Article>> {
        let raw = self.fetch_raw(source_id).await?;
        let fetched = raw.len();
        let articles = clean_articles(raw);
        info!(
            source = source_id,
            fetched,
            kept = articles.len(),
            "Fetched articles"
        );
        Ok(articles)
    }
}

/// Inclusive `(from, to)` dates for the request window ending on `today`.
pub fn date_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = today.checked_sub_days(Days::new(WINDOW_DAYS)).unwrap_or(today);
    (from, today)
}

/// Turn a NewsAPI HTTP status and body into raw articles or an error that
/// carries the API's own code and message.
pub fn parse_response(status: u16, body: &str) -> Result<Vec<RawArticle>> {
    let parsed: Result<EverythingResponse, _> = serde_json::from_str(body);

    match parsed {
        Ok(resp) if resp.status == "ok" && (200..300).contains(&status) => {
            debug!(
                total = resp.total_results.unwrap_or(0),
                returned = resp.articles.len(),
                "NewsAPI response"
            );
            Ok(resp.articles)
        }
        Ok(resp) => anyhow::bail!(
            "NewsAPI returned {status} ({}): {}",
            resp.code.as_deref().unwrap_or("unknown"),
            resp.message.as_deref().unwrap_or("no message")
        ),
        Err(e) if (200..300).contains(&status) => {
            Err(e).context("Failed to deserialize NewsAPI response")
        }
        Err(_) => anyhow::bail!("NewsAPI returned {status}: {body}"),
    }
}
