// Unit tests for article ingestion.
//
// Tests NewsAPI payload parsing, article cleaning, outlet lookup and the
// ArticleSource seam, all without network access.

mod common;

use anyhow::Result;
use async_trait::async_trait;

use slant::analysis::{build_dashboard, score_articles};
use slant::news::client::parse_response;
use slant::news::{clean_articles, resolve_source, Article, ArticleSource, OUTLETS};
use slant::sentiment::LexiconSentimentScorer;

use common::{article, synthetic_model};

#[test]
fn parse_and_clean_full_payload() {
    let body = r#"{
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {
                "source": {"id": "politico", "name": "Politico"},
                "author": "Jane Reporter",
                "title": "Climate bill advances",
                "description": "Committee vote",
                "url": "https://example.com/climate",
                "urlToImage": "https://example.com/img.png",
                "publishedAt": "2024-03-10T14:05:00Z",
                "content": "The climate bill cleared committee on Tuesday… [+1820 chars]"
            },
            {
                "source": {"id": "politico", "name": "Politico"},
                "author": null,
                "title": "[Removed]",
                "description": null,
                "url": "https://removed.com",
                "urlToImage": null,
                "publishedAt": "2024-03-10T11:00:00Z",
                "content": null
            },
            {
                "source": {"id": null, "name": "Politico"},
                "author": null,
                "title": null,
                "description": null,
                "url": "https://example.com/untitled",
                "urlToImage": null,
                "publishedAt": "2024-03-09T11:00:00Z",
                "content": "Body without a headline"
            }
        ]
    }"#;

    let raw = parse_response(200, body).unwrap();
    assert_eq!(raw.len(), 3);

    let articles = clean_articles(raw);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Climate bill advances");
    assert_eq!(articles[0].author.as_deref(), Some("Jane Reporter"));
    assert_eq!(
        articles[0].content,
        "The climate bill cleared committee on Tuesday\u{2026}"
    );
    assert_eq!(articles[0].published_at.to_rfc3339(), "2024-03-10T14:05:00+00:00");
}

#[test]
fn parse_empty_ok_response() {
    let raw = parse_response(200, r#"{"status":"ok","totalResults":0,"articles":[]}"#).unwrap();
    assert!(raw.is_empty());
}

#[test]
fn api_error_surfaces_code() {
    let body = r#"{"status":"error","code":"sourceDoesNotExist","message":"You have requested a source which does not exist."}"#;
    let err = parse_response(400, body).unwrap_err().to_string();
    assert!(err.contains("sourceDoesNotExist"));
}

#[test]
fn every_outlet_resolves_by_name_and_id() {
    for outlet in OUTLETS {
        assert_eq!(resolve_source(outlet.name).unwrap().id, outlet.id);
        assert_eq!(resolve_source(&outlet.name.to_uppercase()).unwrap().id, outlet.id);
        assert_eq!(resolve_source(outlet.id).unwrap().id, outlet.id);
    }
}

// ============================================================
// ArticleSource seam
// ============================================================

struct FixedSource {
    articles: Vec<Article>,
}

#[async_trait]
impl ArticleSource for FixedSource {
    async fn fetch_articles(&self, source_id: &str) -> Result<Vec<Article>> {
        if source_id != "test-wire" {
            anyhow::bail!("unknown source {source_id}");
        }
        Ok(self.articles.clone())
    }
}

#[tokio::test]
async fn analysis_runs_against_any_article_source() {
    let source = FixedSource {
        articles: vec![
            article("Markets", "market freedom tradition", "2024-03-01T10:00:00Z"),
            article("Patriots", "patriotism conservative", "2024-03-02T10:00:00Z"),
        ],
    };

    let articles = source.fetch_articles("test-wire").await.unwrap();
    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), articles);
    let dashboard = build_dashboard(&model, &scored, 10).unwrap();

    assert_eq!(dashboard.bias_distribution.right, 2);
    assert_eq!(dashboard.verdict.to_string(), "Right-Leaning");

    assert!(source.fetch_articles("other").await.is_err());
}
