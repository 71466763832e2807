// Article types and cleaning.
//
// NewsAPI returns every field as nullable. `RawArticle` mirrors the wire
// shape; `clean_articles` turns it into `Article`, which only exists when
// the fields analysis depends on are present.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// NewsAPI appends "[+1234 chars]" to truncated content.
static TRUNCATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\[\+\d+ chars\]\s*$").expect("truncation marker regex must compile")
});

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("html tag regex must compile"));

/// Outlet reference embedded in every article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSourceRef {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// An article exactly as NewsAPI serializes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub source: ArticleSourceRef,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
}

/// A cleaned article, ready to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSourceRef,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub content: String,
}

/// Strip markup and the truncation marker from article content.
pub fn clean_content(content: &str) -> String {
    let without_tags = HTML_TAG.replace_all(content, " ");
    let without_marker = TRUNCATION_MARKER.replace(&without_tags, "");
    without_marker.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop articles that are missing content, title, URL or publish date, or
/// whose content is blank once cleaned.
pub fn clean_articles(raw: Vec<RawArticle>) -> Vec<Article> {
    raw.into_iter()
        .filter_map(|article| {
            let content = clean_content(article.content.as_deref()?);
            if content.is_empty() {
                return None;
            }
            let title = article.title.filter(|t| !t.trim().is_empty())?;
            let url = article.url.filter(|u| !u.trim().is_empty())?;

            Some(Article {
                source: article.source,
                author: article.author,
                title: title.trim().to_string(),
                description: article.description,
                url,
                published_at: article.published_at?,
                content,
            })
        })
        .collect()
}
