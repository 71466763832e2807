// Shared fixtures: a small synthetic embedding space where left-leaning
// words sit near +x, right-leaning words near -x, and neutral words on an
// orthogonal axis, so the derived bias axis is known in advance.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use slant::bias::{build_bias_model, BiasModel, ExpansionConfig};
use slant::embeddings::EmbeddingStore;
use slant::news::{Article, ArticleSourceRef};

pub const LEFT_WORDS: &[&str] = &["climate", "diversity", "equality", "liberal", "progressive"];
pub const RIGHT_WORDS: &[&str] = &["conservative", "freedom", "market", "patriotism", "tradition"];

pub fn synthetic_store() -> Arc<EmbeddingStore> {
    let entries = vec![
        ("liberal", vec![1.0, 0.1, 0.0, 0.0]),
        ("equality", vec![0.9, 0.2, 0.0, 0.0]),
        ("diversity", vec![0.95, 0.0, 0.1, 0.0]),
        ("climate", vec![0.8, 0.1, 0.2, 0.0]),
        ("progressive", vec![0.9, 0.1, 0.1, 0.0]),
        ("conservative", vec![-1.0, 0.1, 0.0, 0.0]),
        ("freedom", vec![-0.9, 0.2, 0.0, 0.0]),
        ("tradition", vec![-0.95, 0.0, 0.1, 0.0]),
        ("patriotism", vec![-0.8, 0.1, 0.2, 0.0]),
        ("market", vec![-0.9, 0.1, 0.1, 0.0]),
        ("weather", vec![0.0, 0.0, 0.0, 1.0]),
        ("bridge", vec![0.0, 0.0, 0.0, 0.8]),
        ("river", vec![0.0, 0.0, 0.0, 0.6]),
    ];
    Arc::new(EmbeddingStore::from_entries(entries).unwrap())
}

/// Built-in seed lists, expanded two neighbours deep.
pub fn expansion() -> ExpansionConfig {
    ExpansionConfig::with_topn(2)
}

pub fn synthetic_model() -> BiasModel {
    build_bias_model(synthetic_store(), &expansion()).unwrap()
}

pub fn article(title: &str, content: &str, published_at: &str) -> Article {
    let published_at: DateTime<Utc> = published_at.parse().unwrap();
    Article {
        source: ArticleSourceRef {
            id: Some("test-wire".to_string()),
            name: "Test Wire".to_string(),
        },
        author: None,
        title: title.to_string(),
        description: None,
        url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        published_at,
        content: content.to_string(),
    }
}
