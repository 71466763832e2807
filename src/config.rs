use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::bias::expand::DEFAULT_EXPANSION_TOPN;
use crate::bias::keywords::DEFAULT_TOP_KEYWORDS;
use crate::embeddings::download;
use crate::news::client::DEFAULT_NEWS_API_URL;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    pub news_api_key: String,
    /// NewsAPI endpoint (defaults to https://newsapi.org)
    pub news_api_url: String,
    /// Directory the embedding corpus is downloaded into
    pub model_dir: PathBuf,
    /// Explicit corpus file; overrides `model_dir` when set
    pub embeddings_path: Option<PathBuf>,
    /// Nearest neighbours added per seed word
    pub expansion_topn: usize,
    /// Rows in each keyword table
    pub top_keywords: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the NewsAPI key, which is only
    /// needed by `analyze`.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("SLANT_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| download::default_model_dir());

        Ok(Self {
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string()),
            model_dir,
            embeddings_path: env::var("SLANT_EMBEDDINGS_PATH").ok().map(PathBuf::from),
            expansion_topn: parse_count("SLANT_EXPANSION_TOPN", DEFAULT_EXPANSION_TOPN)?,
            top_keywords: parse_count("SLANT_TOP_KEYWORDS", DEFAULT_TOP_KEYWORDS)?,
        })
    }

    /// Path of the embedding corpus this configuration points at.
    pub fn corpus_path(&self) -> PathBuf {
        self.embeddings_path
            .clone()
            .unwrap_or_else(|| download::corpus_path(&self.model_dir))
    }

    /// Check that the NewsAPI key is configured.
    /// Call this before any operation that fetches articles.
    pub fn require_news_api(&self) -> Result<()> {
        if self.news_api_key.is_empty() {
            anyhow::bail!(
                "NEWS_API_KEY not set. Add it to your .env file.\n\
                 Get a free key at https://newsapi.org/register"
            );
        }
        Ok(())
    }

    /// Check that the embedding corpus exists on disk.
    pub fn require_embeddings(&self) -> Result<()> {
        let path = self.corpus_path();
        if !path.exists() {
            anyhow::bail!(
                "Embedding corpus not found at {}\n\
                 Run `slant download-model` to download it,\n\
                 or set SLANT_EMBEDDINGS_PATH to an existing word2vec/GloVe file.",
                path.display()
            );
        }
        Ok(())
    }
}

fn parse_count(var: &str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{var} must be a non-negative integer, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
