// News ingestion: NewsAPI client, article cleaning and the outlet catalogue.

pub mod articles;
pub mod client;
pub mod sources;
pub mod traits;

pub use articles::{clean_articles, Article, ArticleSourceRef, RawArticle};
pub use client::NewsApiClient;
pub use sources::{resolve_source, Outlet, OUTLETS};
pub use traits::ArticleSource;
