// System status display: corpus location and size, API key presence,
// effective tuning values.

use std::path::Path;

use crate::config::Config;

/// Display system status to the terminal.
pub fn show(config: &Config) {
    let corpus = config.corpus_path();
    match std::fs::metadata(&corpus) {
        Ok(meta) => println!("Embedding corpus: {} ({})", corpus.display(), format_bytes(meta.len())),
        Err(_) => {
            println!("Embedding corpus: not downloaded");
            println!("  Run `slant download-model` to fetch it into {}", display_dir(&corpus));
        }
    }

    if config.news_api_key.is_empty() {
        println!("NewsAPI key: not set");
        println!("  Add NEWS_API_KEY to your .env file to enable `slant analyze`");
    } else {
        println!("NewsAPI key: set ({})", config.news_api_url);
    }

    println!(
        "Anchor expansion: {} neighbours per seed, {} keywords per table",
        config.expansion_topn, config.top_keywords
    );
}

fn display_dir(path: &Path) -> String {
    path.parent()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string())
}

pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
