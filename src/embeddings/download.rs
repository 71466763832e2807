// Download helper for the pretrained embedding corpus.
//
// Fetches glove-wiki-gigaword-100 (400k words, 100 dimensions, ~128 MB
// gzip) from the gensim-data release mirror. The file is stored in a
// platform-appropriate directory (~/.local/share/slant/models/ on Linux)
// so it persists across runs, and it is never decompressed to disk: the
// store reads it through a gzip decoder.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Release asset for the GloVe corpus in word2vec text format.
const CORPUS_URL: &str = "https://github.com/RaRe-Technologies/gensim-data/releases/download/glove-wiki-gigaword-100/glove-wiki-gigaword-100.gz";

/// File name of the corpus inside the model directory.
pub const CORPUS_FILE: &str = "glove-wiki-gigaword-100.gz";

/// Returns the default directory for storing the embedding corpus.
/// Uses the platform data directory: ~/.local/share/slant/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slant")
        .join("models")
}

/// Where the corpus lives inside `dir`.
pub fn corpus_path(dir: &Path) -> PathBuf {
    dir.join(CORPUS_FILE)
}

/// Check whether the corpus has been downloaded into `dir`.
pub fn corpus_present(dir: &Path) -> bool {
    corpus_path(dir).exists()
}

/// Download the embedding corpus into `dir`, skipping it if already present.
///
/// The body is streamed into a `.part` file that is renamed on success, so an
/// interrupted download never leaves a truncated corpus behind.
pub async fn download_corpus(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;

    let dest = corpus_path(dir);
    if corpus_present(dir) {
        info!("Embedding corpus already exists, skipping");
        println!("  {} (already exists)", CORPUS_FILE);
        return Ok(dest);
    }

    println!("  Downloading {} (~128 MB)...", CORPUS_FILE);
    download_file(CORPUS_URL, &dest).await?;
    Ok(dest)
}

/// Stream a single file from a URL to a local path with a progress bar.
async fn download_file(url: &str, dest: &Path) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status {}: {}", response.status(), url);
    }

    let pb = match response.content_length() {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                    .context("Invalid progress bar template")?
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("    {spinner} {bytes}")
                    .context("Invalid progress bar template")?,
            );
            pb
        }
    };

    let partial = dest.with_extension("gz.part");
    let mut file = std::fs::File::create(&partial)
        .with_context(|| format!("Failed to create {}", partial.display()))?;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Failed to read response body")?;
        file.write_all(&chunk)
            .with_context(|| format!("Failed to write {}", partial.display()))?;
        pb.inc(chunk.len() as u64);
    }
    file.flush()
        .with_context(|| format!("Failed to flush {}", partial.display()))?;
    drop(file);

    std::fs::rename(&partial, dest)
        .with_context(|| format!("Failed to move download into {}", dest.display()))?;

    pb.finish_and_clear();
    info!("Downloaded {} to {}", url, dest.display());
    Ok(())
}
