use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use slant::bias::seeds::{LEFT_SEEDS, RIGHT_SEEDS};
use slant::bias::{BiasModel, DocumentText, ExpansionConfig};
use slant::config::Config;
use slant::news::{ArticleSource, NewsApiClient};
use slant::sentiment::{LexiconSentimentScorer, SentimentScorer};

/// Slant: political bias and sentiment analysis for news outlets.
///
/// Scores articles on a left/right axis derived from word embeddings and
/// summarizes each outlet's recent coverage.
#[derive(Parser)]
#[command(name = "slant", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the GloVe embedding corpus (~128 MB)
    DownloadModel,

    /// List the news outlets available to `analyze`
    Sources,

    /// Fetch an outlet's recent articles and show its bias dashboard
    Analyze {
        /// Outlet display name (e.g. "Fox News") or NewsAPI source id
        #[arg(long)]
        source: String,

        /// Where to write the markdown report
        #[arg(long, default_value = "output/slant-report.md")]
        report: String,

        /// Also write the scored articles as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Score a single piece of text
    Score {
        /// The text to score
        text: String,
    },

    /// Show the expanded left and right keyword sets
    Keywords {
        /// Keywords to show per side (default: 20)
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Check that the axis puts the left seeds left and the right seeds right
    Validate,

    /// Show system status (corpus, API key, settings)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slant=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DownloadModel => {
            let config = Config::load()?;
            println!("Downloading embedding corpus...");
            println!("  Destination: {}", config.model_dir.display());

            slant::embeddings::download::download_corpus(&config.model_dir).await?;

            println!("\n{}", "Corpus downloaded successfully.".bold());
            println!("You can now run `slant analyze --source \"<outlet>\"`.");
        }

        Commands::Sources => {
            slant::output::terminal::display_sources(slant::news::OUTLETS);
        }

        Commands::Analyze {
            source,
            report,
            json,
        } => {
            let config = Config::load()?;
            config.require_news_api()?;
            config.require_embeddings()?;

            let outlet = slant::news::resolve_source(&source).with_context(|| {
                format!("Unknown source {source:?}. Run `slant sources` to list the options.")
            })?;

            println!("Fetching articles from {}...", outlet.name);
            let client = NewsApiClient::new(&config.news_api_url, &config.news_api_key)?;
            let articles = client.fetch_articles(outlet.id).await?;

            if articles.is_empty() {
                anyhow::bail!(
                    "No articles found for {}. Try a different source.",
                    outlet.name
                );
            }
            println!("  {} articles after cleaning", articles.len());

            let model = load_model(&config).await?;
            let sentiment = LexiconSentimentScorer::new();
            let top_keywords = config.top_keywords;

            let (scored, dashboard) = tokio::task::spawn_blocking(move || {
                let scored = slant::analysis::score_articles(&model, &sentiment, articles);
                let dashboard =
                    slant::analysis::build_dashboard(&model, &scored, top_keywords)?;
                Ok::<_, anyhow::Error>((scored, dashboard))
            })
            .await
            .context("Scoring task panicked")??;

            slant::output::terminal::display_dashboard(outlet.name, &dashboard);

            let report_path =
                slant::output::markdown::generate_report(outlet.name, &dashboard, &report)?;
            println!(
                "{}",
                format!("Markdown report saved to: {report_path}").bold()
            );

            if let Some(path) = json {
                let body = serde_json::to_string_pretty(&scored)?;
                std::fs::write(&path, body)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Scored articles saved to: {}", path.display());
            }
        }

        Commands::Score { text } => {
            let config = Config::load()?;
            config.require_embeddings()?;
            let model = load_model(&config).await?;

            let bias = model.score(DocumentText::new(&text));
            let sentiment = LexiconSentimentScorer::new().polarity(&text);
            slant::output::terminal::display_text_score(&text, bias, sentiment);
        }

        Commands::Keywords { top } => {
            let config = Config::load()?;
            config.require_embeddings()?;
            let model = load_model(&config).await?;

            print_keyword_set("Left", model.left_keywords(), top);
            print_keyword_set("Right", model.right_keywords(), top);
        }

        Commands::Validate => {
            let config = Config::load()?;
            config.require_embeddings()?;
            let model = load_model(&config).await?;

            let left_text = LEFT_SEEDS.join(" ");
            let right_text = RIGHT_SEEDS.join(" ");
            let left = model.score(DocumentText::new(&left_text));
            let right = model.score(DocumentText::new(&right_text));

            println!("\n{}", "=== Axis Validation ===".bold());
            println!("  Left seed text:  {left:+.3}");
            println!("  Right seed text: {right:+.3}");

            if left < 0.0 && right > 0.0 {
                println!("\n{}", "Axis orientation OK.".green().bold());
            } else {
                anyhow::bail!(
                    "Axis orientation check failed: left seeds scored {left:+.3}, \
                     right seeds scored {right:+.3}"
                );
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            slant::status::show(&config);
        }
    }

    Ok(())
}

/// Load the corpus and derive the bias model on the blocking pool.
async fn load_model(config: &Config) -> Result<Arc<BiasModel>> {
    let path = config.corpus_path();
    let expansion = ExpansionConfig::with_topn(config.expansion_topn);

    println!("Loading embeddings from {}...", path.display());
    let model = tokio::task::spawn_blocking(move || BiasModel::load(&path, &expansion))
        .await
        .context("Model loading task panicked")??;

    info!(
        vocabulary = model.store().len(),
        left = model.left_keywords().len(),
        right = model.right_keywords().len(),
        "Bias model ready"
    );
    Ok(Arc::new(model))
}

fn print_keyword_set(side: &str, keywords: &std::collections::BTreeSet<String>, top: usize) {
    println!(
        "\n{}",
        format!("=== {side} keywords ({} total) ===", keywords.len()).bold()
    );
    let shown: Vec<&str> = keywords.iter().take(top).map(String::as_str).collect();
    println!("  {}", shown.join(", ").dimmed());
}
