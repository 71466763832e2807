// Composition tests: verifying that the pieces chain together correctly.
//
// These tests exercise the data flow between modules:
//   BiasModel -> score_articles -> build_dashboard -> markdown report
// without any network calls. Report generation writes under the system
// temp directory.

mod common;

use slant::analysis::{build_dashboard, score_articles, Verdict};
use slant::news::{clean_articles, ArticleSourceRef, RawArticle};
use slant::output::markdown::{generate_report, render_report};
use slant::sentiment::LexiconSentimentScorer;

use common::{article, synthetic_model};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

fn mixed_batch() -> Vec<slant::news::Article> {
    vec![
        article(
            "Left story",
            "liberal equality diversity",
            "2024-03-01T09:00:00Z",
        ),
        article(
            "Right story",
            "conservative freedom market",
            "2024-03-01T18:30:00Z",
        ),
        article(
            "Neutral story",
            "A great day for the weather by the river bridge.",
            "2024-03-02T07:15:00Z",
        ),
    ]
}

// ============================================================
// Chain: BiasModel -> scored articles
// ============================================================

#[test]
fn scored_articles_keep_input_order_and_scores() {
    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), mixed_batch());

    assert_eq!(scored.len(), 3);
    assert_eq!(scored[0].article.title, "Left story");
    assert_eq!(scored[2].article.title, "Neutral story");

    assert!(approx(scored[0].bias, -0.95), "left bias {}", scored[0].bias);
    assert!(approx(scored[1].bias, 0.9333), "right bias {}", scored[1].bias);
    assert_eq!(scored[2].bias, 0.0);

    assert_eq!(scored[0].sentiment, 0.0);
    assert!(scored[2].sentiment > 0.05);
}

#[test]
fn scored_bias_matches_single_document_scores() {
    let model = synthetic_model();
    let articles = mixed_batch();
    let expected: Vec<f64> = articles
        .iter()
        .map(|a| model.score(a.content.as_str().into()))
        .collect();

    let scored = score_articles(&model, &LexiconSentimentScorer::new(), articles);
    let biases: Vec<f64> = scored.iter().map(|s| s.bias).collect();
    assert_eq!(biases, expected);
}

#[test]
fn cleaned_feed_articles_flow_into_scoring() {
    let raw = vec![
        RawArticle {
            source: ArticleSourceRef {
                id: Some("test-wire".to_string()),
                name: "Test Wire".to_string(),
            },
            author: Some("Staff".to_string()),
            title: Some("Market rally".to_string()),
            description: None,
            url: Some("https://example.com/market".to_string()),
            published_at: Some("2024-03-05T12:00:00Z".parse().unwrap()),
            content: Some("<b>Market</b> freedom and tradition\u{2026} [+3012 chars]".to_string()),
        },
        RawArticle {
            source: ArticleSourceRef {
                id: None,
                name: "Test Wire".to_string(),
            },
            author: None,
            title: Some("[Removed]".to_string()),
            description: None,
            url: Some("https://removed.com".to_string()),
            published_at: Some("2024-03-05T12:00:00Z".parse().unwrap()),
            content: None,
        },
    ];

    let articles = clean_articles(raw);
    assert_eq!(articles.len(), 1);

    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), articles);
    assert!(scored[0].bias > 0.5);
}

// ============================================================
// Chain: scored articles -> dashboard
// ============================================================

#[test]
fn mixed_batch_dashboard() {
    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), mixed_batch());
    let dashboard = build_dashboard(&model, &scored, 10).unwrap();

    assert_eq!(dashboard.article_count, 3);
    assert_eq!(dashboard.verdict, Verdict::Centrist);

    assert_eq!(dashboard.bias_distribution.left, 1);
    assert_eq!(dashboard.bias_distribution.neutral, 1);
    assert_eq!(dashboard.bias_distribution.right, 1);

    assert_eq!(dashboard.sentiment_distribution.positive, 1);
    assert_eq!(dashboard.sentiment_distribution.neutral, 2);
    assert_eq!(dashboard.sentiment_distribution.negative, 0);

    assert_eq!(dashboard.daily_trend.len(), 2);
    assert_eq!(dashboard.daily_trend[0].date.to_string(), "2024-03-01");
    assert_eq!(dashboard.daily_trend[0].articles, 2);
    assert_eq!(dashboard.daily_trend[1].date.to_string(), "2024-03-02");
    assert_eq!(dashboard.daily_trend[1].mean_bias, 0.0);

    assert_eq!(dashboard.most_left.len(), 3);
    assert_eq!(dashboard.most_left[0].title, "Left story");
    assert_eq!(dashboard.most_right[0].title, "Right story");

    assert_eq!(dashboard.left_keywords.get("liberal"), Some(1));
    assert_eq!(dashboard.right_keywords.get("market"), Some(1));
    assert_eq!(dashboard.biased_words.len(), 6);
}

#[test]
fn left_heavy_batch_is_left_leaning() {
    let model = synthetic_model();
    let articles = vec![
        article("One", "liberal climate", "2024-03-01T10:00:00Z"),
        article("Two", "progressive equality", "2024-03-02T10:00:00Z"),
        article("Three", "weather", "2024-03-03T10:00:00Z"),
    ];
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), articles);
    let dashboard = build_dashboard(&model, &scored, 10).unwrap();

    assert!(dashboard.mean_bias < -0.1);
    assert_eq!(dashboard.verdict, Verdict::LeftLeaning);
}

#[test]
fn empty_batch_is_rejected() {
    let model = synthetic_model();
    assert!(build_dashboard(&model, &[], 10).is_err());
}

// ============================================================
// Chain: dashboard -> markdown report
// ============================================================

#[test]
fn report_contains_every_section() {
    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), mixed_batch());
    let dashboard = build_dashboard(&model, &scored, 10).unwrap();

    let md = render_report("Test Wire", &dashboard);
    assert!(md.starts_with("# Bias Report: Test Wire"));
    assert!(md.contains("**Verdict:** Centrist"));
    assert!(md.contains("## Bias Distribution"));
    assert!(md.contains("## Sentiment Distribution"));
    assert!(md.contains("| 2024-03-01 |"));
    assert!(md.contains("[Left story](https://example.com/left-story)"));
    assert!(md.contains("## Most Right-Leaning Headlines"));
    assert!(md.contains("| liberal | 1 |"));
    assert!(md.contains("## Most Frequent Biased Words"));
}

#[test]
fn report_is_written_to_disk() {
    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), mixed_batch());
    let dashboard = build_dashboard(&model, &scored, 10).unwrap();

    let dir = std::env::temp_dir().join("slant-composition-report");
    let path = dir.join("nested").join("report.md");
    let path_str = path.to_string_lossy().to_string();

    let written = generate_report("Test Wire", &dashboard, &path_str).unwrap();
    assert_eq!(written, path_str);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Test Wire"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn scored_articles_serialize_flat() {
    let model = synthetic_model();
    let scored = score_articles(&model, &LexiconSentimentScorer::new(), mixed_batch());
    let json = serde_json::to_value(&scored[0]).unwrap();

    assert_eq!(json["title"], "Left story");
    assert_eq!(json["publishedAt"], "2024-03-01T09:00:00Z");
    assert!(json["bias"].as_f64().unwrap() < 0.0);
    assert_eq!(json["sentiment"], 0.0);
}
