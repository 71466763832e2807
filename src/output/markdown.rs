// Markdown report generation: a shareable copy of the dashboard.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::Dashboard;
use crate::bias::KeywordCounts;

/// Render the dashboard as markdown.
pub fn render_report(outlet_name: &str, dashboard: &Dashboard) -> String {
    let mut md = String::new();
    let total = dashboard.article_count.max(1) as f64;

    let _ = writeln!(md, "# Bias Report: {outlet_name}\n");
    let _ = writeln!(
        md,
        "**Verdict:** {} (mean bias {:+.3} across {} articles)\n",
        dashboard.verdict, dashboard.mean_bias, dashboard.article_count
    );
    let _ = writeln!(md, "**Mean sentiment:** {:+.3}\n", dashboard.mean_sentiment);

    let bias = &dashboard.bias_distribution;
    let _ = writeln!(md, "## Bias Distribution\n");
    let _ = writeln!(md, "| Leaning | Articles | Share |");
    let _ = writeln!(md, "|---|---:|---:|");
    for (label, count) in [("Left", bias.left), ("Neutral", bias.neutral), ("Right", bias.right)] {
        let _ = writeln!(md, "| {label} | {count} | {:.0}% |", count as f64 / total * 100.0);
    }

    let sentiment = &dashboard.sentiment_distribution;
    let _ = writeln!(md, "\n## Sentiment Distribution\n");
    let _ = writeln!(md, "| Sentiment | Articles | Share |");
    let _ = writeln!(md, "|---|---:|---:|");
    for (label, count) in [
        ("Positive", sentiment.positive),
        ("Neutral", sentiment.neutral),
        ("Negative", sentiment.negative),
    ] {
        let _ = writeln!(md, "| {label} | {count} | {:.0}% |", count as f64 / total * 100.0);
    }

    if !dashboard.daily_trend.is_empty() {
        let _ = writeln!(md, "\n## Daily Bias Trend\n");
        let _ = writeln!(md, "| Date | Mean bias | Articles |");
        let _ = writeln!(md, "|---|---:|---:|");
        for day in &dashboard.daily_trend {
            let _ = writeln!(md, "| {} | {:+.3} | {} |", day.date, day.mean_bias, day.articles);
        }
    }

    let _ = writeln!(md, "\n## Most Left-Leaning Headlines\n");
    for h in &dashboard.most_left {
        let _ = writeln!(md, "- [{}]({}) ({:+.3})", escape(&h.title), h.url, h.bias);
    }
    let _ = writeln!(md, "\n## Most Right-Leaning Headlines\n");
    for h in &dashboard.most_right {
        let _ = writeln!(md, "- [{}]({}) ({:+.3})", escape(&h.title), h.url, h.bias);
    }

    let _ = writeln!(md, "\n## Top Keywords\n");
    write_keyword_table(&mut md, "Left", &dashboard.left_keywords);
    write_keyword_table(&mut md, "Right", &dashboard.right_keywords);

    if !dashboard.biased_words.is_empty() {
        let _ = writeln!(md, "\n## Most Frequent Biased Words\n");
        let words: Vec<String> = dashboard
            .biased_words
            .iter()
            .map(|(w, c)| format!("{w} ({c})"))
            .collect();
        let _ = writeln!(md, "{}", words.join(", "));
    }

    md
}

/// Write the report to `path`, creating parent directories. Returns the path.
pub fn generate_report(outlet_name: &str, dashboard: &Dashboard, path: &str) -> Result<String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, render_report(outlet_name, dashboard))
        .with_context(|| format!("Failed to write report to {path}"))?;
    Ok(path.to_string())
}

fn write_keyword_table(md: &mut String, side: &str, counts: &KeywordCounts) {
    let _ = writeln!(md, "**{side}**\n");
    if counts.is_empty() {
        let _ = writeln!(md, "_none found_\n");
        return;
    }
    let _ = writeln!(md, "| Keyword | Count |");
    let _ = writeln!(md, "|---|---:|");
    for (word, count) in counts.iter() {
        let _ = writeln!(md, "| {word} | {count} |");
    }
    let _ = writeln!(md);
}

// Square brackets in a title would break the link syntax.
fn escape(title: &str) -> String {
    title.replace('[', "\\[").replace(']', "\\]")
}
