// Colored terminal output for the bias dashboard and single-text scores.
//
// main.rs delegates all terminal formatting here.

use colored::Colorize;

use crate::analysis::{Dashboard, Verdict};
use crate::bias::KeywordCounts;
use crate::news::Outlet;

const BAR_WIDTH: usize = 20;

/// Display the full dashboard for one outlet.
pub fn display_dashboard(outlet_name: &str, dashboard: &Dashboard) {
    println!(
        "\n{}",
        format!(
            "=== Bias Dashboard: {} ({} articles) ===",
            outlet_name, dashboard.article_count
        )
        .bold()
    );
    println!();

    println!(
        "  Verdict: {}  (mean bias {:+.3})",
        colorize_verdict(dashboard.verdict),
        dashboard.mean_bias
    );
    println!("  Mean sentiment: {:+.3}", dashboard.mean_sentiment);

    let total = dashboard.article_count;
    let bias = &dashboard.bias_distribution;
    println!("\n  {}", "Bias distribution".bold());
    print_share("Left", bias.left, total, Color::Left);
    print_share("Neutral", bias.neutral, total, Color::Neutral);
    print_share("Right", bias.right, total, Color::Right);

    let sentiment = &dashboard.sentiment_distribution;
    println!("\n  {}", "Sentiment distribution".bold());
    print_share("Positive", sentiment.positive, total, Color::Positive);
    print_share("Neutral", sentiment.neutral, total, Color::Neutral);
    print_share("Negative", sentiment.negative, total, Color::Negative);

    if !dashboard.daily_trend.is_empty() {
        println!("\n  {}", "Daily bias trend".bold());
        for day in &dashboard.daily_trend {
            println!(
                "    {}  {:+.3}  {}",
                day.date,
                day.mean_bias,
                format!("({} articles)", day.articles).dimmed()
            );
        }
    }

    println!("\n  {}", "Most left-leaning headlines".bold());
    for (i, h) in dashboard.most_left.iter().enumerate() {
        println!(
            "    {}. [{:+.3}] {}",
            i + 1,
            h.bias,
            super::truncate_chars(&h.title, 100).blue()
        );
    }

    println!("\n  {}", "Most right-leaning headlines".bold());
    for (i, h) in dashboard.most_right.iter().enumerate() {
        println!(
            "    {}. [{:+.3}] {}",
            i + 1,
            h.bias,
            super::truncate_chars(&h.title, 100).red()
        );
    }

    display_keyword_tables(&dashboard.left_keywords, &dashboard.right_keywords);

    if !dashboard.biased_words.is_empty() {
        println!("\n  {}", "Most frequent biased words".bold());
        let words: Vec<String> = dashboard
            .biased_words
            .iter()
            .map(|(word, count)| format!("{word} ({count})"))
            .collect();
        println!("    {}", words.join(", ").dimmed());
    }
    println!();
}

/// Display the left and right keyword tables side by side.
pub fn display_keyword_tables(left: &KeywordCounts, right: &KeywordCounts) {
    println!(
        "\n  {:<28} {}",
        "Left keywords".blue().bold(),
        "Right keywords".red().bold()
    );
    println!("  {}", "-".repeat(54).dimmed());

    let rows = left.len().max(right.len());
    if rows == 0 {
        println!("  {}", "(no ideological keywords found)".dimmed());
        return;
    }

    let mut left_rows = left.iter();
    let mut right_rows = right.iter();
    for _ in 0..rows {
        let l = left_rows
            .next()
            .map(|(w, c)| format!("{w:<20} {c:>5}"))
            .unwrap_or_default();
        let r = right_rows
            .next()
            .map(|(w, c)| format!("{w:<20} {c:>5}"))
            .unwrap_or_default();
        println!("  {l:<28} {r}");
    }
}

/// Display the bias and sentiment of a single text.
pub fn display_text_score(text: &str, bias: f64, sentiment: f64) {
    println!("\n{}", "=== Text Score ===".bold());
    println!("  {}", super::truncate_chars(text, 140).dimmed());
    println!(
        "  Bias: {:+.3}  {}",
        bias,
        colorize_verdict(Verdict::from_mean_bias(bias))
    );
    println!("  Sentiment: {sentiment:+.3}");
}

/// List the selectable outlets.
pub fn display_sources(outlets: &[Outlet]) {
    println!("\n{}", "=== Available Sources ===".bold());
    for outlet in outlets {
        println!("  {:<28} {}", outlet.name, outlet.id.dimmed());
    }
}

enum Color {
    Left,
    Right,
    Positive,
    Negative,
    Neutral,
}

fn print_share(label: &str, count: usize, total: usize, color: Color) {
    let share = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    };
    let filled = (share * BAR_WIDTH as f64).round() as usize;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH.saturating_sub(filled))
    );
    let bar = match color {
        Color::Left => bar.blue(),
        Color::Right => bar.red(),
        Color::Positive => bar.green(),
        Color::Negative => bar.bright_red(),
        Color::Neutral => bar.dimmed(),
    };
    println!("    {label:<10} {bar} {count:>4} ({:.0}%)", share * 100.0);
}

fn colorize_verdict(verdict: Verdict) -> colored::ColoredString {
    let label = verdict.to_string();
    match verdict {
        Verdict::LeftLeaning => label.blue().bold(),
        Verdict::RightLeaning => label.red().bold(),
        Verdict::Centrist => label.green().bold(),
    }
}
