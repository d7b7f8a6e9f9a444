use profiler_core::{ContentItem, CoreError, ScoredItem, SentimentScorer, SentimentSummary};
use tracing::debug;

/// Items above this polarity count as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Items below this polarity count as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

const POSITIVE_OUTLOOK: f64 = 0.3;
const CRITICAL_OUTLOOK: f64 = -0.3;

pub const EMPTY_SUMMARY: &str = "No analyzable content found";

/// Scores every analyzable item and aggregates the results.
///
/// Blank and deleted items are skipped. Ratios are rounded independently
/// and need not sum to exactly 100.0.
pub fn analyze_sentiment<'a, S, I>(scorer: &S, items: I) -> Result<SentimentSummary, CoreError>
where
    S: SentimentScorer,
    I: IntoIterator<Item = &'a ContentItem>,
{
    let mut scored = Vec::new();
    for item in items {
        let Some(text) = item.analyzable_text() else {
            continue;
        };
        let sentiment = scorer.score(&text)?;
        scored.push(ScoredItem {
            kind: item.kind(),
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
            score: item.score,
            created_utc: item.created_utc,
        });
    }

    debug!("Scored {} items for sentiment", scored.len());
    Ok(summarize(scored))
}

fn summarize(scored: Vec<ScoredItem>) -> SentimentSummary {
    if scored.is_empty() {
        return SentimentSummary {
            overall_polarity: 0.0,
            overall_subjectivity: 0.0,
            positive_ratio: 0.0,
            negative_ratio: 0.0,
            neutral_ratio: 0.0,
            total_analyzed: 0,
            sentiment_summary: EMPTY_SUMMARY.to_string(),
            sentiment_distribution: Vec::new(),
        };
    }

    let total = scored.len();
    let count = total as f64;
    let mean_polarity = scored.iter().map(|s| s.polarity).sum::<f64>() / count;
    let mean_subjectivity = scored.iter().map(|s| s.subjectivity).sum::<f64>() / count;

    let positive = scored
        .iter()
        .filter(|s| s.polarity > POSITIVE_THRESHOLD)
        .count();
    let negative = scored
        .iter()
        .filter(|s| s.polarity < NEGATIVE_THRESHOLD)
        .count();
    let neutral = total - positive - negative;

    let overall_polarity = round_to(mean_polarity, 3);
    let positive_ratio = percentage(positive, total);
    let negative_ratio = percentage(negative, total);

    SentimentSummary {
        overall_polarity,
        overall_subjectivity: round_to(mean_subjectivity, 3),
        positive_ratio,
        negative_ratio,
        neutral_ratio: percentage(neutral, total),
        total_analyzed: total,
        sentiment_summary: describe(overall_polarity, positive_ratio, negative_ratio),
        sentiment_distribution: scored,
    }
}

fn describe(polarity: f64, positive_ratio: f64, negative_ratio: f64) -> String {
    if polarity > POSITIVE_OUTLOOK {
        format!(
            "Generally positive outlook ({:.1}% positive content)",
            positive_ratio
        )
    } else if polarity < CRITICAL_OUTLOOK {
        format!(
            "Tends toward criticism ({:.1}% negative content)",
            negative_ratio
        )
    } else {
        format!(
            "Balanced perspective ({:.1}% positive, {:.1}% negative)",
            positive_ratio, negative_ratio
        )
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    round_to(part as f64 / total as f64 * 100.0, 1)
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
