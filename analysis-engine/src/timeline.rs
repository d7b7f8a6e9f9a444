use profiler_core::{utc_datetime, ContentItem, ContentKind, TimelineEntry};
use std::collections::BTreeMap;

#[derive(Default)]
struct DayActivity {
    posts: usize,
    comments: usize,
    total_score: i64,
}

/// Buckets every item by its UTC calendar date, oldest date first.
///
/// Blank and deleted items still count towards activity and score.
pub fn build_timeline<'a, I>(items: I) -> Vec<TimelineEntry>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    // ISO dates sort lexicographically in chronological order
    let mut days: BTreeMap<String, DayActivity> = BTreeMap::new();

    for item in items {
        let day = days.entry(utc_date(item.created_utc)).or_default();
        match item.kind() {
            ContentKind::Post => day.posts += 1,
            ContentKind::Comment => day.comments += 1,
        }
        day.total_score += item.score;
    }

    days.into_iter()
        .map(|(date, day)| TimelineEntry {
            date,
            posts: day.posts,
            comments: day.comments,
            total_activity: day.posts + day.comments,
            total_score: day.total_score,
        })
        .collect()
}

fn utc_date(timestamp: i64) -> String {
    utc_datetime(timestamp)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2022-01-01T00:00:00Z
    const NEW_YEAR: i64 = 1_640_995_200;
    const DAY: i64 = 86_400;

    #[test]
    fn test_groups_by_utc_date() {
        let items = vec![
            ContentItem::post("p1", "rust", "t", "b", 10, NEW_YEAR + 3_600),
            ContentItem::comment("c1", "rust", "x", -2, NEW_YEAR + DAY - 1, "t3_p1"),
            ContentItem::comment("c2", "rust", "y", 5, NEW_YEAR + DAY, "t3_p1"),
        ];

        let timeline = build_timeline(&items);
        assert_eq!(
            timeline,
            vec![
                TimelineEntry {
                    date: "2022-01-01".to_string(),
                    posts: 1,
                    comments: 1,
                    total_activity: 2,
                    total_score: 8,
                },
                TimelineEntry {
                    date: "2022-01-02".to_string(),
                    posts: 0,
                    comments: 1,
                    total_activity: 1,
                    total_score: 5,
                },
            ]
        );
    }

    #[test]
    fn test_entries_sorted_ascending() {
        let items = vec![
            ContentItem::comment("c1", "a", "x", 1, NEW_YEAR + 40 * DAY, "p"),
            ContentItem::comment("c2", "a", "x", 1, NEW_YEAR - 400 * DAY, "p"),
            ContentItem::post("p1", "a", "t", "", 1, NEW_YEAR),
        ];

        let timeline = build_timeline(&items);
        let dates: Vec<&str> = timeline.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2020-11-27", "2022-01-01", "2022-02-10"]);
        assert!(timeline.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_deleted_items_still_counted() {
        let items = vec![ContentItem::comment("c1", "a", "[deleted]", 0, NEW_YEAR, "p")];
        let timeline = build_timeline(&items);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].comments, 1);
    }

    #[test]
    fn test_totals_match_input() {
        let mut items = Vec::new();
        for i in 0..7 {
            items.push(ContentItem::post(format!("p{i}"), "a", "t", "", 1, NEW_YEAR + i * 5_000));
        }
        for i in 0..11 {
            items.push(ContentItem::comment(
                format!("c{i}"),
                "a",
                "",
                2,
                NEW_YEAR + i * 20_000,
                "p",
            ));
        }

        let timeline = build_timeline(&items);
        assert_eq!(timeline.iter().map(|e| e.posts).sum::<usize>(), 7);
        assert_eq!(timeline.iter().map(|e| e.comments).sum::<usize>(), 11);
        assert_eq!(timeline.iter().map(|e| e.total_score).sum::<i64>(), 29);
    }

    #[test]
    fn test_far_future_timestamp_not_dated_epoch() {
        let items = vec![ContentItem::comment("c1", "a", "x", 1, i64::MAX, "p")];
        let timeline = build_timeline(&items);
        assert_eq!(timeline.len(), 1);
        assert_ne!(timeline[0].date, "1970-01-01");
        assert!(timeline[0].date.ends_with("-12-31"));
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<ContentItem> = Vec::new();
        assert!(build_timeline(&items).is_empty());
    }
}
