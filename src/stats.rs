use crate::model::{AuthorStats, CommitRecord, StatsSummary, TimelineBucket};
use crate::util::round1;
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Summarize a record set scoped to one repository against an injected
/// reference instant. Calendar-date decisions (today, timeline buckets) are
/// made in `now`'s timezone; the 7- and 30-day windows are inclusive at the
/// exact boundary. Empty input yields the all-zero summary.
pub fn compute_stats<Tz: TimeZone>(records: &[CommitRecord], now: &DateTime<Tz>) -> StatsSummary {
    if records.is_empty() {
        return StatsSummary::default();
    }

    let tz = now.timezone();
    let today = now.date_naive();
    let week = Duration::days(7);
    let month = Duration::days(30);

    let total_commits = records.len();
    let mut today_commits = 0;
    let mut last_week_commits = 0;
    let mut last_month_commits = 0;

    let mut author_counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut day_totals: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut day_authors: BTreeMap<NaiveDate, BTreeMap<&str, usize>> = BTreeMap::new();

    for r in records {
        let local_date = r.timestamp.with_timezone(&tz).date_naive();
        if local_date == today {
            today_commits += 1;
        }

        let age = now.clone().signed_duration_since(r.timestamp);
        if age <= week {
            last_week_commits += 1;
        }
        if age <= month {
            last_month_commits += 1;
        }

        *author_counts.entry(&r.author).or_insert(0) += 1;
        *day_totals.entry(local_date).or_insert(0) += 1;
        *day_authors.entry(local_date).or_default().entry(&r.author).or_insert(0) += 1;
    }

    let author_stats = author_counts
        .iter()
        .map(|(&author, &count)| {
            let percentage = round1(100.0 * count as f64 / total_commits as f64);
            (author.to_string(), AuthorStats { total_commits: count, percentage })
        })
        .collect();

    // Zero-fill every author on every date so chart series stay aligned.
    let timeline = day_totals
        .iter()
        .map(|(&date, &total)| {
            let on_date = day_authors.get(&date);
            let by_author = author_counts
                .keys()
                .map(|&author| {
                    let count = on_date.and_then(|m| m.get(author)).copied().unwrap_or(0);
                    (author.to_string(), count)
                })
                .collect();
            TimelineBucket { date, total, by_author }
        })
        .collect();

    StatsSummary {
        total_commits,
        today_commits,
        last_week_commits,
        last_month_commits,
        author_stats,
        timeline,
    }
}
