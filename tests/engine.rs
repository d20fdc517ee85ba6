use chrono::{DateTime, Duration, TimeZone, Utc};
use commitboard::{
    aggregate_by_contributor, aggregate_by_workspace, compute_stats, normalize_all,
    repository_stats, CommitRecord, DashboardViews, RawCommit,
};
use commitboard::filter::filter_contributors;
use pretty_assertions::assert_eq;

fn raw(hash: &str, author: &str, date: &str, project: &str) -> RawCommit {
    RawCommit {
        hash: Some(hash.to_string()),
        message: Some(format!("commit {hash}")),
        author: Some(author.to_string()),
        date: Some(date.to_string()),
        project: Some(project.to_string()),
        workspace: Some("team-one".to_string()),
    }
}

fn record(hash: &str, author: &str, project: &str, workspace: &str, ts: DateTime<Utc>) -> CommitRecord {
    CommitRecord {
        hash: hash.to_string(),
        message: format!("commit {hash}"),
        author: author.to_string(),
        timestamp: ts,
        project: project.to_string(),
        workspace: workspace.to_string(),
    }
}

fn ann_bo_records() -> (Vec<CommitRecord>, DateTime<Utc>, DateTime<Utc>) {
    let d1 = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
    let d2 = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
    let records = normalize_all(vec![
        raw("a1", "Ann <a@x.com>", "2024-03-01T10:00:00+00:00", "P1"),
        raw("a2", "Ann <a@x.com>", "2024-03-04T10:00:00+00:00", "P1"),
        raw("b1", "Bo", "2024-03-04T10:00:00+00:00", "P1"),
    ]);
    (records, d1, d2)
}

#[test]
fn ann_bo_grouping_scenario() {
    let (records, d1, d2) = ann_bo_records();
    let groups = aggregate_by_contributor(&records);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Ann");
    assert_eq!(groups[0].projects.len(), 1);
    assert_eq!(groups[0].projects[0].project, "P1");
    let ann_timestamps: Vec<_> = groups[0].projects[0].commits.iter().map(|c| c.timestamp).collect();
    assert_eq!(ann_timestamps, vec![d2, d1]);

    assert_eq!(groups[1].name, "Bo");
    assert_eq!(groups[1].projects[0].commits.len(), 1);
    assert_eq!(groups[1].projects[0].commits[0].timestamp, d2);
}

#[test]
fn ann_bo_stats_scenario() {
    let (records, _, d2) = ann_bo_records();
    let summary = compute_stats(&records, &d2);

    assert_eq!(summary.total_commits, 3);
    assert_eq!(summary.author_stats.len(), 2);
    assert_eq!(summary.author_stats["Ann"].total_commits, 2);
    assert_eq!(summary.author_stats["Ann"].percentage, 66.7);
    assert_eq!(summary.author_stats["Bo"].total_commits, 1);
    assert_eq!(summary.author_stats["Bo"].percentage, 33.3);
}

#[test]
fn empty_set_yields_zero_summary() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let summary = compute_stats(&[], &now);
    assert_eq!(summary.total_commits, 0);
    assert_eq!(summary.today_commits, 0);
    assert_eq!(summary.last_week_commits, 0);
    assert_eq!(summary.last_month_commits, 0);
    assert!(summary.author_stats.is_empty());
    assert!(summary.timeline.is_empty());
}

#[test]
fn record_missing_hash_is_dropped_silently() {
    let mut bad = raw("ignored", "Cara", "2024-03-02T09:00:00+00:00", "P1");
    bad.hash = None;
    let records = normalize_all(vec![
        raw("a1", "Ann", "2024-03-01T10:00:00+00:00", "P1"),
        bad,
        raw("b1", "Bo", "2024-03-03T10:00:00+00:00", "P1"),
    ]);

    assert_eq!(records.len(), 2);
    let groups = aggregate_by_contributor(&records);
    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Ann"]);
}

#[test]
fn grouping_is_a_partition_of_the_input() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let records = vec![
        record("a", "Ann", "p1", "w1", now - Duration::days(1)),
        record("b", "Ann", "p2", "w1", now - Duration::days(2)),
        record("c", "Bo", "p1", "w2", now - Duration::days(3)),
        record("d", "Cara", "p3", "w2", now - Duration::days(4)),
    ];

    let groups = aggregate_by_contributor(&records);
    let mut seen: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.projects.iter())
        .flat_map(|p| p.commits.iter().map(|c| c.hash.as_str()))
        .collect();
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c", "d"]);
}

#[test]
fn aggregation_is_idempotent() {
    let (records, _, _) = ann_bo_records();
    assert_eq!(aggregate_by_contributor(&records), aggregate_by_contributor(&records));
    assert_eq!(aggregate_by_workspace(&records), aggregate_by_workspace(&records));
}

#[test]
fn equal_timestamps_keep_fetch_order() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
    let records = vec![
        record("first", "Ann", "p1", "w1", ts),
        record("second", "Ann", "p1", "w1", ts),
        record("third", "Ann", "p1", "w1", ts),
    ];

    let groups = aggregate_by_contributor(&records);
    let hashes: Vec<_> = groups[0].projects[0].commits.iter().map(|c| c.hash.as_str()).collect();
    assert_eq!(hashes, vec!["first", "second", "third"]);
}

#[test]
fn filtering_never_grows_the_result() {
    let (records, _, _) = ann_bo_records();
    let unfiltered = filter_contributors(aggregate_by_contributor(&records), "");
    for query in ["a", "ann", "p1", "zzz"] {
        let filtered = filter_contributors(aggregate_by_contributor(&records), query);
        assert!(filtered.len() <= unfiltered.len(), "query {query:?} grew the view");
    }
}

#[test]
fn author_counts_and_percentages_sum_up() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let records = vec![
        record("a", "Ann", "p1", "w1", now - Duration::hours(1)),
        record("b", "Bo", "p1", "w1", now - Duration::hours(2)),
        record("c", "Cara", "p1", "w1", now - Duration::hours(3)),
    ];

    let summary = compute_stats(&records, &now);
    let count_sum: usize = summary.author_stats.values().map(|a| a.total_commits).sum();
    assert_eq!(count_sum, summary.total_commits);

    let pct_sum: f64 = summary.author_stats.values().map(|a| a.percentage).sum();
    let tolerance = 0.1 * summary.author_stats.len() as f64;
    assert!((pct_sum - 100.0).abs() <= tolerance, "percentages sum to {pct_sum}");
}

#[test]
fn repository_stats_scope_to_one_repository() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let records = vec![
        record("a", "Ann", "p1", "w1", now - Duration::hours(1)),
        record("b", "Ann", "p1", "w2", now - Duration::hours(2)),
        record("c", "Ann", "p2", "w1", now - Duration::hours(3)),
    ];

    let summary = repository_stats(&records, "w1", "p1", &now);
    assert_eq!(summary.total_commits, 1);
    assert_eq!(summary.author_stats["Ann"].percentage, 100.0);
}

#[test]
fn assembled_views_and_totals_reflect_the_query() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let records = vec![
        record("a", "Ann", "billing", "w1", now - Duration::hours(1)),
        record("b", "Ann", "web", "w1", now - Duration::hours(2)),
        record("c", "Bo", "web", "w2", now - Duration::hours(3)),
    ];

    let views = DashboardViews::assemble(&records, "web");
    let totals = views.project_totals();
    assert_eq!(totals.projects, 1);
    assert_eq!(totals.contributors, 2);
    assert_eq!(totals.commits, 2);

    let all = DashboardViews::build(&records);
    assert_eq!(all.contributor_totals().contributors, 2);
    assert_eq!(all.contributor_totals().projects, 2);
    assert_eq!(all.workspace_totals().workspaces, 2);
    assert_eq!(all.workspace_totals().commits, 3);
}

#[test]
fn summaries_serialize_with_dashboard_field_names() {
    let now = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
    let records = vec![record("a", "Ann", "p1", "w1", now - Duration::hours(1))];

    let summary = compute_stats(&records, &now);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_commits"], 1);
    assert_eq!(json["author_stats"]["Ann"]["percentage"], 100.0);
    assert!(json["timeline"].as_array().is_some());
}
