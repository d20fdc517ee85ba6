use crate::error::FetchError;
use crate::model::{CommitRecord, RawCommit};
use crate::normalize::normalize_all;
use chrono::{DateTime, Utc};
use log::debug;

/// The remote source-control API boundary. Implementations own transport,
/// credentials and retry policy; the engine only consumes the result.
pub trait CommitSource {
    fn fetch_commits(&self, workspace: &str, project: &str)
        -> Result<Vec<RawCommit>, FetchError>;
}

/// Reference-instant supplier for statistics, injectable so tests stay
/// deterministic.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the instant it was built with.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Fetch every listed `(workspace, project)` repository, tag the commits
/// with their repository coordinates, and normalize the merged batch.
/// Malformed records are dropped; a fetch error surfaces unchanged.
pub fn collect_records<S: CommitSource>(
    source: &S,
    repos: &[(&str, &str)],
) -> Result<Vec<CommitRecord>, FetchError> {
    let mut raw = Vec::new();
    for &(workspace, project) in repos {
        let mut batch = source.fetch_commits(workspace, project)?;
        debug!("fetched {} commits from {workspace}/{project}", batch.len());
        for c in &mut batch {
            // The remote API scopes commits by repository; tag them so the
            // grouping keys survive the merge into one flat set.
            c.workspace.get_or_insert_with(|| workspace.to_string());
            c.project.get_or_insert_with(|| project.to_string());
        }
        raw.extend(batch);
    }
    Ok(normalize_all(raw))
}
