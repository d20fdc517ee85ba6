use crate::model::{
    CommitRecord, ContributorCommits, ContributorGroup, ProjectCommits, ProjectGroup,
    WorkspaceGroup,
};
use chrono::{DateTime, Utc};

/// Anything orderable by its most recent commit.
pub trait Recency {
    /// Timestamp of the newest commit anywhere under this group, `None`
    /// when the group holds no commits. Computed from current contents, so
    /// it stays correct after filtering removed children.
    fn latest_commit(&self) -> Option<DateTime<Utc>>;
}

impl Recency for ProjectCommits {
    fn latest_commit(&self) -> Option<DateTime<Utc>> {
        self.commits.iter().map(|c| c.timestamp).max()
    }
}

impl Recency for ContributorCommits {
    fn latest_commit(&self) -> Option<DateTime<Utc>> {
        self.commits.iter().map(|c| c.timestamp).max()
    }
}

impl Recency for ContributorGroup {
    fn latest_commit(&self) -> Option<DateTime<Utc>> {
        self.projects.iter().filter_map(|p| p.latest_commit()).max()
    }
}

impl Recency for ProjectGroup {
    fn latest_commit(&self) -> Option<DateTime<Utc>> {
        self.contributors.iter().filter_map(|c| c.latest_commit()).max()
    }
}

impl Recency for WorkspaceGroup {
    fn latest_commit(&self) -> Option<DateTime<Utc>> {
        self.projects.iter().filter_map(|p| p.latest_commit()).max()
    }
}

/// Newest first. `sort_by` is stable, so commits sharing a timestamp keep
/// their original fetch order.
pub fn sort_commits_desc(commits: &mut [CommitRecord]) {
    commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Order groups by their most recent commit, newest first; empty groups
/// sink to the end. Stable, so equally-recent groups keep first-seen order.
pub fn sort_by_recency<T: Recency>(groups: &mut [T]) {
    groups.sort_by(|a, b| b.latest_commit().cmp(&a.latest_commit()));
}
