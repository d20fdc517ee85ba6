use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Workspace assigned to commits whose source carried none.
pub const DEFAULT_WORKSPACE: &str = "Default Workspace";

/// A commit as handed over by the fetch collaborator, before validation.
/// Every field is optional; the normalizer decides what is fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCommit {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub workspace: Option<String>,
}

/// Canonical normalized commit. `author` is the display name with any
/// trailing `<...>` identity suffix already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub project: String,
    pub workspace: String,
}

/// One contributor's commits within one project, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCommits {
    pub project: String,
    pub commits: Vec<CommitRecord>,
}

impl ProjectCommits {
    /// The `n` most recent commits (the dashboards preview three).
    pub fn recent(&self, n: usize) -> &[CommitRecord] {
        &self.commits[..self.commits.len().min(n)]
    }
}

/// A contributor and their per-project activity, projects ordered by
/// most recent commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorGroup {
    pub name: String,
    pub projects: Vec<ProjectCommits>,
}

impl ContributorGroup {
    /// Avatar initial: uppercased first character of the display name.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }

    pub fn commit_count(&self) -> usize {
        self.projects.iter().map(|p| p.commits.len()).sum()
    }
}

/// One contributor's commits inside a project group, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributorCommits {
    pub name: String,
    pub commits: Vec<CommitRecord>,
}

impl ContributorCommits {
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }

    pub fn recent(&self, n: usize) -> &[CommitRecord] {
        &self.commits[..self.commits.len().min(n)]
    }
}

/// A project and the contributors active in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub project: String,
    pub contributors: Vec<ContributorCommits>,
}

impl ProjectGroup {
    pub fn commit_count(&self) -> usize {
        self.contributors.iter().map(|c| c.commits.len()).sum()
    }
}

/// A workspace and the projects active in it, one nesting level above
/// [`ProjectGroup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceGroup {
    pub workspace: String,
    pub projects: Vec<ProjectGroup>,
}

impl WorkspaceGroup {
    pub fn commit_count(&self) -> usize {
        self.projects.iter().map(|p| p.commit_count()).sum()
    }
}

/// Per-author share of one repository's commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    pub total_commits: usize,
    /// Share of the repository total, rounded to one decimal place.
    pub percentage: f64,
}

/// One calendar day's commit counts, total and per author. `by_author`
/// carries an entry for every author present anywhere in the scoped set so
/// chart series stay equal-length across dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub date: NaiveDate,
    pub total: usize,
    pub by_author: BTreeMap<String, usize>,
}

/// Summary statistics for one repository's commit set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_commits: usize,
    pub today_commits: usize,
    pub last_week_commits: usize,
    pub last_month_commits: usize,
    pub author_stats: BTreeMap<String, AuthorStats>,
    pub timeline: Vec<TimelineBucket>,
}

/// Headline counters for the contributor view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorTotals {
    pub contributors: usize,
    pub projects: usize,
    pub commits: usize,
}

/// Headline counters for the project view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTotals {
    pub projects: usize,
    pub contributors: usize,
    pub commits: usize,
}

/// Headline counters for the workspace view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceTotals {
    pub workspaces: usize,
    pub projects: usize,
    pub contributors: usize,
    pub commits: usize,
}
