//! Commit aggregation and analytics engine for source-control dashboards.
//!
//! Takes a flat collection of raw commit records (author, project,
//! workspace, hash, message, timestamp) and produces the grouped, sorted,
//! statistically-annotated structures behind three dashboard views: by
//! contributor, by project, and by workspace.
//!
//! The engine is a pure, synchronous transformation: it does not fetch,
//! authenticate, or persist anything, and performs no I/O. Fetching and the
//! reference clock are collaborator traits (see [`source`]); every
//! aggregation call rebuilds its output from the complete record snapshot
//! it is given.

pub mod error;
pub mod filter;
pub mod group;
pub mod model;
pub mod normalize;
pub mod order;
pub mod source;
pub mod stats;
pub mod util;
pub mod views;

pub use error::{CommitboardError, FetchError, MalformedRecord, Result};
pub use filter::{filter_contributors, filter_projects, filter_workspaces};
pub use model::{
    AuthorStats, CommitRecord, ContributorCommits, ContributorGroup, ContributorTotals,
    ProjectCommits, ProjectGroup, ProjectTotals, RawCommit, StatsSummary, TimelineBucket,
    WorkspaceGroup, WorkspaceTotals, DEFAULT_WORKSPACE,
};
pub use normalize::{normalize, normalize_all};
pub use source::{collect_records, Clock, CommitSource, FixedClock, SystemClock};
pub use stats::compute_stats;
pub use views::{
    aggregate_by_contributor, aggregate_by_project, aggregate_by_workspace, repository_stats,
    DashboardViews,
};
