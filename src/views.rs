use crate::filter::{filter_contributors, filter_projects, filter_workspaces};
use crate::group::{group_records, GroupNode, BY_CONTRIBUTOR, BY_PROJECT, BY_WORKSPACE};
use crate::model::{
    CommitRecord, ContributorCommits, ContributorGroup, ContributorTotals, ProjectCommits,
    ProjectGroup, ProjectTotals, StatsSummary, WorkspaceGroup, WorkspaceTotals,
};
use crate::order::{sort_by_recency, sort_commits_desc};
use crate::stats::compute_stats;
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Group records by contributor, then project. Groups and leaves come back
/// in recency order.
pub fn aggregate_by_contributor(records: &[CommitRecord]) -> Vec<ContributorGroup> {
    let mut groups: Vec<ContributorGroup> = group_records(records, BY_CONTRIBUTOR)
        .into_branch()
        .into_iter()
        .map(|(name, node)| {
            let mut projects: Vec<ProjectCommits> = node
                .into_branch()
                .into_iter()
                .map(|(project, leaf)| {
                    let mut commits = leaf.into_leaf();
                    sort_commits_desc(&mut commits);
                    ProjectCommits { project, commits }
                })
                .collect();
            sort_by_recency(&mut projects);
            ContributorGroup { name, projects }
        })
        .collect();
    sort_by_recency(&mut groups);
    groups
}

/// Group records by project, then contributor.
pub fn aggregate_by_project(records: &[CommitRecord]) -> Vec<ProjectGroup> {
    let mut groups: Vec<ProjectGroup> = group_records(records, BY_PROJECT)
        .into_branch()
        .into_iter()
        .map(|(project, node)| project_group(project, node))
        .collect();
    sort_by_recency(&mut groups);
    groups
}

/// Group records by workspace, then project, then contributor.
pub fn aggregate_by_workspace(records: &[CommitRecord]) -> Vec<WorkspaceGroup> {
    let mut groups: Vec<WorkspaceGroup> = group_records(records, BY_WORKSPACE)
        .into_branch()
        .into_iter()
        .map(|(workspace, node)| {
            let mut projects: Vec<ProjectGroup> = node
                .into_branch()
                .into_iter()
                .map(|(project, inner)| project_group(project, inner))
                .collect();
            sort_by_recency(&mut projects);
            WorkspaceGroup { workspace, projects }
        })
        .collect();
    sort_by_recency(&mut groups);
    groups
}

fn project_group(project: String, node: GroupNode) -> ProjectGroup {
    let mut contributors: Vec<ContributorCommits> = node
        .into_branch()
        .into_iter()
        .map(|(name, leaf)| {
            let mut commits = leaf.into_leaf();
            sort_commits_desc(&mut commits);
            ContributorCommits { name, commits }
        })
        .collect();
    sort_by_recency(&mut contributors);
    ProjectGroup { project, contributors }
}

/// The three dashboard views built from one record snapshot, optionally
/// narrowed by a search query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    pub by_contributor: Vec<ContributorGroup>,
    pub by_project: Vec<ProjectGroup>,
    pub by_workspace: Vec<WorkspaceGroup>,
}

impl DashboardViews {
    pub fn build(records: &[CommitRecord]) -> Self {
        Self::assemble(records, "")
    }

    /// Full pipeline for one render cycle: three grouping passes, recency
    /// ordering, then the view-specific filters. Each call rebuilds from
    /// scratch; callers discard the previous snapshot.
    pub fn assemble(records: &[CommitRecord], query: &str) -> Self {
        Self {
            by_contributor: filter_contributors(aggregate_by_contributor(records), query),
            by_project: filter_projects(aggregate_by_project(records), query),
            by_workspace: filter_workspaces(aggregate_by_workspace(records), query),
        }
    }

    /// Headline counters over the (already filtered) contributor view.
    pub fn contributor_totals(&self) -> ContributorTotals {
        let projects: HashSet<&str> = self
            .by_contributor
            .iter()
            .flat_map(|g| g.projects.iter().map(|p| p.project.as_str()))
            .collect();
        ContributorTotals {
            contributors: self.by_contributor.len(),
            projects: projects.len(),
            commits: self.by_contributor.iter().map(|g| g.commit_count()).sum(),
        }
    }

    pub fn project_totals(&self) -> ProjectTotals {
        let contributors: HashSet<&str> = self
            .by_project
            .iter()
            .flat_map(|g| g.contributors.iter().map(|c| c.name.as_str()))
            .collect();
        ProjectTotals {
            projects: self.by_project.len(),
            contributors: contributors.len(),
            commits: self.by_project.iter().map(|g| g.commit_count()).sum(),
        }
    }

    pub fn workspace_totals(&self) -> WorkspaceTotals {
        let contributors: HashSet<&str> = self
            .by_workspace
            .iter()
            .flat_map(|w| w.projects.iter())
            .flat_map(|p| p.contributors.iter().map(|c| c.name.as_str()))
            .collect();
        WorkspaceTotals {
            workspaces: self.by_workspace.len(),
            projects: self.by_workspace.iter().map(|w| w.projects.len()).sum(),
            contributors: contributors.len(),
            commits: self.by_workspace.iter().map(|w| w.commit_count()).sum(),
        }
    }
}

/// Statistics scoped to one repository (workspace + project), computed on
/// demand rather than eagerly for every repository.
pub fn repository_stats<Tz: TimeZone>(
    records: &[CommitRecord],
    workspace: &str,
    project: &str,
    now: &DateTime<Tz>,
) -> StatsSummary {
    let scoped: Vec<CommitRecord> = records
        .iter()
        .filter(|r| r.workspace == workspace && r.project == project)
        .cloned()
        .collect();
    compute_stats(&scoped, now)
}
