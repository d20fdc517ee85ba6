use crate::model::{ContributorGroup, ProjectGroup, WorkspaceGroup};
use crate::order::sort_by_recency;

/// Case-insensitive substring match; the query is lowercased once by the
/// callers below.
fn matches(haystack: &str, query_lower: &str) -> bool {
    haystack.to_lowercase().contains(query_lower)
}

/// Keep contributors whose name matches (whole group) or who have at least
/// one matching project (pruned to those projects). Group order is
/// recomputed from what remains.
pub fn filter_contributors(groups: Vec<ContributorGroup>, query: &str) -> Vec<ContributorGroup> {
    if query.is_empty() {
        return groups;
    }
    let q = query.to_lowercase();
    let mut kept: Vec<ContributorGroup> = groups
        .into_iter()
        .filter_map(|mut g| {
            if matches(&g.name, &q) {
                return Some(g);
            }
            g.projects.retain(|p| matches(&p.project, &q));
            if g.projects.is_empty() {
                None
            } else {
                Some(g)
            }
        })
        .collect();
    sort_by_recency(&mut kept);
    kept
}

/// Keep projects whose name matches (whole group) or with at least one
/// matching contributor (pruned to those contributors).
pub fn filter_projects(groups: Vec<ProjectGroup>, query: &str) -> Vec<ProjectGroup> {
    if query.is_empty() {
        return groups;
    }
    let q = query.to_lowercase();
    let mut kept: Vec<ProjectGroup> = groups
        .into_iter()
        .filter_map(|g| prune_project(g, &q))
        .collect();
    sort_by_recency(&mut kept);
    kept
}

/// Keep workspaces whose own name matches, or with matching projects or
/// contributors anywhere beneath them, pruned accordingly.
pub fn filter_workspaces(groups: Vec<WorkspaceGroup>, query: &str) -> Vec<WorkspaceGroup> {
    if query.is_empty() {
        return groups;
    }
    let q = query.to_lowercase();
    let mut kept: Vec<WorkspaceGroup> = groups
        .into_iter()
        .filter_map(|mut g| {
            if matches(&g.workspace, &q) {
                return Some(g);
            }
            g.projects = std::mem::take(&mut g.projects)
                .into_iter()
                .filter_map(|p| prune_project(p, &q))
                .collect();
            if g.projects.is_empty() {
                return None;
            }
            // Pruning shifts each project's newest remaining commit, so the
            // nested order has to be re-derived too.
            sort_by_recency(&mut g.projects);
            Some(g)
        })
        .collect();
    sort_by_recency(&mut kept);
    kept
}

fn prune_project(mut group: ProjectGroup, query_lower: &str) -> Option<ProjectGroup> {
    if matches(&group.project, query_lower) {
        return Some(group);
    }
    group.contributors.retain(|c| matches(&c.name, query_lower));
    if group.contributors.is_empty() {
        None
    } else {
        Some(group)
    }
}
