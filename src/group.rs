use crate::model::CommitRecord;
use std::collections::HashMap;

/// Extracts one grouping key from a record. Keys are the already-normalized
/// values, compared case-sensitively.
pub type KeyFn = fn(&CommitRecord) -> &str;

pub fn author_key(r: &CommitRecord) -> &str {
    &r.author
}

pub fn project_key(r: &CommitRecord) -> &str {
    &r.project
}

pub fn workspace_key(r: &CommitRecord) -> &str {
    &r.workspace
}

/// Key order for the contributor view: contributor, then project.
pub const BY_CONTRIBUTOR: &[KeyFn] = &[author_key, project_key];
/// Key order for the project view: project, then contributor.
pub const BY_PROJECT: &[KeyFn] = &[project_key, author_key];
/// Key order for the workspace view: workspace, project, contributor.
pub const BY_WORKSPACE: &[KeyFn] = &[workspace_key, project_key, author_key];

/// Nested grouping produced by [`group_records`]. Branch entries appear in
/// first-seen order; leaf commits keep input order. Recency ordering is the
/// sorter's job, not the grouping engine's.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupNode {
    Leaf(Vec<CommitRecord>),
    Branch(Vec<(String, GroupNode)>),
}

impl GroupNode {
    pub fn into_branch(self) -> Vec<(String, GroupNode)> {
        match self {
            GroupNode::Branch(children) => children,
            GroupNode::Leaf(_) => Vec::new(),
        }
    }

    pub fn into_leaf(self) -> Vec<CommitRecord> {
        match self {
            GroupNode::Leaf(commits) => commits,
            GroupNode::Branch(_) => Vec::new(),
        }
    }
}

/// Build a nested grouping from a flat record sequence and an ordered list
/// of key extractors. Group membership is deterministic and independent of
/// input order; empty input yields an empty branch.
pub fn group_records(records: &[CommitRecord], keys: &[KeyFn]) -> GroupNode {
    let (key, rest) = match keys.split_first() {
        Some(split) => split,
        None => return GroupNode::Leaf(records.to_vec()),
    };

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<CommitRecord>)> = Vec::new();

    for r in records {
        let k = key(r);
        let i = match index.get(k) {
            Some(&i) => i,
            None => {
                buckets.push((k.to_string(), Vec::new()));
                index.insert(k, buckets.len() - 1);
                buckets.len() - 1
            }
        };
        buckets[i].1.push(r.clone());
    }

    GroupNode::Branch(
        buckets
            .into_iter()
            .map(|(k, members)| (k, group_records(&members, rest)))
            .collect(),
    )
}
