use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitboardError>;

#[derive(Error, Debug)]
pub enum CommitboardError {
    #[error("malformed commit record: {0}")]
    MalformedRecord(#[from] MalformedRecord),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Why a raw commit failed normalization. Bulk paths drop the record and
/// keep going; one bad commit must not blank a dashboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("missing commit hash")]
    MissingHash,
    #[error("missing commit timestamp")]
    MissingTimestamp,
    #[error("unparseable commit timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("author display name is empty")]
    EmptyAuthor,
    #[error("missing project name")]
    MissingProject,
}

/// Errors surfaced by the fetch collaborator. The engine treats these as
/// opaque and never retries; retry policy belongs to the collaborator.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(#[source] anyhow::Error),
    #[error("repository {workspace}/{project} not found")]
    NotFound { workspace: String, project: String },
    #[error("authentication failed: {0}")]
    Auth(String),
}
