use crate::error::MalformedRecord;
use crate::model::{CommitRecord, RawCommit, DEFAULT_WORKSPACE};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::warn;

/// Validate and canonicalize one raw commit.
///
/// Fails when the hash or timestamp is absent/unparseable, the author
/// display name is empty after stripping, or the project name is missing.
/// A missing workspace falls back to the [`DEFAULT_WORKSPACE`] sentinel.
pub fn normalize(raw: RawCommit) -> Result<CommitRecord, MalformedRecord> {
    let hash = match raw.hash {
        Some(h) if !h.trim().is_empty() => h,
        _ => return Err(MalformedRecord::MissingHash),
    };

    let date = raw.date.ok_or(MalformedRecord::MissingTimestamp)?;
    let timestamp = match parse_timestamp(&date) {
        Some(ts) => ts,
        None => return Err(MalformedRecord::InvalidTimestamp(date)),
    };

    let author = display_name(raw.author.as_deref().unwrap_or(""))
        .ok_or(MalformedRecord::EmptyAuthor)?;

    let project = match raw.project {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(MalformedRecord::MissingProject),
    };

    let workspace = match raw.workspace {
        Some(w) if !w.trim().is_empty() => w,
        _ => DEFAULT_WORKSPACE.to_string(),
    };

    Ok(CommitRecord {
        hash,
        message: raw.message.unwrap_or_default(),
        author,
        timestamp,
        project,
        workspace,
    })
}

/// Normalize a whole fetch batch, dropping malformed records with a warning
/// instead of failing the batch.
pub fn normalize_all<I>(raw: I) -> Vec<CommitRecord>
where
    I: IntoIterator<Item = RawCommit>,
{
    let mut records = Vec::new();
    for r in raw {
        match normalize(r) {
            Ok(record) => records.push(record),
            Err(e) => warn!("dropping malformed commit record: {e}"),
        }
    }
    records
}

/// Extract the display name from a raw author string: everything left of
/// the first `<`, trimmed. Returns `None` when nothing remains.
pub fn display_name(raw: &str) -> Option<String> {
    let name = raw.split('<').next().unwrap_or("").trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Some(Utc.from_utc_datetime(&datetime));
        }
    }

    None
}
