//! Commit log reading

use tracing::debug;

use crate::domain::ReleaseRange;
use crate::git::VersionControl;

/// A commit as listed by the log: full id and first-line subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: String,
    pub subject: String,
}

impl LogEntry {
    /// Split a `<id> <subject>` line. Lines without a subject are skipped.
    pub fn from_line(line: &str) -> Option<Self> {
        let (id, subject) = line.split_once(' ')?;
        if id.is_empty() {
            return None;
        }

        Some(LogEntry {
            id: id.to_string(),
            subject: subject.to_string(),
        })
    }
}

/// Commits in `range`, newest first.
///
/// A failed query reads as an empty range.
pub fn read_commits<V: VersionControl + ?Sized>(vcs: &V, range: &ReleaseRange) -> Vec<LogEntry> {
    let Some(lines) = vcs.log_range(&range.from_ref, &range.to_ref) else {
        debug!(%range, "log query returned nothing");
        return Vec::new();
    };

    let entries: Vec<LogEntry> = lines.iter().filter_map(|l| LogEntry::from_line(l)).collect();
    debug!(%range, count = entries.len(), "read commits");
    entries
}
