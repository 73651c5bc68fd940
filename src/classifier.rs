//! Commit classification into release-note buckets

use tracing::trace;

use crate::domain::{Buckets, Category, CommitRecord};
use crate::reader::LogEntry;

/// Sort commits into the four buckets.
///
/// Subjects outside the grammar and unreported types are dropped silently.
/// Bucket order follows input order.
pub fn classify(entries: &[LogEntry]) -> Buckets {
    let mut buckets = Buckets::new();

    for entry in entries {
        let Some(record) = CommitRecord::parse(entry.id.as_str(), &entry.subject) else {
            trace!(id = %entry.id, "subject does not follow the grammar");
            continue;
        };

        match Category::route(&record) {
            Some(category) => buckets.push(category, record),
            None => trace!(id = %entry.id, commit_type = %record.r#type, "type not reported"),
        }
    }

    buckets
}
