//! Markdown release-note formatter

use tracing::debug;

use super::{NoteFormatter, NO_CHANGES_SENTENCE};
use crate::domain::{Buckets, Category, CommitRecord, ReleaseRange};

/// Markdown formatter for the persistent notes file
pub struct MarkdownFormatter {
    /// Base URL the `from...to` suffix is appended to
    pub compare_base_url: String,
}

impl MarkdownFormatter {
    pub fn new(compare_base_url: impl Into<String>) -> Self {
        Self {
            compare_base_url: compare_base_url.into(),
        }
    }

    fn heading(category: Category) -> String {
        let marker = if category.is_nested() { "###" } else { "##" };
        format!("{} **{}**", marker, category.title())
    }

    fn entry(commit: &CommitRecord) -> String {
        format!(
            "- ({}) **{}:** ({})",
            commit.short_id(),
            commit.prefix(),
            commit.summary
        )
    }
}

impl NoteFormatter for MarkdownFormatter {
    fn format_body(&self, buckets: &Buckets) -> String {
        if buckets.is_empty() {
            return format!("*{}*\n", NO_CHANGES_SENTENCE);
        }

        let mut lines = Vec::new();

        for (category, commits) in buckets.non_empty() {
            lines.push(Self::heading(category));
            lines.extend(commits.iter().map(Self::entry));
            lines.push("\n---\n".to_string());
        }

        let output = lines.join("\n").trim().to_string();
        debug!(output_len = output.len(), "markdown notes formatted");
        output
    }

    fn format_footer(&self, range: &ReleaseRange) -> String {
        format!(
            "\n\n**See more changes: [{}]({})**",
            range.display_label(),
            range.compare_url(&self.compare_base_url)
        )
    }
}
