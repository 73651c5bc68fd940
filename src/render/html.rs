//! HTML release-note formatter

use tracing::debug;

use super::{NoteFormatter, NO_CHANGES_SENTENCE};
use crate::domain::{Buckets, Category, CommitRecord, ReleaseRange};

/// HTML formatter for the update-feed body
pub struct HtmlFormatter {
    pub commit_base_url: String,
    pub compare_base_url: String,
}

impl HtmlFormatter {
    pub fn new(commit_base_url: impl Into<String>, compare_base_url: impl Into<String>) -> Self {
        Self {
            commit_base_url: commit_base_url.into(),
            compare_base_url: compare_base_url.into(),
        }
    }

    fn heading(category: Category) -> String {
        let tag = if category.is_nested() { "h4" } else { "h3" };
        format!("<{tag}>{}</{tag}>", escape(category.title()))
    }

    fn entry(&self, commit: &CommitRecord) -> String {
        format!(
            "<li><a href=\"{}{}\"><tt>{}</tt></a> <b>{}:</b> ({})</li>",
            escape(&self.commit_base_url),
            escape(&commit.id),
            escape(commit.short_id()),
            escape(&commit.prefix()),
            escape(&commit.summary)
        )
    }
}

impl NoteFormatter for HtmlFormatter {
    fn format_body(&self, buckets: &Buckets) -> String {
        if buckets.is_empty() {
            return format!("<p><i>{}</i></p>", NO_CHANGES_SENTENCE);
        }

        let mut lines = Vec::new();

        for (category, commits) in buckets.non_empty() {
            lines.push(Self::heading(category));
            lines.push("<ul>".to_string());
            lines.extend(commits.iter().map(|commit| self.entry(commit)));
            lines.push("</ul>".to_string());
        }

        let output = lines.join("\n");
        debug!(output_len = output.len(), "html notes formatted");
        output
    }

    fn format_footer(&self, range: &ReleaseRange) -> String {
        format!(
            "<p><b>See more changes: <a href=\"{}\">{}</a></b></p>",
            escape(&range.compare_url(&self.compare_base_url)),
            escape(&range.display_label())
        )
    }
}

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
