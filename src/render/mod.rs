//! Release-note rendering
//!
//! Both documents list the non-empty buckets in [crate::domain::Category::ALL] order and
//! end with a comparison-link footer:
//!
//! - [markdown::MarkdownFormatter]: appended to the persistent notes file
//! - [html::HtmlFormatter]: the body shown by the update feed

pub mod html;
pub mod markdown;

pub use html::HtmlFormatter;
pub use markdown::MarkdownFormatter;

use crate::config::RepositoryConfig;
use crate::domain::{Buckets, ReleaseRange};

/// Sentence rendered instead of any list when every bucket is empty
pub const NO_CHANGES_SENTENCE: &str = "No significant changes in this version.";

/// Formats classified buckets as one kind of document
pub trait NoteFormatter {
    /// Sections for every non-empty bucket, or the placeholder when all are empty
    fn format_body(&self, buckets: &Buckets) -> String;

    /// Comparison link for `range`
    fn format_footer(&self, range: &ReleaseRange) -> String;
}

/// A rendered document split into body and footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub body: String,
    pub footer: String,
}

impl RenderedDocument {
    pub fn render<F: NoteFormatter + ?Sized>(
        formatter: &F,
        buckets: &Buckets,
        range: &ReleaseRange,
    ) -> Self {
        RenderedDocument {
            body: formatter.format_body(buckets),
            footer: formatter.format_footer(range),
        }
    }
}

/// Both rendered documents for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    pub markdown: RenderedDocument,
    pub html: RenderedDocument,
    /// Number of reportable commits
    pub total: usize,
}

impl ReleaseNotes {
    pub fn has_changes(&self) -> bool {
        self.total > 0
    }
}

/// Render both documents for `buckets` over `range`
pub fn render_notes(
    buckets: &Buckets,
    range: &ReleaseRange,
    repository: &RepositoryConfig,
) -> ReleaseNotes {
    let markdown = MarkdownFormatter::new(repository.compare_base_url());
    let html = HtmlFormatter::new(repository.commit_base_url(), repository.compare_base_url());

    ReleaseNotes {
        markdown: RenderedDocument::render(&markdown, buckets, range),
        html: RenderedDocument::render(&html, buckets, range),
        total: buckets.total(),
    }
}
