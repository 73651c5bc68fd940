use std::fmt;

/// References longer than this are treated as commit ids when displayed
const DISPLAY_SHORTEN_THRESHOLD: usize = 20;
const SHORT_ID_LEN: usize = 7;

/// The `(from, to)` pair bounding the commit log query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRange {
    /// Exclusive start; never empty
    pub from_ref: String,
    /// Inclusive end
    pub to_ref: String,
}

impl ReleaseRange {
    pub fn new(from_ref: impl Into<String>, to_ref: impl Into<String>) -> Self {
        ReleaseRange {
            from_ref: from_ref.into(),
            to_ref: to_ref.into(),
        }
    }

    /// `from...to` appended to a comparison base URL
    pub fn compare_url(&self, compare_base_url: &str) -> String {
        format!("{}{}...{}", compare_base_url, self.from_ref, self.to_ref)
    }

    /// `from...to` with long ids shortened for display
    pub fn display_label(&self) -> String {
        format!(
            "{}...{}",
            display_ref(&self.from_ref),
            display_ref(&self.to_ref)
        )
    }
}

impl fmt::Display for ReleaseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from_ref, self.to_ref)
    }
}

/// Shortens full commit ids to seven characters; tag and branch names are kept.
pub fn display_ref(reference: &str) -> &str {
    if reference.chars().count() <= DISPLAY_SHORTEN_THRESHOLD {
        return reference;
    }

    match reference.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &reference[..end],
        None => reference,
    }
}
