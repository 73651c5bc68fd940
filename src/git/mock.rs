use std::collections::HashMap;

use crate::git::VersionControl;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    tags: Option<Vec<String>>,
    merge_bases: HashMap<(String, String), String>,
    current_branch: Option<String>,
    logs: HashMap<(String, String), Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags returned by `list_tags`, in the given order
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_current_branch(mut self, branch: impl Into<String>) -> Self {
        self.current_branch = Some(branch.into());
        self
    }

    pub fn with_merge_base(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        self.merge_bases.insert((a.into(), b.into()), base.into());
        self
    }

    /// Log lines (`<id> <subject>`) returned for exactly `from..to`
    pub fn with_log<I, S>(mut self, from: impl Into<String>, to: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.logs.insert(
            (from.into(), to.into()),
            lines.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl VersionControl for MockRepository {
    fn list_tags(&self) -> Option<Vec<String>> {
        self.tags.clone()
    }

    fn merge_base(&self, a: &str, b: &str) -> Option<String> {
        self.merge_bases
            .get(&(a.to_string(), b.to_string()))
            .cloned()
    }

    fn current_branch(&self) -> Option<String> {
        self.current_branch.clone()
    }

    fn log_range(&self, from: &str, to: &str) -> Option<Vec<String>> {
        self.logs.get(&(from.to_string(), to.to_string())).cloned()
    }
}
