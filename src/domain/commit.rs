use regex::Regex;
use std::sync::OnceLock;

/// `type[(scope)]: summary`, anchored at both ends
const SUBJECT_PATTERN: &str = r"^([a-z]+)(?:\(([^)]+)\))?:\s*(.+)$";

fn subject_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SUBJECT_PATTERN).expect("subject pattern is valid"))
}

/// One commit whose subject follows the conventional commit grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit id as reported by version control
    pub id: String,
    /// Raw first line of the commit message
    pub subject: String,
    pub r#type: String,
    pub scope: Option<String>,
    pub summary: String,
}

impl CommitRecord {
    /// Parse a commit subject line.
    ///
    /// Supports formats:
    /// - type(scope): summary
    /// - type: summary
    ///
    /// Returns `None` when the subject does not follow the grammar; such
    /// commits never reach a bucket.
    pub fn parse(id: impl Into<String>, subject: &str) -> Option<Self> {
        let captures = subject_regex().captures(subject)?;

        let r#type = captures.get(1)?.as_str().to_string();
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let summary = captures.get(3)?.as_str().to_string();

        Some(CommitRecord {
            id: id.into(),
            subject: subject.to_string(),
            r#type,
            scope,
            summary,
        })
    }

    /// First seven characters of the id
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }

    /// `type` or `type(scope)`, as shown in rendered entries
    pub fn prefix(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{}({})", self.r#type, scope),
            None => self.r#type.clone(),
        }
    }
}
