use std::fmt;

use crate::domain::display_ref;

/// Non-fatal conditions met while building release notes.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryWarning {
    /// The current branch has no common ancestor with the trunk
    MergeBaseNotFound { branch: String, trunk: String },
    /// Every tag is an unstable pre-release, or there are no tags
    NoStableTag { marker: String },
    /// The resolved range holds no commits
    EmptyRange { from_ref: String, to_ref: String },
    /// Commits exist but none of them belongs in the notes
    NoReportableChanges { scanned: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MergeBaseNotFound { branch, trunk } => {
                write!(
                    f,
                    "No merge base between '{}' and '{}', falling back to last stable tag",
                    trunk, branch
                )
            }
            BoundaryWarning::NoStableTag { marker } => {
                write!(f, "No tag without '{}' in its name was found", marker)
            }
            BoundaryWarning::EmptyRange { from_ref, to_ref } => {
                write!(
                    f,
                    "No commits between '{}' and '{}'",
                    display_ref(from_ref),
                    display_ref(to_ref)
                )
            }
            BoundaryWarning::NoReportableChanges { scanned } => {
                write!(
                    f,
                    "None of the {} commits is a feature, fix or performance change",
                    scanned
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_shortens_commit_ids() {
        let warning = BoundaryWarning::EmptyRange {
            from_ref: "0123456789abcdef0123456789abcdef01234567".to_string(),
            to_ref: "HEAD".to_string(),
        };
        assert_eq!(warning.to_string(), "No commits between '0123456' and 'HEAD'");
    }

    #[test]
    fn test_merge_base_message_names_both_branches() {
        let warning = BoundaryWarning::MergeBaseNotFound {
            branch: "topic".to_string(),
            trunk: "main".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("topic"));
        assert!(msg.contains("main"));
    }

    #[test]
    fn test_no_reportable_changes_counts_commits() {
        let warning = BoundaryWarning::NoReportableChanges { scanned: 3 };
        assert!(warning.to_string().contains("3 commits"));
    }
}
