use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::git::VersionControl;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn resolve_commit(&self, reference: &str) -> std::result::Result<Oid, git2::Error> {
        let object = self.repo.revparse_single(reference)?;
        Ok(object.peel_to_commit()?.id())
    }

    fn collect_range(&self, from: &str, to: &str) -> std::result::Result<Vec<String>, git2::Error> {
        let from_oid = self.resolve_commit(from)?;
        let to_oid = self.resolve_commit(to)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut lines = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let subject = commit.summary().unwrap_or("");

            lines.push(format!("{} {}", oid, subject));
        }

        Ok(lines)
    }
}

impl VersionControl for Git2Repository {
    fn list_tags(&self) -> Option<Vec<String>> {
        let tags = match self.repo.tag_names(None) {
            Ok(tags) => tags,
            Err(e) => {
                debug!(error = %e, "listing tags failed");
                return None;
            }
        };

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        // match `git tag -l`, which lists by name
        names.sort();
        Some(names)
    }

    fn merge_base(&self, a: &str, b: &str) -> Option<String> {
        let oids = self.resolve_commit(a).and_then(|a_oid| {
            let b_oid = self.resolve_commit(b)?;
            self.repo.merge_base(a_oid, b_oid)
        });

        match oids {
            Ok(oid) => Some(oid.to_string()),
            Err(e) => {
                debug!(a, b, error = %e, "merge base not found");
                None
            }
        }
    }

    fn current_branch(&self) -> Option<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) => {
                debug!(error = %e, "cannot read HEAD");
                return None;
            }
        };

        if head.is_branch() {
            head.shorthand().map(|name| name.to_string())
        } else {
            Some("HEAD".to_string())
        }
    }

    fn log_range(&self, from: &str, to: &str) -> Option<Vec<String>> {
        match self.collect_range(from, to) {
            Ok(lines) => Some(lines),
            Err(e) => {
                debug!(from, to, error = %e, "log query failed");
                None
            }
        }
    }
}
