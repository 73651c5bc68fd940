//! Version-control query abstraction
//!
//! The pipeline only ever asks four questions of version control. They are
//! captured by the [VersionControl] trait so resolution and log reading can
//! be exercised without a repository on disk.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A scripted implementation for testing
//!
//! ```rust
//! # use release_notes::git::{MockRepository, VersionControl};
//! let repo = MockRepository::new().with_tags(["v1.0", "v1.1"]);
//! assert_eq!(repo.list_tags(), Some(vec!["v1.0".to_string(), "v1.1".to_string()]));
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

/// Read-only queries against a version-control system.
///
/// Every method answers with `None` when the information is unavailable or
/// the underlying query failed. Implementations must not panic or surface
/// errors; callers treat absence as "not found" and fall back accordingly.
pub trait VersionControl {
    /// All tag names, in listing order
    fn list_tags(&self) -> Option<Vec<String>>;

    /// Nearest common ancestor of two references, as a full commit id
    fn merge_base(&self, a: &str, b: &str) -> Option<String>;

    /// Short name of the checked-out branch (`HEAD` when detached)
    fn current_branch(&self) -> Option<String>;

    /// Commits reachable from `to` but not from `from`, newest first.
    ///
    /// One line per commit, formatted as `<id> <subject>`.
    fn log_range(&self, from: &str, to: &str) -> Option<Vec<String>>;
}
