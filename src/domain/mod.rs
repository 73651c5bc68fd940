//! Domain logic - pure release-note rules independent of git operations

pub mod branch;
pub mod category;
pub mod commit;
pub mod range;
pub mod tag;

pub use branch::BranchContext;
pub use category::{Buckets, Category};
pub use commit::CommitRecord;
pub use range::{display_ref, ReleaseRange};
pub use tag::{last_stable_tag, Tag};
