//! Reference resolution - picks the commit range the notes cover

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::config::ResolutionConfig;
use crate::domain::{last_stable_tag, BranchContext, ReleaseRange};
use crate::error::{ReleaseNotesError, Result};
use crate::git::VersionControl;

/// End reference used when none is given
pub const DEFAULT_TO_REF: &str = "HEAD";

/// Ways of finding the start reference, tried in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Start reference supplied by the caller
    Explicit,
    /// Branch point between the trunk and the current branch
    BranchPoint,
    /// Last tag in listing order that is not an unstable pre-release
    LastStableTag,
}

impl Strategy {
    pub const ORDER: [Strategy; 3] = [
        Strategy::Explicit,
        Strategy::BranchPoint,
        Strategy::LastStableTag,
    ];
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub range: ReleaseRange,
    pub strategy: Strategy,
    /// Non-fatal problems hit while falling back
    pub warnings: Vec<BoundaryWarning>,
}

/// Resolves the release range against a version-control backend
pub struct ReferenceResolver<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    config: &'a ResolutionConfig,
}

impl<'a, V: VersionControl + ?Sized> ReferenceResolver<'a, V> {
    pub fn new(vcs: &'a V, config: &'a ResolutionConfig) -> Self {
        ReferenceResolver { vcs, config }
    }

    /// Resolve `(from, to)`.
    ///
    /// Empty strings count as absent. Fails only when no strategy yields a
    /// start reference.
    pub fn resolve(&self, from_ref: Option<&str>, to_ref: Option<&str>) -> Result<Resolution> {
        let to_ref = non_empty(to_ref).unwrap_or(DEFAULT_TO_REF).to_string();
        let mut warnings = Vec::new();

        for strategy in Strategy::ORDER {
            let candidate = match strategy {
                Strategy::Explicit => non_empty(from_ref).map(str::to_string),
                Strategy::BranchPoint => self.branch_point(&mut warnings),
                Strategy::LastStableTag => self.last_stable_tag(&mut warnings),
            };

            if let Some(from_ref) = candidate.filter(|r| !r.is_empty()) {
                info!(?strategy, from = %from_ref, to = %to_ref, "resolved release range");
                return Ok(Resolution {
                    range: ReleaseRange::new(from_ref, to_ref),
                    strategy,
                    warnings,
                });
            }
        }

        Err(ReleaseNotesError::resolution(format!(
            "no explicit start reference, no branch point with '{}' and no stable tag",
            self.config.trunk_branch
        )))
    }

    fn branch_point(&self, warnings: &mut Vec<BoundaryWarning>) -> Option<String> {
        let Some(name) = self.vcs.current_branch() else {
            debug!("current branch unavailable");
            return None;
        };

        let branch = BranchContext::new(name, &self.config.trunk_branch);
        if !branch.uses_branch_point() {
            debug!(branch = %branch.name, "on trunk branch");
            return None;
        }

        let base = self
            .vcs
            .merge_base(&self.config.trunk_branch, &branch.name)
            .filter(|base| !base.is_empty());

        if base.is_none() {
            warnings.push(BoundaryWarning::MergeBaseNotFound {
                branch: branch.name.clone(),
                trunk: self.config.trunk_branch.clone(),
            });
        }

        base
    }

    fn last_stable_tag(&self, warnings: &mut Vec<BoundaryWarning>) -> Option<String> {
        let tags = self.vcs.list_tags().unwrap_or_default();
        let tag = last_stable_tag(&tags, &self.config.unstable_tag_marker);

        if tag.is_none() {
            warnings.push(BoundaryWarning::NoStableTag {
                marker: self.config.unstable_tag_marker.clone(),
            });
        }

        tag
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
