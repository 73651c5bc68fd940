//! Main workflow orchestration logic
//!
//! Runs the release-note pipeline end to end: resolve the range, read the
//! log, classify, render, publish. Kept apart from `main.rs` so it can be
//! driven programmatically and in tests without clap.

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::classifier::classify;
use crate::config::Config;
use crate::domain::ReleaseRange;
use crate::error::Result;
use crate::git::VersionControl;
use crate::publish::{OutputSink, PublishReport, Publisher};
use crate::reader::read_commits;
use crate::render::render_notes;
use crate::resolver::{ReferenceResolver, Strategy};
use crate::ui;

/// Arguments for the release-notes workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineArgs {
    /// Explicit start reference
    pub from_ref: Option<String>,

    /// End reference, `HEAD` when absent
    pub to_ref: Option<String>,

    /// Render and print only
    pub dry_run: bool,
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    pub range: ReleaseRange,

    /// Commits read from the log
    pub scanned: usize,

    /// Commits that made it into a bucket
    pub total: usize,

    /// `None` on a dry run
    pub published: Option<PublishReport>,

    pub warnings: Vec<BoundaryWarning>,
}

impl PipelineResult {
    pub fn has_changes(&self) -> bool {
        self.total > 0
    }
}

/// Run the pipeline.
///
/// # Arguments
///
/// * `args` - Start/end references and dry-run flag
/// * `config` - Release-notes configuration
/// * `vcs` - Version-control backend
/// * `sink` - Receives the "has changes" signal
///
/// # Returns
///
/// Fails when no start reference can be resolved (before anything is
/// written) or when an output file cannot be written.
pub fn run_pipeline<V: VersionControl + ?Sized>(
    args: &PipelineArgs,
    config: &Config,
    vcs: &V,
    sink: &mut dyn OutputSink,
) -> Result<PipelineResult> {
    let resolution = ReferenceResolver::new(vcs, &config.resolution)
        .resolve(args.from_ref.as_deref(), args.to_ref.as_deref())?;
    let mut warnings = resolution.warnings;
    let range = resolution.range;

    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_status(&describe_strategy(resolution.strategy, &config.resolution.trunk_branch));

    ui::display_status(&format!(
        "Fetching commits from {} to {}...",
        range.from_ref, range.to_ref
    ));
    let entries = read_commits(vcs, &range);
    let buckets = classify(&entries);

    let content_warning = if entries.is_empty() {
        Some(BoundaryWarning::EmptyRange {
            from_ref: range.from_ref.clone(),
            to_ref: range.to_ref.clone(),
        })
    } else if buckets.is_empty() {
        Some(BoundaryWarning::NoReportableChanges {
            scanned: entries.len(),
        })
    } else {
        None
    };
    if let Some(warning) = content_warning {
        ui::display_boundary_warning(&warning);
        warnings.push(warning);
    }

    ui::display_classification(&range, entries.len(), &buckets);

    let notes = render_notes(&buckets, &range, &config.repository);
    info!(%range, scanned = entries.len(), total = notes.total, "rendered release notes");

    let published = if args.dry_run {
        ui::display_preview(&notes, &config.output.notes_file, &config.output.html_file);
        None
    } else {
        let report = Publisher::from_config(&config.output).publish(&notes, sink)?;
        ui::display_success(&format!(
            "Wrote {} and {}",
            report.notes_file.display(),
            report.html_file.display()
        ));
        Some(report)
    };

    Ok(PipelineResult {
        range,
        scanned: entries.len(),
        total: notes.total,
        published,
        warnings,
    })
}

fn describe_strategy(strategy: Strategy, trunk: &str) -> String {
    match strategy {
        Strategy::Explicit => "Using the given start reference".to_string(),
        Strategy::BranchPoint => format!("Using merge-base with {}", trunk),
        Strategy::LastStableTag => "Using the last stable tag".to_string(),
    }
}
