use release_notes::boundary::BoundaryWarning;
use release_notes::cli::orchestration::{run_pipeline, PipelineArgs};
use release_notes::config::{Config, OutputConfig};
use release_notes::git::MockRepository;
use release_notes::publish::OutputSink;
use release_notes::{ReleaseNotesError, Result};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FEAT_SHA: &str = "1111111aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const UI_SHA: &str = "2222222bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
const CHORE_SHA: &str = "3333333ccccccccccccccccccccccccccccccccc";

#[derive(Default)]
struct RecordingSink {
    signals: Vec<(bool, usize)>,
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, has_changes: bool, total: usize) -> Result<()> {
        self.signals.push((has_changes, total));
        Ok(())
    }
}

fn config_in(dir: &Path) -> Config {
    Config {
        output: OutputConfig {
            notes_file: dir.join("ReleaseNotes.md").to_string_lossy().into_owned(),
            html_file: dir.join("changelog_body.html").to_string_lossy().into_owned(),
            ..OutputConfig::default()
        },
        ..Config::default()
    }
}

fn release_repo() -> MockRepository {
    MockRepository::new()
        .with_tags(["v1.0", "v1.1-alpha", "v1.2"])
        .with_current_branch("main")
        .with_log(
            "v1.2",
            "HEAD",
            [
                format!("{} feat: add dark mode", FEAT_SHA),
                format!("{} fix(ui): spacing", UI_SHA),
                format!("{} chore: bump deps", CHORE_SHA),
            ],
        )
}

#[test]
fn test_pipeline_writes_both_documents() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let mut sink = RecordingSink::default();

    let result = run_pipeline(&PipelineArgs::default(), &config, &release_repo(), &mut sink).unwrap();

    assert_eq!(result.range.from_ref, "v1.2");
    assert_eq!(result.range.to_ref, "HEAD");
    assert_eq!(result.scanned, 3);
    assert_eq!(result.total, 2);
    assert!(result.has_changes());
    assert_eq!(sink.signals, vec![(true, 2)]);

    let markdown = fs::read_to_string(dir.path().join("ReleaseNotes.md")).unwrap();
    let features = markdown.find("## **New Features**").unwrap();
    let ui_fixes = markdown.find("### **UI Bug Fixes**").unwrap();
    assert!(markdown.starts_with("## Latest Updates\n\n---\n\n"));
    assert!(features < ui_fixes);
    assert!(markdown.contains("- (1111111) **feat:** (add dark mode)"));
    assert!(markdown.contains("- (2222222) **fix(ui):** (spacing)"));
    assert!(!markdown.contains("bump deps"));
    assert!(markdown.contains(
        "**See more changes: [v1.2...HEAD](https://github.com/TranPhuong319/AppLocker/compare/v1.2...HEAD)**"
    ));

    let html = fs::read_to_string(dir.path().join("changelog_body.html")).unwrap();
    assert!(html.starts_with("<h3>New Features</h3>"));
    assert!(html.contains("<h4>UI Bug Fixes</h4>"));
    assert!(html.ends_with("</a></b></p>"));
}

#[test]
fn test_resolution_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let repo = MockRepository::new()
        .with_tags(["v1.0-alpha"])
        .with_current_branch("main");
    let mut sink = RecordingSink::default();

    let err = run_pipeline(&PipelineArgs::default(), &config, &repo, &mut sink).unwrap_err();

    assert!(matches!(err, ReleaseNotesError::Resolution(_)));
    assert!(!dir.path().join("ReleaseNotes.md").exists());
    assert!(!dir.path().join("changelog_body.html").exists());
    assert!(sink.signals.is_empty());
}

#[test]
fn test_empty_range_renders_placeholder() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let repo = MockRepository::new()
        .with_current_branch("topic")
        .with_merge_base("main", "topic", "abc1234");
    let mut sink = RecordingSink::default();

    let result = run_pipeline(&PipelineArgs::default(), &config, &repo, &mut sink).unwrap();

    assert_eq!(result.range.from_ref, "abc1234");
    assert!(!result.has_changes());
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::EmptyRange {
            from_ref: "abc1234".to_string(),
            to_ref: "HEAD".to_string(),
        }]
    );
    assert_eq!(sink.signals, vec![(false, 0)]);

    let markdown = fs::read_to_string(dir.path().join("ReleaseNotes.md")).unwrap();
    assert!(markdown.contains("*No significant changes in this version.*"));
    assert!(!markdown.contains("**New Features**"));
    let html = fs::read_to_string(dir.path().join("changelog_body.html")).unwrap();
    assert!(html.starts_with("<p><i>No significant changes in this version.</i></p>"));
}

#[test]
fn test_only_unreported_commits_warns() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let repo = MockRepository::new().with_log("v0.9", "v1.0", ["abc chore: tidy", "def WIP"]);
    let args = PipelineArgs {
        from_ref: Some("v0.9".to_string()),
        to_ref: Some("v1.0".to_string()),
        dry_run: false,
    };

    let result = run_pipeline(&args, &config, &repo, &mut RecordingSink::default()).unwrap();

    assert_eq!(result.scanned, 2);
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::NoReportableChanges { scanned: 2 }]
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let args = PipelineArgs {
        dry_run: true,
        ..PipelineArgs::default()
    };
    let mut sink = RecordingSink::default();

    let result = run_pipeline(&args, &config, &release_repo(), &mut sink).unwrap();

    assert_eq!(result.total, 2);
    assert_eq!(result.published, None);
    assert!(sink.signals.is_empty());
    assert!(!dir.path().join("ReleaseNotes.md").exists());
}

#[test]
fn test_repeated_runs_append_identical_sections() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    let repo = release_repo();

    run_pipeline(&PipelineArgs::default(), &config, &repo, &mut RecordingSink::default()).unwrap();
    let first_html = fs::read_to_string(dir.path().join("changelog_body.html")).unwrap();
    let first_markdown = fs::read_to_string(dir.path().join("ReleaseNotes.md")).unwrap();

    run_pipeline(&PipelineArgs::default(), &config, &repo, &mut RecordingSink::default()).unwrap();
    let second_html = fs::read_to_string(dir.path().join("changelog_body.html")).unwrap();
    let second_markdown = fs::read_to_string(dir.path().join("ReleaseNotes.md")).unwrap();

    assert_eq!(first_html, second_html);
    assert_eq!(second_markdown, format!("{}{}", first_markdown, first_markdown));
}
