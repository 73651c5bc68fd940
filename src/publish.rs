//! Writing rendered notes and signalling whether anything changed

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::error::{ReleaseNotesError, Result};
use crate::render::ReleaseNotes;

/// Environment variable naming the CI key-value output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Heading that opens every appended markdown section
pub const LATEST_UPDATES_HEADER: &str = "## Latest Updates";

/// Receives the single "has changes" signal of a run
pub trait OutputSink {
    fn emit(&mut self, has_changes: bool, total: usize) -> Result<()>;
}

/// Appends `<key>=true|false` to a CI output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubOutputSink {
    pub path: PathBuf,
    pub key: String,
}

impl GithubOutputSink {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        GithubOutputSink {
            path: path.into(),
            key: key.into(),
        }
    }
}

impl OutputSink for GithubOutputSink {
    fn emit(&mut self, has_changes: bool, _total: usize) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ReleaseNotesError::output(format!(
                    "Cannot open CI output file '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}={}", self.key, has_changes)?;
        debug!(path = %self.path.display(), key = %self.key, has_changes, "wrote CI output");
        Ok(())
    }
}

/// Prints the number of reportable changes when no CI sink exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn message(total: usize) -> String {
        format!("Total significant changes: {}", total)
    }
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, _has_changes: bool, total: usize) -> Result<()> {
        println!("{}", Self::message(total));
        Ok(())
    }
}

/// Picks the CI sink when `GITHUB_OUTPUT` is set, stdout otherwise
pub fn sink_from_env(key: &str) -> Box<dyn OutputSink> {
    match std::env::var_os(GITHUB_OUTPUT_ENV) {
        Some(path) if !path.is_empty() => Box::new(GithubOutputSink::new(path, key)),
        _ => Box::new(StdoutSink),
    }
}

/// Files written by one publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub notes_file: PathBuf,
    pub html_file: PathBuf,
    pub has_changes: bool,
}

/// Writes both documents and emits the change signal
pub struct Publisher {
    notes_file: PathBuf,
    html_file: PathBuf,
}

impl Publisher {
    pub fn new(notes_file: impl Into<PathBuf>, html_file: impl Into<PathBuf>) -> Self {
        Publisher {
            notes_file: notes_file.into(),
            html_file: html_file.into(),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.notes_file, &output.html_file)
    }

    /// The markdown section appended to the notes file
    pub fn markdown_section(notes: &ReleaseNotes) -> String {
        format!(
            "{}\n\n---\n\n{}{}\n",
            LATEST_UPDATES_HEADER, notes.markdown.body, notes.markdown.footer
        )
    }

    /// The full contents of the HTML file
    pub fn html_document(notes: &ReleaseNotes) -> String {
        format!("{}{}", notes.html.body, notes.html.footer)
    }

    /// Append the markdown section, overwrite the HTML file, then emit the signal
    pub fn publish(&self, notes: &ReleaseNotes, sink: &mut dyn OutputSink) -> Result<PublishReport> {
        append(&self.notes_file, &Self::markdown_section(notes))?;
        info!(path = %self.notes_file.display(), "appended release notes");

        write_file(&self.html_file, &Self::html_document(notes))?;
        info!(path = %self.html_file.display(), "wrote html release notes");

        sink.emit(notes.has_changes(), notes.total)?;

        Ok(PublishReport {
            notes_file: self.notes_file.clone(),
            html_file: self.html_file.clone(),
            has_changes: notes.has_changes(),
        })
    }
}

fn append(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ReleaseNotesError::output(format!("Cannot open '{}': {}", path.display(), e))
        })?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        ReleaseNotesError::output(format!("Cannot write '{}': {}", path.display(), e))
    })
}
