//! User interface module - console output for the pipeline.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Composite displays built from them

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_classification, display_document, display_error,
    display_status, display_success,
};

use crate::publish::Publisher;
use crate::render::ReleaseNotes;

/// Show both documents exactly as they would be written, without writing them.
pub fn display_preview(notes: &ReleaseNotes, notes_file: &str, html_file: &str) {
    display_status("Dry run: nothing will be written");
    display_document(
        &format!("{} (appended)", notes_file),
        &Publisher::markdown_section(notes),
    );
    display_document(
        &format!("{} (overwritten)", html_file),
        &Publisher::html_document(notes),
    );
}
