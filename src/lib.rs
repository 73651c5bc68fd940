pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod publish;
pub mod reader;
pub mod render;
pub mod resolver;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
