// tests/config_test.rs
use release_notes::config::{load_config, Config};
use release_notes::ReleaseNotesError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.resolution.trunk_branch, "main");
    assert_eq!(
        config.repository.compare_base_url(),
        "https://github.com/TranPhuong319/AppLocker/compare/"
    );
    assert_eq!(config.output.notes_file, "ReleaseNotes.md");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[repository]
url = "https://example.com/acme/widget"

[resolution]
trunk_branch = "develop"
unstable_tag_marker = "beta"

[output]
notes_file = "NOTES.md"
has_changes_key = "CHANGED"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.repository.url, "https://example.com/acme/widget");
    assert_eq!(config.resolution.trunk_branch, "develop");
    assert_eq!(config.resolution.unstable_tag_marker, "beta");
    assert_eq!(config.output.notes_file, "NOTES.md");
    assert_eq!(config.output.html_file, "changelog_body.html");
    assert_eq!(config.output.has_changes_key, "CHANGED");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("/nonexistent/releasenotes.toml")).unwrap_err();
    assert!(matches!(err, ReleaseNotesError::Config(_)));
    assert!(err.to_string().contains("/nonexistent/releasenotes.toml"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[output\nnotes_file = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
