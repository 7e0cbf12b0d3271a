use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary vault directory for tests
pub fn create_test_vault() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test note file with content
pub fn create_test_note(vault: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = vault.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
