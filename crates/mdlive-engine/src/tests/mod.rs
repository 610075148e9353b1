use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary session directory
pub fn create_test_session_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file with content inside a test directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
