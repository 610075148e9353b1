use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export directory is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A document prepared for download or saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub content: String,
}

impl Export {
    pub const FILE_NAME: &'static str = "Document.md";
    pub const CONTENT_TYPE: &'static str = "text/markdown";

    /// Builds the export from raw document text, dropping its final character
    /// (the terminator the document always carries).
    pub fn from_text(raw: &str) -> Self {
        let mut content = raw.to_string();
        content.pop();
        Self {
            file_name: Self::FILE_NAME,
            content_type: Self::CONTENT_TYPE,
            content,
        }
    }

    /// Writes the export into `dir`, creating it if needed, and returns the
    /// written path. An existing file is overwritten.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        if dir.exists() && !dir.is_dir() {
            return Err(ExportError::NotADirectory(dir.to_path_buf()));
        }
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name);
        fs::write(&path, &self.content)?;
        log::info!("Exported {} bytes to {}", self.content.len(), path.display());
        Ok(path)
    }
}
