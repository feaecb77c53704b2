//! Atomic writes for rendered templates

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::FileError;

/// A file successfully written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    /// Final location of the generated file
    pub path: PathBuf,
}

/// Writes rendered templates with a temp-file-and-rename pattern.
#[derive(Debug, Clone)]
pub struct TemplateWriter;

impl TemplateWriter {
    /// Creates a new TemplateWriter instance
    pub fn new() -> Self {
        TemplateWriter
    }

    /// Writes content to the target path.
    ///
    /// Parent directories are created as needed. Content lands in a sibling
    /// temp file first and is renamed into place, so a failed write never
    /// leaves a truncated file at the target.
    pub async fn write(&self, path: &Path, content: &str) -> Result<CreatedFile, FileError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path(path);
        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, path).await?;

        debug!(path = %path.display(), bytes = content.len(), "wrote template");

        Ok(CreatedFile {
            path: path.to_path_buf(),
        })
    }

    /// Generates a sibling temporary file path.
    fn temp_path(&self, path: &Path) -> PathBuf {
        let mut temp_path = path.to_path_buf();
        let file_name = format!(
            ".tmp-{}-{}",
            std::process::id(),
            path.file_name().and_then(|n| n.to_str()).unwrap_or("file")
        );
        temp_path.set_file_name(file_name);
        temp_path
    }
}

impl Default for TemplateWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_new_file() {
        let writer = TemplateWriter::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("demo.py");

        let content = "def main() -> None:\n    pass";
        let created = writer.write(&path, content).await.unwrap();

        assert_eq!(created.path, path);
        let written = fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, content);
    }

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let writer = TemplateWriter::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested/deeper/file.tex");

        writer.write(&path, "content").await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file_behind() {
        let writer = TemplateWriter::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("only.c");

        writer.write(&path, "int main(void) { return 0; }").await.unwrap();

        let mut entries = fs::read_dir(temp_dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name());
        }
        assert_eq!(names, vec![std::ffi::OsString::from("only.c")]);
    }

    #[tokio::test]
    async fn test_write_replaces_existing_content() {
        let writer = TemplateWriter::new();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("twice.java");

        writer.write(&path, "first").await.unwrap();
        writer.write(&path, "second").await.unwrap();

        let written = fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "second");
    }
}
