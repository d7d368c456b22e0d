use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A rendered artifact waiting to be written to disk.
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the target path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the rendered content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// A set of artifacts committed to disk as a unit.
///
/// Rendering happens entirely in memory before any file is touched. If
/// a write fails partway through, every file written so far is removed,
/// so a failed invocation never leaves a partial set behind.
#[derive(Default)]
pub struct ArtifactSet {
    files: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendered artifact to the set.
    pub fn push(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.push(Artifact::new(path, content));
    }

    /// Write every artifact, removing already-written files on failure.
    pub fn commit(self) -> Result<Vec<PathBuf>> {
        let mut written: Vec<PathBuf> = Vec::new();

        for file in &self.files {
            if let Err(e) = write_file(file.path(), file.content()) {
                for path in &written {
                    let _ = std::fs::remove_file(path);
                }
                return Err(e)
                    .wrap_err_with(|| format!("failed to write {}", file.path().display()));
            }
            written.push(file.path().to_path_buf());
        }

        Ok(written)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.h");

        write_file(&path, "typedef struct {} Test_t;").unwrap();

        assert!(path.exists());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "typedef struct {} Test_t;"
        );
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.c");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.h");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_commit_writes_all_files() {
        let temp = TempDir::new().unwrap();
        let header = temp.path().join("Test.xml.h");
        let source = temp.path().join("Test.xml.c");

        let mut set = ArtifactSet::new();
        set.push(&header, "header content");
        set.push(&source, "source content");

        let written = set.commit().unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(&header).unwrap(), "header content");
        assert_eq!(fs::read_to_string(&source).unwrap(), "source content");
    }

    #[test]
    fn test_commit_removes_written_files_on_failure() {
        let temp = TempDir::new().unwrap();
        let header = temp.path().join("Test.xml.h");
        // A directory cannot be overwritten by a file write.
        let blocked = temp.path().join("blocked");
        fs::create_dir(&blocked).unwrap();

        let mut set = ArtifactSet::new();
        set.push(&header, "header content");
        set.push(&blocked, "source content");

        let result = set.commit();

        assert!(result.is_err());
        assert!(!header.exists());
    }
}
