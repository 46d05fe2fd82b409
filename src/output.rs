//! Writing Markdown files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};

/// Extension of every written document.
pub const EXTENSION: &str = "md";

/// Write `content` to `<dir>/<stem>.md` as UTF-8, creating `dir` if needed.
///
/// An existing file with the same name is overwritten.
///
/// # Errors
///
/// Returns [`Error::Write`] when the directory cannot be created or the
/// file cannot be written.
pub fn write_document(dir: &Path, stem: &str, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{stem}.{EXTENSION}"));
    fs::write(&path, content).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = content.len(), "saved document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_document_creates_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join("nested/out");

        let path = write_document(&dir, "01_Install", "# Install\n").expect("written");

        assert_eq!(path, dir.join("01_Install.md"));
        assert_eq!(fs::read_to_string(&path).expect("readable"), "# Install\n");
    }

    #[test]
    fn test_write_document_reports_path_on_failure() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "x").expect("blocker written");

        let err = write_document(&blocker, "doc", "body").expect_err("dir is a file");
        assert!(matches!(err, Error::Write { ref path, .. } if path == &blocker));
    }
}
