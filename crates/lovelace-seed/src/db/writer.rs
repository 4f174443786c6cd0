//! Script output.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::SeedError;

/// Where a script was written and how long it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    /// Number of `\n` characters written.
    pub lines: usize,
}

/// Writes `sql` to `path`, replacing any previous file.
///
/// Missing parent directories are created.
pub fn write_script(path: impl AsRef<Path>, sql: &str) -> Result<WriteReport, SeedError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SeedError::io(parent, e))?;
    }

    std::fs::write(path, sql).map_err(|e| SeedError::io(path, e))?;

    let report = WriteReport {
        path: path.to_path_buf(),
        lines: sql.matches('\n').count(),
    };
    info!("Wrote {} lines to {}", report.lines, report.path.display());

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.sql");

        std::fs::write(&path, "stale content\nthat is longer\nthan the new one\n").unwrap();
        let report = write_script(&path, "BEGIN;\nCOMMIT;\n").unwrap();

        assert_eq!(report.lines, 2);
        assert_eq!(report.path, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "BEGIN;\nCOMMIT;\n");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scripts").join("db").join("002_seed.sql");

        let report = write_script(&path, "-- vacío\n").unwrap();

        assert_eq!(report.lines, 1);
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // the target is an existing directory
        let err = write_script(dir.path(), "COMMIT;\n").unwrap_err();

        assert!(matches!(err, SeedError::Io { .. }));
    }
}
