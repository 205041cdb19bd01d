use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads course files from the local filesystem, relative to `base_path`.
/// Absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_relative_to_base() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.csv"), "CS101,Intro\n").unwrap();

        let storage = LocalStorage::new(dir.path());
        assert_eq!(storage.base_path(), dir.path());
        assert_eq!(storage.read_file("data.csv").unwrap(), b"CS101,Intro\n");
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("courses.csv");
        fs::write(&file, "MA101,Calculus").unwrap();

        let storage = LocalStorage::new("/nonexistent-base");
        assert!(storage.read_file(file.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        let err = storage.read_file("missing.csv").unwrap_err();
        assert!(matches!(err, crate::utils::error::PlannerError::IoError(_)));
    }
}
