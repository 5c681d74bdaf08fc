use crate::core::Storage;
use crate::utils::error::{CodegenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).is_file()
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        fs::read(&full_path).map_err(|source| CodegenError::SourceReadError {
            path: full_path,
            source,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| CodegenError::OutputWriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&full_path, data).map_err(|source| CodegenError::OutputWriteError {
            path: full_path,
            source,
        })
    }

    fn display_path(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested/out");
        let storage = LocalStorage::new(base.to_string_lossy().into_owned());

        storage.write_file("elp_terms_main.rs", b"// table\n").unwrap();

        assert!(storage.exists("elp_terms_main.rs"));
        assert_eq!(storage.read_file("elp_terms_main.rs").unwrap(), b"// table\n");
    }

    #[test]
    fn test_missing_file_does_not_exist() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());

        assert!(!storage.exists("ELP7.txt"));
        assert!(matches!(
            storage.read_file("ELP7.txt"),
            Err(CodegenError::SourceReadError { .. })
        ));
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let storage = LocalStorage::new(blocker.to_string_lossy().into_owned());

        let err = storage.write_file("elp_terms_main.rs", b"x").unwrap_err();
        assert!(matches!(err, CodegenError::OutputWriteError { .. }));
    }
}
