//! File system access used by the generator.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The file operations the generator needs
pub trait FileSystem {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write `contents` to `path`, replacing any existing file
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// The local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// An in-memory file system, for previews and tests
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// An empty file system
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the file at `path`
    #[must_use]
    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Every file path, sorted
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_dirs_include_parents() {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("src/dtos/videos")).unwrap();
        assert!(fs.is_dir(Path::new("src/dtos")));
        assert!(fs.is_dir(Path::new("src")));
    }

    #[test]
    fn test_memory_write_replaces() {
        let fs = MemoryFileSystem::new();
        let path = Path::new("src/image.rs");
        fs.write(path, "struct Image;").unwrap();
        assert!(fs.exists(path));
        assert_eq!(fs.read(path).as_deref(), Some("struct Image;"));

        fs.write(path, "struct Image2;").unwrap();
        assert_eq!(fs.read(path).as_deref(), Some("struct Image2;"));
        assert_eq!(fs.paths().len(), 1);
    }

    #[test]
    fn test_local_file_system() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        LocalFileSystem.create_dir_all(&nested).unwrap();
        assert!(LocalFileSystem.is_dir(&nested));

        let file = nested.join("x.rs");
        LocalFileSystem.write(&file, "x").unwrap();
        assert!(LocalFileSystem.exists(&file));
        LocalFileSystem.write(&file, "y").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "y");
    }
}
