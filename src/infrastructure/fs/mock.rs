//! In-memory file system for use case tests

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{CreateOutcome, FileSystem};

/// Mock file system
///
/// Uses `Arc<Mutex<>>` internally so clones share state. Writes to paths
/// listed in `fail_writes` return `PermissionDenied`.
#[derive(Clone, Default)]
pub struct MockFs {
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub dirs: Arc<Mutex<HashSet<PathBuf>>>,
    pub fail_writes: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_write(&self, path: impl Into<PathBuf>) {
        self.fail_writes.lock().unwrap().insert(path.into());
    }

    pub fn insert_file(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &str) -> io::Result<CreateOutcome> {
        if self.fail_writes.lock().unwrap().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        let mut files = self.files.lock().unwrap();
        if files.contains_key(path) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        files.insert(path.to_path_buf(), content.to_string());
        Ok(CreateOutcome::Written)
    }
}
