//! FileSystem port - the operations scaffolding needs
//!
//! Errors are plain `std::io::Error`; callers attach the path.

use std::io;
use std::path::Path;

/// Result of a create-if-absent write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Written,
    /// Something appeared at the path before the write landed
    AlreadyExists,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - local disk
/// - `MockFs` - in-memory, test only
pub trait FileSystem {
    /// True if anything (file, directory, symlink) occupies the path
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create directory and parents; an existing directory is not an error
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to a new file, never replacing an existing one
    fn create_new(&self, path: &Path, content: &str) -> io::Result<CreateOutcome>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn create_new(&self, path: &Path, content: &str) -> io::Result<CreateOutcome> {
        (**self).create_new(path, content)
    }
}
