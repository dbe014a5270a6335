//! Local File System Implementation

use std::io::{self, Write};
use std::path::Path;

use crate::domain::ports::{CreateOutcome, FileSystem};

/// Local file system implementation
///
/// New files are staged in a temp file beside the target and linked into
/// place without clobbering, so a target is either absent or complete.
/// Filesystems that support neither `renameat2(RENAME_NOREPLACE)` nor hard
/// links fall back to an exclusive `create_new` open.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as present.
        std::fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn create_new(&self, path: &Path, content: &str) -> io::Result<CreateOutcome> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut builder = tempfile::Builder::new();
        builder.prefix(".shepherd-");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Subject to umask, like a plain create.
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let mut staged = builder.tempfile_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.flush()?;

        match staged.persist_noclobber(path) {
            Ok(_) => Ok(CreateOutcome::Written),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateOutcome::AlreadyExists)
            }
            Err(e) if no_clobber_unsupported(&e.error) => create_new_direct(path, content),
            Err(e) => Err(e.error),
        }
    }
}

fn no_clobber_unsupported(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Unsupported | io::ErrorKind::PermissionDenied
    )
}

/// Exclusive create without staging; a failed write removes the partial file
fn create_new_direct(path: &Path, content: &str) -> io::Result<CreateOutcome> {
    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(CreateOutcome::AlreadyExists)
        }
        Err(e) => return Err(e),
    };

    if let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.flush()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(e);
    }
    Ok(CreateOutcome::Written)
}
