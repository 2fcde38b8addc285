//! Filesystem access used by init
//!
//! All disk access from `init` goes through the `Filesystem` trait so the
//! initializers can run against an in-memory tree in tests.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

const DIR_MODE: u32 = 0o755;
const FILE_MODE: u32 = 0o644;

/// What occupies a path. Anything that is not a directory counts as a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

pub trait Filesystem {
    /// Look up a path, following symlinks. `Ok(None)` means nothing is there.
    fn stat(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Create a directory and any missing parents (0755)
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate a file (0644) and write `contents`
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The real disk
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl Filesystem for OsFs {
    fn stat(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(EntryKind::Directory)),
            Ok(_) => Ok(Some(EntryKind::File)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }
        builder.create(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        // File is closed when it drops, on the error path too.
        let mut file = options.open(path)?;
        file.write_all(contents)
    }
}
