//! Filesystem access used by the classifier for `@file` references.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Read-only view of a filesystem.
///
/// `kind` must report a missing path as [`io::ErrorKind::NotFound`] so the
/// classifier can tell it apart from other failures.
pub trait FileSystem {
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        (**self).kind(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        // Follows symlinks: a link to a file is read like the file.
        let metadata = fs::metadata(path)?;
        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}
