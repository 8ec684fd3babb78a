use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entry::TreeEntry;
use crate::error::ScoutError;
use crate::traits::Tree;

/// The host filesystem, via `std::fs`.
///
/// This is the tree every search runs against unless the builder is given
/// another [`Tree`]. It is stateless; one instance serves any number of
/// concurrent searches.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsTree;

impl Tree for OsTree {
    fn children(&self, dir: &Path) -> Result<Vec<TreeEntry>, ScoutError> {
        let read = std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e))?;

        let mut out = Vec::new();
        for entry in read {
            // An entry that vanishes or cannot be stat'd mid-listing is
            // dropped rather than failing the whole directory.
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };

            // file_type() does not follow symlinks, so a symlinked directory
            // reports is_dir = false and is never descended into.
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);

            out.push(TreeEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(out)
    }

    fn parent(&self, dir: &Path) -> Option<PathBuf> {
        dir.parent().map(Path::to_path_buf)
    }

    // One metadata call instead of enumerating the whole directory.
    fn stat(&self, dir: &Path) -> Result<(), ScoutError> {
        match std::fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ScoutError::Io {
                path: dir.to_path_buf(),
                source: std::io::Error::new(ErrorKind::NotADirectory, "not a directory"),
            }),
            Err(e) => Err(map_io_error(dir, e)),
        }
    }
}

fn map_io_error(dir: &Path, e: std::io::Error) -> ScoutError {
    if e.kind() == ErrorKind::PermissionDenied {
        ScoutError::PermissionDenied(dir.to_path_buf())
    } else {
        ScoutError::Io {
            path: dir.to_path_buf(),
            source: e,
        }
    }
}
