use std::path::{Path, PathBuf};

use crate::entry::TreeEntry;
use crate::error::ScoutError;

/// The directory tree a search runs against.
///
/// The engine depends on exactly two primitives: enumerate the immediate
/// children of a directory, and resolve a directory's parent. Implement this
/// to search something other than the host filesystem, such as an in-memory
/// tree in tests. The default implementation is [`OsTree`](crate::fs::OsTree).
///
/// # Thread Safety
///
/// `Send + Sync` are required. A tree holds no per-search state, so one
/// instance may serve concurrent `locate` calls; each call owns its own
/// frontier.
///
/// # Error Handling
///
/// `children` should yield `Err` for directories it cannot enumerate
/// (permission denied, removed mid-scan). The engine never aborts a scan on
/// such an error: the directory is treated as a leaf, and the error is kept
/// in [`Outcome::errors`](crate::results::Outcome) when `.collect_errors(true)`
/// is set on the builder.
pub trait Tree: Send + Sync {
    /// Enumerate the immediate children of `dir`.
    ///
    /// Order is whatever the underlying store yields; the engine does not
    /// sort. When several same-named directories exist at equal depth, the
    /// first one enumerated wins.
    fn children(&self, dir: &Path) -> Result<Vec<TreeEntry>, ScoutError>;

    /// Resolve the parent of `dir`, or `None` if `dir` is the root.
    ///
    /// `None` is a boundary, not a failure: it terminates the offset phase
    /// or the ascent loop early.
    fn parent(&self, dir: &Path) -> Option<PathBuf>;

    /// Check that `dir` exists and is a directory, without enumerating it.
    ///
    /// Used once per search to reject a bogus start directory before any
    /// traversal. The default falls back to `children`; implementations with
    /// a cheaper existence check (a single stat for the filesystem) should
    /// override it.
    fn stat(&self, dir: &Path) -> Result<(), ScoutError> {
        self.children(dir).map(|_| ())
    }
}
