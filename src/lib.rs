//! # dirscout
//!
//! Bounded, bidirectional folder search: find a directory by name, looking
//! down before looking up.
//!
//! dirscout runs a depth-limited breadth-first scan over the descendants of
//! a starting directory. If the target folder is not within reach, it
//! ascends to the parent and rescans, one ancestor at a time, until a match
//! is found or both budgets (forward depth, backward hops) are exhausted.
//! Directories that cannot be listed are skipped, never fatal; the first
//! match in scan order wins and the search stops immediately.
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::path::{Path, PathBuf};
//! use dirscout::{ScoutError, Tree, TreeEntry};
//!
//! // A minimal in-memory tree for demonstration; real searches default to
//! // the host filesystem.
//! struct MapTree(HashMap<PathBuf, Vec<TreeEntry>>);
//!
//! impl Tree for MapTree {
//!     fn children(&self, dir: &Path) -> Result<Vec<TreeEntry>, ScoutError> {
//!         Ok(self.0.get(dir).cloned().unwrap_or_default())
//!     }
//!     fn parent(&self, dir: &Path) -> Option<PathBuf> {
//!         dir.parent().map(Path::to_path_buf)
//!     }
//! }
//!
//! let dir = |p: &str| TreeEntry {
//!     path: PathBuf::from(p),
//!     name: Path::new(p).file_name().unwrap().to_string_lossy().into_owned(),
//!     is_dir: true,
//! };
//!
//! let mut tree = HashMap::new();
//! tree.insert(PathBuf::from("/a"), vec![dir("/a/b"), dir("/a/c")]);
//! tree.insert(PathBuf::from("/a/b"), vec![dir("/a/b/target")]);
//!
//! let outcome = dirscout::locate()
//!     .target("target")
//!     .start("/a")
//!     .tree(MapTree(tree))
//!     .forward_limit(2)
//!     .backward_limit(0)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(outcome.path.as_deref(), Some(Path::new("/a/b/target")));
//! ```
//!
//! # Searching the filesystem
//!
//! Omitting `.tree()` searches the host filesystem; omitting `.start()`
//! begins at the process's working directory:
//!
//! ```rust,ignore
//! let outcome = dirscout::locate()
//!     .target("dataset")
//!     .forward_limit(4)
//!     .backward_limit(3)
//!     .run()?;
//!
//! match outcome.path {
//!     Some(p) => println!("found: {}", p.display()),
//!     None => println!("not found within the search limits"),
//! }
//! ```
//!
//! # Custom Trees
//!
//! Implement [`Tree`] to search anything with directory shape: the engine
//! only ever asks for a directory's immediate children and its parent.

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod fs;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::LocateBuilder;
pub use entry::TreeEntry;
pub use error::ScoutError;
pub use fs::OsTree;
pub use results::{Outcome, SearchStats};
pub use traits::Tree;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`LocateBuilder`] to configure and run a search.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = dirscout::locate()
///     .target("node_modules")
///     .forward_limit(2)
///     .backward_limit(5)
///     .run()?;
/// ```
pub fn locate() -> LocateBuilder {
    LocateBuilder::default()
}
