use std::path::PathBuf;

/// One immediate child of a directory, as reported by a
/// [`Tree`](crate::traits::Tree) during enumeration.
///
/// This is the whole projection the search needs: where the child lives,
/// what it is called, and whether it can be descended into. File contents
/// and metadata are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Full path to the child.
    pub path: PathBuf,

    /// The child's own name (final path component).
    pub name: String,

    /// Whether the child is itself a directory. Symlinks to directories
    /// report `false` here and are not descended into.
    pub is_dir: bool,
}
