use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    // Traversal
    #[error("permission denied")]
    PermissionDenied(PathBuf),

    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config
    #[error("invalid target name: {0}")]
    InvalidTarget(String),

    #[error("start directory does not exist or is not a directory")]
    InvalidStart(PathBuf),
}

impl ScoutError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present "Skipped: <path>" without pattern matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::InvalidStart(p)
            | Self::Io { path: p, .. } => Some(p),
            Self::InvalidTarget(_) => None,
        }
    }

    /// Whether the search can continue after this error.
    ///
    /// Recoverable errors (permission denied, listing IO failures) are absorbed
    /// by the forward scan: the directory is treated as a leaf and the walk
    /// keeps going. They are only surfaced when `.collect_errors(true)` is set.
    ///
    /// Fatal errors (invalid target, invalid start directory) are reported
    /// before any traversal begins.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PermissionDenied(_) | Self::Io { .. })
    }
}
