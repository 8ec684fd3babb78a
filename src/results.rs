use std::path::PathBuf;
use std::time::Duration;

use crate::error::ScoutError;

/// The output of a completed search.
///
/// `path` is the located folder, or `None` if both search budgets were
/// exhausted without a match. NotFound is a value, never an error: callers
/// must branch on it explicitly.
#[derive(Debug)]
pub struct Outcome {
    /// Full path to the first directory whose name matched the target,
    /// in bounded-BFS-then-ascend order. `None` if nothing matched.
    pub path: Option<PathBuf>,

    /// Traversal statistics.
    pub stats: SearchStats,

    /// Recoverable errors absorbed during the search (permission denied,
    /// directories removed mid-scan). Only populated if `.collect_errors(true)`
    /// was set on the builder; the search outcome is identical either way.
    pub errors: Vec<ScoutError>,
}

impl Outcome {
    /// Whether the target folder was located.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Statistics for a completed search.
#[derive(Debug)]
pub struct SearchStats {
    /// Directories whose children were enumerated, across all scans.
    pub dirs_listed: usize,

    /// Forward scans run: the initial scan plus one per ascent step taken.
    pub scans: usize,

    /// Ascent steps actually taken (excluding the offset phase). May be less
    /// than the backward limit if a match or the filesystem root cut the
    /// loop short.
    pub ascents: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,
}
