use std::path::PathBuf;

use crate::engine::{run, EngineOptions, SearchConfig};
use crate::error::ScoutError;
use crate::fs::OsTree;
use crate::results::Outcome;
use crate::traits::Tree;

// ---------------------------------------------------------------------------
// LocateBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a dirscout search.
///
/// Created via [`dirscout::locate()`](crate::locate). Configure with chained
/// builder methods, then call [`run()`](LocateBuilder::run) to execute.
///
/// # Example
///
/// ```rust,ignore
/// let outcome = dirscout::locate()
///     .target("assets")
///     .start("/srv/app/worker")
///     .forward_limit(3)
///     .backward_limit(2)
///     .run()?;
/// ```
pub struct LocateBuilder {
    target: Option<String>,
    start: Option<PathBuf>,
    tree: Box<dyn Tree>,
    forward_limit: usize,
    backward_limit: usize,
    start_offset: usize,
    collect_errors: bool,
}

impl Default for LocateBuilder {
    fn default() -> Self {
        Self {
            target: None,
            start: None,
            tree: Box::new(OsTree),
            forward_limit: 10,
            backward_limit: 10,
            start_offset: 0,
            collect_errors: false,
        }
    }
}

impl LocateBuilder {
    // ── Target ────────────────────────────────────────────────────────────

    /// Set the folder name to locate. Required.
    ///
    /// Must be a single path component: a name containing a path separator
    /// is rejected by [`run()`](LocateBuilder::run).
    pub fn target(mut self, name: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self
    }

    // ── Start position ────────────────────────────────────────────────────

    /// Set the directory the search starts from.
    ///
    /// If not set, the process's current working directory is used. That
    /// default is resolved here at the boundary; the engine itself always
    /// receives an explicit start directory.
    pub fn start(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start = Some(dir.into());
        self
    }

    /// Set the tree to search.
    ///
    /// Defaults to the host filesystem ([`OsTree`]). Supply a custom
    /// [`Tree`] to search an in-memory structure or to stub out the
    /// filesystem in tests.
    pub fn tree(mut self, t: impl Tree + 'static) -> Self {
        self.tree = Box::new(t);
        self
    }

    // ── Budgets ───────────────────────────────────────────────────────────

    /// Maximum depth at which a match counts, per forward scan. Depth 0 is
    /// the scan root; its direct children are depth 1. `0` means no scan can
    /// ever match. Defaults to 10.
    pub fn forward_limit(mut self, d: usize) -> Self {
        self.forward_limit = d;
        self
    }

    /// Maximum number of ancestor hops after the initial scan fails. `0`
    /// disables backtracking entirely. Defaults to 10.
    pub fn backward_limit(mut self, n: usize) -> Self {
        self.backward_limit = n;
        self
    }

    /// Ancestor hops performed once, before any scanning, to pick a higher
    /// starting root than the literal start directory. Stops early at the
    /// filesystem root. Defaults to 0.
    pub fn start_offset(mut self, n: usize) -> Self {
        self.start_offset = n;
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Collect recoverable errors into [`Outcome::errors`].
    ///
    /// Disabled by default. When enabled, listing failures that the scan
    /// absorbed (permission denied, directories removed mid-scan) are
    /// reported rather than silently dropped. The search outcome is
    /// unaffected either way.
    pub fn collect_errors(mut self, yes: bool) -> Self {
        self.collect_errors = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the search and return the outcome.
    ///
    /// Blocks until the search completes. Not finding the target is a normal
    /// outcome ([`Outcome::path`] is `None`), not an error.
    ///
    /// # Errors
    ///
    /// Returns `Err` only for configuration errors, before any traversal:
    /// missing or empty target, a target containing a path separator, or a
    /// start directory that does not exist. Recoverable errors during the
    /// search are collected into [`Outcome::errors`] when
    /// `.collect_errors(true)` is set.
    pub fn run(self) -> Result<Outcome, ScoutError> {
        let target = self
            .target
            .ok_or_else(|| ScoutError::InvalidTarget("no target name provided".into()))?;

        if target.is_empty() {
            return Err(ScoutError::InvalidTarget("target name is empty".into()));
        }
        if target.chars().any(std::path::is_separator) {
            return Err(ScoutError::InvalidTarget(format!(
                "target name contains a path separator: {target:?}"
            )));
        }

        // The engine ascends via Tree::parent, so a relative start would run
        // out of parents at the relative anchor instead of climbing into the
        // working directory's real ancestors. Anchor it here, at the boundary.
        let start = match self.start {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => working_dir()?.join(dir),
            None => working_dir()?,
        };

        // Catch a bogus start directory here rather than letting the first
        // scan swallow it as an empty listing. Permission-denied starts are
        // left to the scan's absorb-and-continue policy.
        if let Err(ScoutError::Io { source, .. }) = self.tree.stat(&start) {
            if matches!(
                source.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
            ) {
                return Err(ScoutError::InvalidStart(start));
            }
        }

        let opts = EngineOptions {
            config: SearchConfig {
                target,
                forward_limit: self.forward_limit,
                backward_limit: self.backward_limit,
                start_offset: self.start_offset,
            },
            collect_errors: self.collect_errors,
        };

        Ok(run(self.tree.as_ref(), &start, opts))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The process's working directory, with IO failure mapped into the crate
/// error type.
fn working_dir() -> Result<PathBuf, ScoutError> {
    std::env::current_dir().map_err(|source| ScoutError::Io {
        path: PathBuf::new(),
        source,
    })
}
