use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::error::ScoutError;
use crate::results::{Outcome, SearchStats};
use crate::traits::Tree;

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Search parameters passed from the builder to the engine.
///
/// `pub(crate)`: not part of the public API. Callers configure these via the
/// builder methods (`.target()`, `.forward_limit()`, `.backward_limit()`,
/// `.start_offset()`). Immutable for the duration of one search.
pub(crate) struct SearchConfig {
    /// Folder name to locate. Validated by the builder: non-empty, no path
    /// separators.
    pub target: String,
    /// Maximum depth at which a match counts, per forward scan. Depth 0 is
    /// the scan root itself, so its direct children sit at depth 1.
    pub forward_limit: usize,
    /// Maximum number of ancestor hops after the initial scan.
    pub backward_limit: usize,
    /// Ancestor hops performed once, before any scanning begins.
    pub start_offset: usize,
}

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub config: SearchConfig,
    pub collect_errors: bool,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Execute a bounded bidirectional search from `start`.
///
/// This is the ascent driver: offset phase, initial forward scan, then up to
/// `backward_limit` ascend-and-rescan steps, nearest ancestor first. Called
/// by `LocateBuilder::run()` after validating inputs.
pub(crate) fn run(tree: &dyn Tree, start: &Path, opts: EngineOptions) -> Outcome {
    let start_time = Instant::now();

    let mut stats = SearchStats {
        dirs_listed: 0,
        scans: 0,
        ascents: 0,
        duration: Duration::ZERO,
    };
    let mut errors = Vec::new();

    let mut current = start.to_path_buf();

    // Offset phase: hop up before any scanning. Hitting the filesystem root
    // is a boundary, not a failure; the remaining hops are forfeited.
    for _ in 0..opts.config.start_offset {
        match tree.parent(&current) {
            Some(parent) => current = parent,
            None => break,
        }
    }

    debug!("starting search from: {}", current.display());

    // Initial scan from the offset-adjusted position.
    stats.scans += 1;
    let mut found = scan_forward(tree, &current, &opts, &mut stats, &mut errors);

    // Ascent loop: move up one level at a time and rescan, so nearer
    // ancestors always win over farther ones.
    if found.is_none() {
        for step in 1..=opts.config.backward_limit {
            let parent = match tree.parent(&current) {
                Some(p) => p,
                None => break,
            };
            current = parent;
            stats.ascents += 1;
            debug!("moving back to: {} (step {})", current.display(), step);

            stats.scans += 1;
            found = scan_forward(tree, &current, &opts, &mut stats, &mut errors);
            if found.is_some() {
                break;
            }
        }
    }

    stats.duration = start_time.elapsed();

    Outcome {
        path: found,
        stats,
        errors,
    }
}

// ---------------------------------------------------------------------------
// scan_forward()
// ---------------------------------------------------------------------------

/// Breadth-first scan of `root` and its descendants, bounded by depth.
///
/// Siblings are visited before children; the first match in BFS order wins,
/// so the shallowest match is returned. Among equal-depth candidates the
/// tie-break is the tree's enumeration order (filesystem-listing order for
/// `OsTree`), which is accepted nondeterminism.
///
/// A directory that cannot be listed is treated as a leaf and the scan keeps
/// going; the error is recorded only when `opts.collect_errors` is set.
fn scan_forward(
    tree: &dyn Tree,
    root: &Path,
    opts: &EngineOptions,
    stats: &mut SearchStats,
    errors: &mut Vec<ScoutError>,
) -> Option<PathBuf> {
    let limit = opts.config.forward_limit;

    // Fresh frontier per scan, never shared across scans or calls, so
    // concurrent searches stay independent.
    let mut frontier: VecDeque<(PathBuf, usize)> = VecDeque::new();
    frontier.push_back((root.to_path_buf(), 0));

    while let Some((dir, depth)) = frontier.pop_front() {
        trace!("scanning {} (depth {})", dir.display(), depth);

        let children = match tree.children(&dir) {
            Ok(c) => c,
            Err(e) => {
                if opts.collect_errors {
                    errors.push(e);
                }
                continue;
            }
        };
        stats.dirs_listed += 1;

        for child in children {
            if !child.is_dir {
                continue;
            }
            // A match at depth d only counts if d <= forward_limit; the same
            // bound prunes the frontier.
            let child_depth = depth + 1;
            if child_depth > limit {
                continue;
            }
            if child.name == opts.config.target {
                return Some(child.path);
            }
            frontier.push_back((child.path, child_depth));
        }
    }

    None
}
