//! Blob path resolution
//!
//! Packs only store object ids, so the path of a blob is recovered from
//! `git rev-list --all --objects`, which prints every object reachable from
//! any ref, with the tree path that led to it for blobs and trees.

use gix_hash::ObjectId;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::BlobRecord;
use crate::util::ScanProgress;

use super::git::{command_line, git_args, GitRunner};

/// Outcome of a resolution pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveStats {
    /// Records that received a path during this pass
    pub resolved: usize,
    /// Records still without a path afterwards
    pub unresolved: usize,
    /// Listing lines examined before the scan finished
    pub lines_scanned: usize,
}

/// Assign paths to `blobs` from the repository's reachable objects
///
/// Does not run git when every record already has a path. A progress bar is
/// drawn on stderr when `show_progress` is set.
pub async fn resolve_paths(
    git: &impl GitRunner,
    blobs: &mut [BlobRecord],
    show_progress: bool,
) -> Result<ResolveStats> {
    if blobs.iter().all(BlobRecord::is_resolved) {
        return Ok(ResolveStats::default());
    }

    let args = git_args(&["rev-list", "--all", "--objects"]);
    let listing = git.run(&args).await?;
    let progress = ScanProgress::new("Resolving paths", listing.len() as u64, show_progress);
    assign_paths(&listing, blobs, &command_line(&args), &progress)
}

/// Single pass over `<oid> [<path>]` lines, stopping once nothing is left
///
/// The first path listed for an object wins; records that already carry a
/// path are left untouched.
pub fn assign_paths(
    listing: &str,
    blobs: &mut [BlobRecord],
    command: &str,
    progress: &ScanProgress,
) -> Result<ResolveStats> {
    let mut outstanding: FxHashMap<ObjectId, usize> = blobs
        .iter()
        .enumerate()
        .filter(|(_, blob)| !blob.is_resolved())
        .map(|(idx, blob)| (blob.oid, idx))
        .collect();

    let mut stats = ResolveStats::default();
    if outstanding.is_empty() {
        return Ok(stats);
    }

    for (idx, line) in listing.lines().enumerate() {
        stats.lines_scanned += 1;
        progress.line_done(line);

        // Commits and the root tree carry no path column
        let Some((hex, path)) = line.split_once(' ') else {
            continue;
        };
        if path.is_empty() {
            continue;
        }

        let oid = ObjectId::from_hex(hex.as_bytes())
            .map_err(|e| Error::parse(command, idx + 1, line, format!("invalid object id: {e}")))?;

        if let Some(pos) = outstanding.remove(&oid) {
            blobs[pos].path = Some(path.to_string());
            stats.resolved += 1;

            if outstanding.is_empty() {
                break;
            }
        }
    }

    progress.finish();
    stats.unresolved = outstanding.len();
    debug!(
        resolved = stats.resolved,
        unresolved = stats.unresolved,
        lines = stats.lines_scanned,
        "path resolution finished"
    );
    Ok(stats)
}
