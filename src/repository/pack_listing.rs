//! Packed blob listing
//!
//! Enumerates every blob stored in the repository's pack files together with
//! its uncompressed and in-pack sizes, as reported by `git verify-pack -v`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use gix_hash::ObjectId;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{BlobRecord, SizeMetric};

use super::git::{command_line, git_args, GitRunner};

/// Blobs found in the repository's pack files, one record per object id
#[derive(Debug, Default, Clone)]
pub struct PackListing {
    blobs: Vec<BlobRecord>,
}

impl PackListing {
    /// Run `git verify-pack -v` over every pack index of the repository
    ///
    /// A repository without pack files yields an empty listing.
    pub async fn load(git: &impl GitRunner) -> Result<Self> {
        let pack_dir = pack_dir(git).await?;
        let indexes = pack_index_files(&pack_dir)?;
        debug!(pack_dir = %pack_dir.display(), indexes = indexes.len(), "found pack indexes");

        if indexes.is_empty() {
            return Ok(Self::default());
        }

        let mut args = git_args(&["verify-pack", "-v"]);
        args.extend(indexes.into_iter().map(OsString::from));
        let output = git.run(&args).await?;

        Self::from_verify_pack_output(&output, &command_line(&args[..2]))
    }

    /// Parse the text printed by `git verify-pack -v`
    ///
    /// `command` names the invocation in parse errors.
    pub fn from_verify_pack_output(output: &str, command: &str) -> Result<Self> {
        let mut blobs = Vec::new();
        for (idx, line) in output.lines().enumerate() {
            if let Some(blob) = parse_verify_pack_line(line, idx + 1, command)? {
                blobs.push(blob);
            }
        }
        Ok(Self::from_blobs(blobs))
    }

    /// Build a listing, keeping the last record seen for a duplicated object id
    pub fn from_blobs(blobs: Vec<BlobRecord>) -> Self {
        let mut positions: FxHashMap<ObjectId, usize> = FxHashMap::default();
        positions.reserve(blobs.len());
        let mut unique: Vec<BlobRecord> = Vec::with_capacity(blobs.len());

        for blob in blobs {
            match positions.get(&blob.oid) {
                Some(&pos) => unique[pos] = blob,
                None => {
                    positions.insert(blob.oid, unique.len());
                    unique.push(blob);
                }
            }
        }

        Self { blobs: unique }
    }

    pub fn blobs(&self) -> &[BlobRecord] {
        &self.blobs
    }

    pub fn into_blobs(self) -> Vec<BlobRecord> {
        self.blobs
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Sum of the chosen size over all listed blobs
    pub fn total_size(&self, metric: SizeMetric) -> u64 {
        self.blobs.iter().map(|b| metric.size_of(b)).sum()
    }
}

/// Resolve the pack directory of the repository's object store
///
/// `--git-path` follows linked worktrees to the common directory and honors
/// `GIT_OBJECT_DIRECTORY`.
async fn pack_dir(git: &impl GitRunner) -> Result<PathBuf> {
    let args = git_args(&["rev-parse", "--path-format=absolute", "--git-path", "objects/pack"]);
    let output = git.run(&args).await?;
    let pack_dir = output.trim();
    if pack_dir.is_empty() {
        return Err(Error::parse(&command_line(&args), 1, pack_dir, "empty pack directory"));
    }
    Ok(PathBuf::from(pack_dir))
}

/// All `pack-*.idx` files in `pack_dir`, sorted by name
pub fn pack_index_files(pack_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(pack_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(Error::Io {
                path: pack_dir.to_path_buf(),
                source,
            });
        }
    };

    let mut indexes: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| is_pack_index(path))
        .collect();
    indexes.sort();
    Ok(indexes)
}

fn is_pack_index(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with("pack-") && name.ends_with(".idx")
}

/// Parse one line of `git verify-pack -v` output
///
/// Object lines look like
/// `<oid> <type> <size> <size-in-pack> <offset> [<depth> <base-oid>]`.
/// Summary lines (`non delta: ...`, `chain length = ...`, `<pack>: ok`)
/// and objects other than blobs yield `None`.
pub fn parse_verify_pack_line(line: &str, line_no: usize, command: &str) -> Result<Option<BlobRecord>> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    let Some(&kind) = cols.get(1) else {
        return Ok(None);
    };
    if kind != "blob" {
        if matches!(kind, "commit" | "tree" | "tag") && cols.len() != 5 && cols.len() != 7 {
            warn!(line_no, line, "skipping malformed {kind} line");
        }
        return Ok(None);
    }

    if cols.len() != 5 && cols.len() != 7 {
        return Err(Error::parse(
            command,
            line_no,
            line,
            format!("expected 5 or 7 columns, found {}", cols.len()),
        ));
    }

    let oid = ObjectId::from_hex(cols[0].as_bytes())
        .map_err(|e| Error::parse(command, line_no, line, format!("invalid object id: {e}")))?;
    let size = parse_size(cols[2], "size", line, line_no, command)?;
    let packed_size = parse_size(cols[3], "size-in-pack", line, line_no, command)?;

    Ok(Some(BlobRecord::new(oid, size, packed_size)))
}

fn parse_size(col: &str, what: &str, line: &str, line_no: usize, command: &str) -> Result<u64> {
    col.parse::<u64>()
        .map_err(|_| Error::parse(command, line_no, line, format!("invalid {what} {col:?}")))
}
