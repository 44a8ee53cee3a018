//! Picking the blobs worth reporting
//!
//! Selection walks a listing sorted largest-first by the active metric and
//! stops at the first record it does not need, so the sort order is carried
//! by the [`SortedBlobs`] type rather than assumed from git's output.

use crate::model::{BlobRecord, SizeMetric};
use crate::util::kb_to_bytes;

/// Which blobs to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCriterion {
    /// The N largest blobs
    Count(usize),
    /// Every blob strictly larger than this many bytes
    Threshold(u64),
}

impl SelectionCriterion {
    /// Threshold mode when `files_exceeding_kb` is positive, count mode otherwise
    pub fn from_options(match_count: usize, files_exceeding_kb: i64) -> Self {
        if files_exceeding_kb > 0 {
            SelectionCriterion::Threshold(kb_to_bytes(files_exceeding_kb as u64))
        } else {
            SelectionCriterion::Count(match_count)
        }
    }
}

/// Blobs ordered largest-first by one metric
#[derive(Debug, Clone)]
pub struct SortedBlobs {
    blobs: Vec<BlobRecord>,
    metric: SizeMetric,
}

impl SortedBlobs {
    /// Sort `blobs` descending by `metric`; equal sizes keep their input order
    pub fn new(mut blobs: Vec<BlobRecord>, metric: SizeMetric) -> Self {
        blobs.sort_by(|a, b| metric.compare_desc(a, b));
        Self { blobs, metric }
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    pub fn as_slice(&self) -> &[BlobRecord] {
        &self.blobs
    }

    /// Keep the records matching `criterion`, still largest-first
    pub fn select(self, criterion: SelectionCriterion) -> Vec<BlobRecord> {
        let metric = self.metric;
        match criterion {
            SelectionCriterion::Count(n) => self.blobs.into_iter().take(n).collect(),
            SelectionCriterion::Threshold(bytes) => self
                .blobs
                .into_iter()
                .take_while(|blob| metric.size_of(blob) > bytes)
                .collect(),
        }
    }
}
