use std::cmp::Ordering;

use super::BlobRecord;

/// Which of a blob's two sizes drives sorting and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMetric {
    /// Compressed size inside the pack file
    #[default]
    Packed,
    /// Uncompressed size of the content
    Physical,
}

impl SizeMetric {
    pub fn from_physical_flag(physical: bool) -> Self {
        if physical {
            SizeMetric::Physical
        } else {
            SizeMetric::Packed
        }
    }

    #[inline]
    pub fn size_of(self, blob: &BlobRecord) -> u64 {
        match self {
            SizeMetric::Packed => blob.packed_size,
            SizeMetric::Physical => blob.size,
        }
    }

    /// Orders larger blobs first
    pub fn compare_desc(self, a: &BlobRecord, b: &BlobRecord) -> Ordering {
        self.size_of(b).cmp(&self.size_of(a))
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeMetric::Packed => "pack size",
            SizeMetric::Physical => "physical size",
        }
    }
}
