use gix_hash::ObjectId;

/// A blob found in one of the repository's pack files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRecord {
    pub oid: ObjectId,
    /// Uncompressed size of the blob content in bytes
    pub size: u64,
    /// Size of the blob's entry inside the pack file in bytes
    pub packed_size: u64,
    /// Path of a tree entry referencing the blob, once resolved
    pub path: Option<String>,
}

impl BlobRecord {
    pub fn new(oid: ObjectId, size: u64, packed_size: u64) -> Self {
        Self {
            oid,
            size,
            packed_size,
            path: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.path.is_some()
    }

    /// Path for display; empty when no live ref reaches the blob
    pub fn display_path(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }
}
