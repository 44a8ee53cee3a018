mod blob;
mod metric;

pub use blob::BlobRecord;
pub use metric::SizeMetric;
