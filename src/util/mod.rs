mod format;
pub mod progress;

pub use format::{format_size, kb_to_bytes, to_kb};
pub use progress::ScanProgress;
