/// Format a byte count as a human-readable string (B, KB, MB, GB)
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Whole kilobytes in `bytes`, rounded down
#[inline]
pub fn to_kb(bytes: u64) -> u64 {
    bytes / 1024
}

/// Bytes in `kb` kilobytes, saturating at `u64::MAX`
#[inline]
pub fn kb_to_bytes(kb: u64) -> u64 {
    kb.saturating_mul(1024)
}
