// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

/// Deterministic 40-char hex object id for the i-th object
pub fn object_hex(i: usize) -> String {
    format!("{:040x}", (i as u128).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Generate `git verify-pack -v` output with N blobs plus a tree per 10 blobs
pub fn generate_verify_pack(num_blobs: usize) -> String {
    let mut out = String::with_capacity(num_blobs * 80);
    for i in 0..num_blobs {
        let size = (i * 7919) % 1_000_000 + 1;
        let packed = size / 3 + 1;
        if i % 10 == 0 {
            out.push_str(&format!("{} tree   {} {} {}\n", object_hex(i + num_blobs), 120, 90, i * 100));
        }
        if i % 4 == 0 {
            out.push_str(&format!(
                "{} blob   {} {} {} 1 {}\n",
                object_hex(i),
                size,
                packed,
                i * 100 + 50,
                object_hex(i + 1)
            ));
        } else {
            out.push_str(&format!("{} blob   {} {} {}\n", object_hex(i), size, packed, i * 100 + 50));
        }
    }
    out.push_str(&format!("non delta: {} objects\n", num_blobs));
    out
}

/// Generate `git rev-list --all --objects` output covering the same N blobs
pub fn generate_rev_list(num_blobs: usize) -> String {
    let mut out = String::with_capacity(num_blobs * 64);
    for i in 0..num_blobs {
        if i % 10 == 0 {
            out.push_str(&format!("{}\n", object_hex(i + num_blobs)));
        }
        out.push_str(&format!("{} src/dir_{}/file_{}.bin\n", object_hex(i), i / 100, i));
    }
    out
}
