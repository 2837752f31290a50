//! Const hashing used to derive tag identities.
//!
//! The proc-macro side hashes string literals with the same function, so a
//! name produces the same stream whichever path built it.

/// FNV-1a 64-bit Hash for strings (const fn)
pub const fn fnv1a_64_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash: u64 = 0xcbf29ce484222325;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0x100000001b3);
        i += 1;
    }
    hash
}

/// Nibble `n` (0 = least significant) of the FNV-1a hash of `s`.
pub const fn hash_nibble(s: &str, n: u32) -> u8 {
    let hash = fnv1a_64_str(s);
    ((hash >> (n * 4)) & 0xF) as u8
}
