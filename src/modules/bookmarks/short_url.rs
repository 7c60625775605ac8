//! Short code derivation for bookmarks.
//!
//! The code is the first three base62 digits of the SHA-256 digest of the
//! URL, computed once when the bookmark is created. It is deterministic but
//! not unique.

use sha2::{Digest, Sha256};

pub const SHORT_URL_LEN: usize = 3;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub fn short_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut n = digest[..8]
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));

    let mut code = String::with_capacity(SHORT_URL_LEN);
    for _ in 0..SHORT_URL_LEN {
        code.push(char::from(ALPHABET[(n % 62) as usize]));
        n /= 62;
    }
    code
}
