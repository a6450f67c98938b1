//! BLAKE3 digests of embedded payloads

use blake3::Hasher;

/// Digest of a raw payload, as stored next to its compressed literal
pub fn digest(bytes: &[u8]) -> [u8; blake3::OUT_LEN] {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    *hasher.finalize().as_bytes()
}

/// Short form for status lines
pub fn short_digest(digest: &[u8; blake3::OUT_LEN]) -> String {
    let full = blake3::Hash::from_bytes(*digest).to_hex();
    full.as_str()[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_matches_blake3() {
        assert_eq!(digest(b"abc"), *blake3::hash(b"abc").as_bytes());
    }

    #[test]
    fn test_short_digest() {
        assert_eq!(short_digest(&digest(b"")), "af1349b9f5f9");
    }
}
