//! Content identity.
//!
//! The identifier of an analyzed string is a one-way hash of its exact
//! content, so equal inputs always map to the same id and the external
//! store can use it both as primary key and as de-duplication key.
//!
//! The constants below are load-bearing and permanent: changing any of
//! them breaks every identifier already handed out.
//!
//! - algorithm: SHA-256
//! - input: the UTF-8 bytes of the string, no normalization
//! - rendering: lowercase hexadecimal (64 characters)

use sha2::{Digest, Sha256};

/// Hash `value` into its stable content identifier.
pub(crate) fn content_id(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_sha256_vectors() {
        // Published SHA-256 test vectors; these pin algorithm and rendering.
        assert_eq!(content_id(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(content_id("abc"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn is_deterministic_and_content_sensitive() {
        assert_eq!(content_id("hello"), content_id("hello"));
        assert_ne!(content_id("hello"), content_id("hello "));
        // No case folding on the identity path.
        assert_ne!(content_id("Hello"), content_id("hello"));
    }

    #[test]
    fn renders_lowercase_hex_of_fixed_width() {
        let id = content_id("anything");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
