//! Stable restaurant identifiers.
//!
//! An identifier is `<slug>_<hash>`: the slug keeps ids greppable, the hash
//! keeps two establishments with the same slug apart. Ids are the public
//! primary key of the API, so the output must never depend on process state.

use sha2::{Digest, Sha256};

/// Hex characters kept from the digest
pub const HASH_WIDTH: usize = 8;

/// Lowercase `name` and collapse every run of non `[a-z0-9]` characters into
/// a single `_`, trimming separators at both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// Fixed-width hash of `"{name}_{city}"`
pub fn short_hash(name: &str, city: &str) -> String {
    let digest = Sha256::digest(format!("{}_{}", name, city).as_bytes());
    hex::encode(&digest[..HASH_WIDTH / 2])
}

/// Deterministic identifier for a `(name, city)` pair.
///
/// A name that slugs to nothing still yields `_<hash>`.
pub fn restaurant_id(name: &str, city: &str) -> String {
    format!("{}_{}", slugify(name), short_hash(name, city))
}
