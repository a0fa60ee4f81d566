//! Stable key hashing for render unit ids.

use std::hash::{Hash, Hasher};

#[cfg(feature = "std-hash")]
fn new_hasher() -> std::collections::hash_map::DefaultHasher {
    std::collections::hash_map::DefaultHasher::new()
}

#[cfg(not(feature = "std-hash"))]
fn new_hasher() -> ahash::AHasher {
    // fixed keys: ids must be identical across layout passes
    ahash::AHasher::default()
}

/// Mixes a parent key with a child's discriminator and position.
pub fn child_key(parent: u64, discriminator: &str, index: usize) -> u64 {
    let mut hasher = new_hasher();
    parent.hash(&mut hasher);
    discriminator.hash(&mut hasher);
    index.hash(&mut hasher);
    hasher.finish()
}
