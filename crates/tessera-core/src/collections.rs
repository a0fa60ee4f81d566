//! Map aliases used across the workspace.
//!
//! Fx hashing is the default; the `std-hash` feature swaps in the std maps for
//! debugging hash-order sensitive behaviour.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::{HashMap, HashSet};
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
}
