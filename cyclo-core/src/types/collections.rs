//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec optimized for cycle step sequences (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;

/// SmallVec optimized for decomposition index lists (usually <4).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
