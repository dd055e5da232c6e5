//! Hash collections keyed with the FxHash function.
//!
//! Feature ids and revision tokens are short strings hashed on every
//! registry check, so the faster non-cryptographic hasher is used
//! everywhere instead of SipHash.

/// A `HashMap` using the FxHash function.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// A `HashSet` using the FxHash function.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
