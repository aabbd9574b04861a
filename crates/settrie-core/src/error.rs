//! Error types for trie operations (§7).

/// Failure modes for `settrie-core` operations.
///
/// Conditions the type system already rules out -- a bad handle, or mutating a
/// trie while a query cursor borrows it -- have no variant here; they cannot
/// arise through this crate's API. Allocation failure is left to Rust's
/// default allocator-abort behavior, and internal invariant violations are
/// caught by `debug_assert!` in debug builds rather than surfaced as an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// `remove_by_label`/`remove_by_id` named a label or id with no live
    /// stored set.
    #[error("no stored set matches the given label or id")]
    NotFound,

    /// A binary image failed structural validation during `load`.
    #[error("malformed binary image: {0}")]
    MalformedImage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
