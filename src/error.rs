//! Garmr error types

/// Garmr error types
///
/// All lookup failures are reported as [`GarmrError::BreedNotFound`] to align
/// with the single failure mode of the [`BreedFetcher`](crate::BreedFetcher)
/// contract. The message distinguishes the cause (unknown breed, transport
/// failure, malformed payload) but callers are not expected to branch on it.
///
/// The error is `Clone` so that a failure shared between concurrent waiters
/// in [`CachingFetcher`](crate::CachingFetcher) can be handed to each of them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GarmrError {
    #[error("breed not found: {0}")]
    BreedNotFound(String),
}

/// Result type alias for Garmr operations
pub type Result<T> = std::result::Result<T, GarmrError>;
