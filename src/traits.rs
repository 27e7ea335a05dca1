//! Core BreedFetcher trait

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;

/// An immutable, shared list of sub-breed names.
///
/// Cached lookups hand out clones of the same allocation; callers cannot
/// mutate the list through this handle, so the cache retains sole ownership
/// of the stored value. May be empty for breeds without sub-breeds.
pub type SubBreeds = Arc<[String]>;

/// The service of resolving a dog breed to its list of sub-breeds.
///
/// This trait abstracts over the data source, letting consumers (and the
/// [`CachingFetcher`](crate::CachingFetcher) decorator) work against an
/// in-memory fake as easily as the live Dog CEO API.
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Fetch the list of sub-breeds for the given breed.
    ///
    /// Implementations must accept un-normalized input (surrounding
    /// whitespace, mixed case) and treat variants that normalize to the same
    /// key as the same breed.
    ///
    /// Returns [`GarmrError::BreedNotFound`](crate::GarmrError::BreedNotFound)
    /// if the breed does not exist or the fetch fails for any reason.
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds>;
}

#[async_trait]
impl<T: BreedFetcher + ?Sized> BreedFetcher for Arc<T> {
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        (**self).sub_breeds(breed).await
    }
}

/// Canonical lookup key for a breed: surrounding whitespace trimmed,
/// lowercased. Two inputs with the same normalized form are the same breed.
pub(crate) fn normalize_breed(breed: &str) -> String {
    breed.trim().to_lowercase()
}
