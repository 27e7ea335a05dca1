//! Garmr - Cached sub-breed lookup client for the Dog CEO API
//!
//! This crate provides a stable [`BreedFetcher`] trait for resolving a dog
//! breed to its list of sub-breeds, an HTTP implementation backed by the
//! Dog CEO API, and [`CachingFetcher`], a memoizing decorator that remembers
//! successful lookups and counts how many calls actually reach the
//! underlying source. Failed lookups are never cached, so they are retried
//! on every call.
//!
//! # Example
//!
//! ```rust,no_run
//! use garmr::{BreedFetcher, CachingFetcher, DogApiFetcher};
//!
//! #[tokio::main]
//! async fn main() -> garmr::Result<()> {
//!     let fetcher = CachingFetcher::new(DogApiFetcher::new());
//!
//!     let subs = fetcher.sub_breeds("Hound ").await?;
//!     println!("{}", subs.join(", "));
//!
//!     // Same breed after normalization: served from the cache.
//!     fetcher.sub_breeds("hound").await?;
//!     assert_eq!(fetcher.calls_made(), 1);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod providers;
pub mod traits;

// Re-export main types at crate root
pub use cache::CachingFetcher;
pub use error::{GarmrError, Result};
pub use providers::DogApiFetcher;
pub use traits::{BreedFetcher, SubBreeds};
