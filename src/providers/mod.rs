//! Breed data sources.
//!
//! Currently one provider: [`DogApiFetcher`], backed by the public
//! Dog CEO API. Anything implementing [`BreedFetcher`](crate::BreedFetcher)
//! can stand in for it, including the in-memory fakes the test suite uses.

pub mod dog_api;

pub use dog_api::DogApiFetcher;
