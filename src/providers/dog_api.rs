//! Dog CEO API client.
//!
//! Fetches sub-breed lists from `https://dog.ceo/api/breed/{breed}/list`.
//! See: <https://dog.ceo/dog-api/documentation/>
//!
//! All failures (unknown breed, transport error, malformed payload,
//! unexpected schema) are reported as
//! [`GarmrError::BreedNotFound`] to align with the single failure mode of
//! the [`BreedFetcher`] contract.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use crate::traits::{BreedFetcher, SubBreeds, normalize_breed};
use crate::{GarmrError, Result};

/// Default base URL for the Dog CEO API
const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// [`BreedFetcher`] backed by the Dog CEO API.
#[derive(Clone)]
pub struct DogApiFetcher {
    http: Client,
    base_url: String,
}

impl DogApiFetcher {
    /// Create a fetcher against the public Dog CEO API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a fetcher with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Build the `/breed/{breed}/list` URL with the breed percent-encoded
    /// as a single path segment.
    fn list_url(&self, breed: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            GarmrError::BreedNotFound(format!("invalid base URL {}: {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                GarmrError::BreedNotFound(format!(
                    "base URL {} cannot take path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("breed")
            .push(breed)
            .push("list");
        Ok(url)
    }
}

impl Default for DogApiFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedFetcher for DogApiFetcher {
    /// Fetch the list of sub-breeds for the given breed from the Dog CEO API.
    ///
    /// The breed is normalized (trimmed, lowercased) before the request; an
    /// empty normalized breed fails without touching the network.
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds> {
        let breed = normalize_breed(breed);
        if breed.is_empty() {
            return Err(GarmrError::BreedNotFound("breed is empty".to_string()));
        }

        let url = self.list_url(&breed)?;
        debug!(breed = %breed, url = %url, "fetching sub-breed list");

        // The API signals "unknown breed" in the JSON body (alongside an
        // HTTP 404), so the body is parsed regardless of the status code.
        let response = self.http.get(url).send().await.map_err(|e| {
            GarmrError::BreedNotFound(format!("network error while fetching {breed}: {e}"))
        })?;
        let body = response.text().await.map_err(|e| {
            GarmrError::BreedNotFound(format!("failed to read response body for {breed}: {e}"))
        })?;

        let subs = parse_breed_list(&body, &breed)?;
        Ok(subs.into())
    }
}

/// Dog CEO API envelope for `/breed/{breed}/list`.
///
/// `message` is an array of sub-breed names on success and an explanatory
/// string on error, so it is held as a raw value until `status` is known.
#[derive(Debug, Deserialize)]
struct BreedListResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: serde_json::Value,
    #[serde(default)]
    code: Option<u16>,
}

/// Parse a `/breed/{breed}/list` response body.
///
/// `status == "success"` yields the sub-breed array; `status == "error"`
/// with code 404 means the breed does not exist; anything else is an
/// unexpected response.
fn parse_breed_list(body: &str, breed: &str) -> Result<Vec<String>> {
    let response: BreedListResponse = serde_json::from_str(body).map_err(|e| {
        GarmrError::BreedNotFound(format!("failed to parse API response for {breed}: {e}"))
    })?;

    if response.status.eq_ignore_ascii_case("success") {
        return serde_json::from_value(response.message).map_err(|e| {
            GarmrError::BreedNotFound(format!("unexpected message payload for {breed}: {e}"))
        });
    }

    if response.status.eq_ignore_ascii_case("error") && response.code == Some(404) {
        return Err(GarmrError::BreedNotFound(breed.to_string()));
    }

    Err(GarmrError::BreedNotFound(format!(
        "unexpected API response for {breed}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_success_with_sub_breeds() {
        let body = r#"{"message":["afghan","basset","blood"],"status":"success"}"#;
        let subs = parse_breed_list(body, "hound").unwrap();
        assert_eq!(subs, ["afghan", "basset", "blood"]);
    }

    #[test]
    fn parse_success_with_empty_list() {
        let body = r#"{"message":[],"status":"success"}"#;
        let subs = parse_breed_list(body, "dingo").unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn parse_status_is_case_insensitive() {
        let body = r#"{"message":["afghan"],"status":"SUCCESS"}"#;
        let subs = parse_breed_list(body, "hound").unwrap();
        assert_eq!(subs, ["afghan"]);
    }

    #[test]
    fn parse_404_reports_the_breed() {
        let body = r#"{"status":"error","message":"Breed not found (master breed does not exist)","code":404}"#;
        let err = parse_breed_list(body, "unicorn").unwrap_err();
        assert_eq!(err.to_string(), "breed not found: unicorn");
    }

    #[test]
    fn parse_non_404_error_is_unexpected() {
        let body = r#"{"status":"error","message":"oops","code":500}"#;
        let err = parse_breed_list(body, "hound").unwrap_err();
        assert!(err.to_string().contains("unexpected API response"));
    }

    #[test]
    fn parse_success_with_string_message_rejected() {
        let body = r#"{"message":"not a list","status":"success"}"#;
        let err = parse_breed_list(body, "hound").unwrap_err();
        assert!(err.to_string().contains("unexpected message payload"));
    }

    #[test]
    fn parse_missing_status_is_unexpected() {
        let body = r#"{"message":["afghan"]}"#;
        let err = parse_breed_list(body, "hound").unwrap_err();
        assert!(err.to_string().contains("unexpected API response"));
    }

    #[test]
    fn parse_invalid_json_rejected() {
        let err = parse_breed_list("not json at all", "hound").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn list_url_joins_base_path() {
        let fetcher = DogApiFetcher::new();
        let url = fetcher.list_url("hound").unwrap();
        assert_eq!(url.as_str(), "https://dog.ceo/api/breed/hound/list");
    }

    #[test]
    fn list_url_handles_trailing_slash() {
        let fetcher = DogApiFetcher::with_base_url("http://127.0.0.1:8080/");
        let url = fetcher.list_url("hound").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/breed/hound/list");
    }

    #[test]
    fn list_url_percent_encodes_the_breed() {
        let fetcher = DogApiFetcher::new();
        let url = fetcher.list_url("german shepherd").unwrap();
        assert_eq!(
            url.as_str(),
            "https://dog.ceo/api/breed/german%20shepherd/list"
        );
    }

    #[test]
    fn list_url_rejects_unparseable_base() {
        let fetcher = DogApiFetcher::with_base_url("not a url");
        assert!(fetcher.list_url("hound").is_err());
    }
}
