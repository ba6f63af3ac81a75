//! Image search collaborator: a thin client for an Unsplash-compatible
//! photo search API. Only the URL fields of a result ever reach the
//! timeline; everything else is display data.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Environment variable holding the API access key.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Failures from the search collaborator. These surface to the UI notice
/// area and never touch the store.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("image search request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("image search returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// One photo descriptor from the search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteImage {
    pub id: String,
    pub description: Option<String>,
    /// Small rendition for the results grid.
    pub thumb_url: String,
    /// Full-resolution rendition used as the media source.
    pub full_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<ApiPhoto>,
}

#[derive(Debug, Deserialize)]
struct ApiPhoto {
    id: String,
    alt_description: Option<String>,
    urls: ApiPhotoUrls,
}

#[derive(Debug, Deserialize)]
struct ApiPhotoUrls {
    small: String,
    regular: String,
}

impl From<ApiPhoto> for RemoteImage {
    fn from(photo: ApiPhoto) -> Self {
        Self {
            id: photo.id,
            description: photo.alt_description,
            thumb_url: photo.urls.small,
            full_url: photo.urls.regular,
        }
    }
}

/// Client for the photo search API.
#[derive(Debug, Clone)]
pub struct ImageSearchClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl ImageSearchClient {
    /// Create a client against the public API.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_key)
    }

    /// Create a client against an explicit endpoint.
    pub fn with_base_url(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_key: access_key.into(),
        }
    }

    /// Build a client from the environment, if an access key is configured.
    pub fn from_env() -> Option<Self> {
        std::env::var(ACCESS_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }

    fn search_url(&self, query: &str, per_page: u32) -> String {
        format!(
            "{}/search/photos?query={}&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            per_page
        )
    }

    /// Search for photos matching `query`, returning up to `per_page`
    /// descriptors.
    pub async fn search(&self, query: &str, per_page: u32) -> Result<Vec<RemoteImage>, SearchError> {
        let url = self.search_url(query, per_page);
        debug!("image search: {url}");

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::BadStatus(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.results.into_iter().map(RemoteImage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let client = ImageSearchClient::with_base_url("https://api.example", "key");
        assert_eq!(
            client.search_url("misty forest", 20),
            "https://api.example/search/photos?query=misty%20forest&per_page=20"
        );
    }

    #[test]
    fn test_response_mapping() {
        let body = r#"{
            "total": 1,
            "total_pages": 1,
            "results": [{
                "id": "abc123",
                "alt_description": "a beach at sunset",
                "urls": {
                    "raw": "https://images.example/raw.jpg",
                    "regular": "https://images.example/regular.jpg",
                    "small": "https://images.example/small.jpg"
                }
            }]
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let images: Vec<RemoteImage> = parsed.results.into_iter().map(RemoteImage::from).collect();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "abc123");
        assert_eq!(images[0].thumb_url, "https://images.example/small.jpg");
        assert_eq!(images[0].full_url, "https://images.example/regular.jpg");
        assert_eq!(images[0].description.as_deref(), Some("a beach at sunset"));
    }

    #[test]
    fn test_response_tolerates_missing_description() {
        let body = r#"{"results": [{"id": "x", "alt_description": null,
            "urls": {"small": "s", "regular": "r"}}]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.results[0].alt_description.is_none());
    }
}
