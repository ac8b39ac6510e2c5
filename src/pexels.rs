use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ApiError;
use crate::photos::{Photo, PhotoPage};
use crate::videos::{Video, VideoPage};

const PHOTO_API_BASE: &str = "https://api.pexels.com/v1";
const VIDEO_API_BASE: &str = "https://api.pexels.com/videos";

/// Topic that maps to the default photo listing instead of a search.
pub const CURATED_TOPIC: &str = "curated";
/// Topic that maps to the default video listing instead of a search.
pub const POPULAR_TOPIC: &str = "popular";

fn url_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    result
}

fn build_listing_url(base: &str, default_topic: &str, topic: &str, page: Option<&str>) -> String {
    if topic == default_topic {
        match page {
            Some(p) => format!("{}/{}?page={}", base, default_topic, url_encode(p)),
            None => format!("{}/{}", base, default_topic),
        }
    } else {
        match page {
            Some(p) => format!(
                "{}/search?query={}&page={}",
                base,
                url_encode(topic),
                url_encode(p)
            ),
            None => format!("{}/search?query={}", base, url_encode(topic)),
        }
    }
}

/// A page with no results, or one claiming zero results per page, renders
/// the same as a failed fetch.
fn page_is_empty(total_results: u64, per_page: u32) -> bool {
    total_results == 0 || per_page == 0
}

/// Client for the Pexels photo and video APIs. Cheap to clone; the
/// underlying HTTP connection pool is shared.
#[derive(Clone)]
pub struct PexelsClient {
    api_key: String,
    photo_base_url: String,
    video_base_url: String,
    http_client: reqwest::Client,
}

impl PexelsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            photo_base_url: String::from(PHOTO_API_BASE),
            video_base_url: String::from(VIDEO_API_BASE),
            http_client: reqwest::Client::new(),
        }
    }

    fn photo_listing_url(&self, topic: &str, page: Option<&str>) -> String {
        build_listing_url(&self.photo_base_url, CURATED_TOPIC, topic, page)
    }

    fn video_listing_url(&self, topic: &str, page: Option<&str>) -> String {
        build_listing_url(&self.video_base_url, POPULAR_TOPIC, topic, page)
    }

    async fn fetch_response(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response)
    }

    /// Fetches a URL and deserializes the body. A malformed body is a
    /// transport problem; a well-formed body of the wrong shape is a
    /// validation failure carrying the first mismatch.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let payload: serde_json::Value = self.fetch_response(url).await?.json().await?;
        serde_json::from_value(payload).map_err(|e| ApiError::Validation(e.to_string()))
    }

    /// One page of curated photos (topic "curated") or a topic search.
    /// A page with nothing to show is reported as `ApiError::Empty`.
    pub async fn fetch_photo_page(
        &self,
        topic: &str,
        page: Option<&str>,
    ) -> Result<PhotoPage, ApiError> {
        let url = self.photo_listing_url(topic, page);
        let results: PhotoPage = self.fetch_json(&url).await?;
        if page_is_empty(results.total_results, results.per_page) {
            return Err(ApiError::Empty);
        }
        Ok(results)
    }

    /// One page of popular videos (topic "popular") or a topic search.
    pub async fn fetch_video_page(
        &self,
        topic: &str,
        page: Option<&str>,
    ) -> Result<VideoPage, ApiError> {
        let url = self.video_listing_url(topic, page);
        let results: VideoPage = self.fetch_json(&url).await?;
        if page_is_empty(results.total_results, results.per_page) {
            return Err(ApiError::Empty);
        }
        Ok(results)
    }

    pub async fn fetch_photo(&self, id: u64) -> Result<Photo, ApiError> {
        let url = format!("{}/photos/{}", self.photo_base_url, id);
        self.fetch_json(&url).await
    }

    pub async fn fetch_video(&self, id: u64) -> Result<Video, ApiError> {
        let url = format!("{}/videos/{}", self.video_base_url, id);
        self.fetch_json(&url).await
    }

    /// Raw image bytes for placeholder generation. Image CDN URLs are
    /// pre-signed, so no Authorization header here.
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PexelsClient {
        PexelsClient::new(&Config::new("test-key"))
    }

    #[test]
    fn curated_without_page_has_no_page_parameter() {
        let url = client().photo_listing_url("curated", None);
        assert_eq!(url, "https://api.pexels.com/v1/curated");
    }

    #[test]
    fn curated_with_page_appends_it() {
        let url = client().photo_listing_url("curated", Some("4"));
        assert_eq!(url, "https://api.pexels.com/v1/curated?page=4");
    }

    #[test]
    fn topic_search_first_page_has_query_only() {
        let url = client().photo_listing_url("nature", None);
        assert_eq!(url, "https://api.pexels.com/v1/search?query=nature");
    }

    #[test]
    fn topic_search_with_page_has_both_parameters() {
        let url = client().photo_listing_url("nature", Some("3"));
        assert_eq!(url, "https://api.pexels.com/v1/search?query=nature&page=3");
    }

    #[test]
    fn popular_videos_use_the_video_base() {
        let url = client().video_listing_url("popular", Some("2"));
        assert_eq!(url, "https://api.pexels.com/videos/popular?page=2");
    }

    #[test]
    fn video_search_uses_the_video_base() {
        let url = client().video_listing_url("ocean waves", None);
        assert_eq!(
            url,
            "https://api.pexels.com/videos/search?query=ocean%20waves"
        );
    }

    #[test]
    fn zero_results_or_zero_per_page_count_as_empty() {
        assert!(page_is_empty(0, 15));
        assert!(page_is_empty(8000, 0));
        assert!(!page_is_empty(8000, 15));
    }

    #[test]
    fn url_encode_escapes_reserved_characters() {
        assert_eq!(url_encode("black & white"), "black%20%26%20white");
        assert_eq!(url_encode("safe-chars_1.2~"), "safe-chars_1.2~");
    }
}
