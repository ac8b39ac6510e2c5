use tracing::warn;

use crate::error::ApiError;
use crate::pagination::{next_and_prev_pages, PageLinks};
use crate::pexels::{PexelsClient, CURATED_TOPIC, POPULAR_TOPIC};
use crate::photos::{Photo, PhotoPage};
use crate::placeholder::attach_placeholders;
use crate::title::extract_video_title_from_url;
use crate::videos::{Video, VideoPage};

/// A photo listing ready for the grid: placeholders attached, footer links
/// computed.
#[derive(Debug, Clone)]
pub struct PhotoGallery {
    pub page: PhotoPage,
    pub links: PageLinks,
}

#[derive(Debug, Clone)]
pub struct VideoGallery {
    pub page: VideoPage,
    pub links: PageLinks,
}

/// A single video plus the title derived from its canonical URL.
#[derive(Debug, Clone)]
pub struct VideoDetails {
    pub video: Video,
    pub title: String,
}

/// Whether the upstream was down, the payload malformed, or the search
/// simply empty, the page renders the same empty state; only the log line
/// tells them apart.
fn log_failure(what: &str, subject: &str, err: &ApiError) {
    match err {
        ApiError::Empty => warn!(%subject, "{what}: no results"),
        err => warn!(%subject, error = %err, "{what} failed"),
    }
}

/// Fetches one gallery page of photos. The topic defaults to "curated";
/// without a page token the first page is requested.
pub async fn photo_gallery(
    client: &PexelsClient,
    topic: Option<&str>,
    page: Option<&str>,
) -> Option<PhotoGallery> {
    let topic = topic.unwrap_or(CURATED_TOPIC);
    let results = match client.fetch_photo_page(topic, page).await {
        Ok(results) => results,
        Err(err) => {
            log_failure("photo listing", topic, &err);
            return None;
        }
    };

    let links = next_and_prev_pages(&results);
    let page = attach_placeholders(client, results).await;
    Some(PhotoGallery { page, links })
}

/// Fetches one gallery page of videos. The topic defaults to "popular".
/// Videos carry upstream preview pictures, so no placeholder pass here.
pub async fn video_gallery(
    client: &PexelsClient,
    topic: Option<&str>,
    page: Option<&str>,
) -> Option<VideoGallery> {
    let topic = topic.unwrap_or(POPULAR_TOPIC);
    let page = match client.fetch_video_page(topic, page).await {
        Ok(results) => results,
        Err(err) => {
            log_failure("video listing", topic, &err);
            return None;
        }
    };

    let links = next_and_prev_pages(&page);
    Some(VideoGallery { page, links })
}

/// Single photo for a detail page; `None` covers not-found and every other
/// failure alike.
pub async fn photo_details(client: &PexelsClient, id: u64) -> Option<Photo> {
    match client.fetch_photo(id).await {
        Ok(photo) => Some(photo),
        Err(err) => {
            log_failure("photo lookup", &id.to_string(), &err);
            None
        }
    }
}

pub async fn video_details(client: &PexelsClient, id: u64) -> Option<VideoDetails> {
    match client.fetch_video(id).await {
        Ok(video) => {
            let title = extract_video_title_from_url(&video.url);
            Some(VideoDetails { video, title })
        }
        Err(err) => {
            log_failure("video lookup", &id.to_string(), &err);
            None
        }
    }
}
