use std::io::Cursor;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use futures::StreamExt;
use tracing::warn;

use crate::pexels::PexelsClient;
use crate::photos::{Photo, PhotoPage};

/// Longest edge of the downscaled preview. A handful of pixels is enough;
/// the browser blurs and stretches it anyway.
const PLACEHOLDER_EDGE: u32 = 8;

/// Concurrent placeholder fetches in flight at once.
const MAX_IN_FLIGHT: usize = 8;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Enriches every photo on the page with a blurred `data:` URL preview,
/// fetched from the photo's "large" variant.
///
/// Fetches run concurrently but bounded, each with its own timeout. A photo
/// whose fetch or decode fails keeps `blurred_data_url == None`; one bad
/// photo never fails the page. Output order matches input order.
pub async fn attach_placeholders(client: &PexelsClient, mut page: PhotoPage) -> PhotoPage {
    let placeholders = futures::stream::iter(page.photos.iter().map(|photo| {
        let client = client.clone();
        let url = photo.src.large.clone();
        async move { fetch_placeholder(&client, &url).await }
    }))
    .buffered(MAX_IN_FLIGHT)
    .collect::<Vec<_>>()
    .await;

    apply_placeholders(&mut page.photos, placeholders);
    page
}

async fn fetch_placeholder(client: &PexelsClient, url: &str) -> Option<String> {
    let bytes = match tokio::time::timeout(FETCH_TIMEOUT, client.fetch_image_bytes(url)).await {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(err)) => {
            warn!(%url, error = %err, "placeholder image fetch failed");
            return None;
        }
        Err(_) => {
            warn!(%url, "placeholder image fetch timed out");
            return None;
        }
    };

    match blurred_data_url(&bytes) {
        Ok(data_url) => Some(data_url),
        Err(err) => {
            warn!(%url, error = %err, "placeholder encoding failed");
            None
        }
    }
}

/// Index-aligned merge of fetch results into the photo list.
fn apply_placeholders(photos: &mut [Photo], placeholders: Vec<Option<String>>) {
    for (photo, placeholder) in photos.iter_mut().zip(placeholders) {
        photo.blurred_data_url = placeholder;
    }
}

/// Shrinks the image to a few pixels and re-encodes it as an inline JPEG
/// data URL.
fn blurred_data_url(bytes: &[u8]) -> Result<String, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let tiny = decoded.thumbnail(PLACEHOLDER_EDGE, PLACEHOLDER_EDGE);

    let mut encoded = Vec::new();
    tiny.to_rgb8()
        .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Jpeg)?;

    Ok(format!("data:image/jpeg;base64,{}", STANDARD.encode(&encoded)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photos::PhotoSrc;

    fn photo(id: u64) -> Photo {
        Photo {
            id,
            width: 4000,
            height: 6000,
            url: format!("https://www.pexels.com/photo/p-{id}/"),
            src: PhotoSrc {
                large: format!("https://images.pexels.com/photos/{id}/photo.jpg?w=940"),
                large2x: format!("https://images.pexels.com/photos/{id}/photo.jpg?w=1880"),
            },
            photographer: String::from("Jane Doe"),
            alt: String::from("alt text"),
            blurred_data_url: None,
        }
    }

    #[test]
    fn failed_fetch_leaves_its_photo_bare_and_order_intact() {
        let mut photos = vec![photo(1), photo(2), photo(3)];
        let placeholders = vec![
            Some(String::from("data:image/jpeg;base64,AAAA")),
            None,
            Some(String::from("data:image/jpeg;base64,BBBB")),
        ];

        apply_placeholders(&mut photos, placeholders);

        assert_eq!(photos.len(), 3);
        assert_eq!(photos[0].id, 1);
        assert_eq!(photos[1].id, 2);
        assert_eq!(photos[2].id, 3);
        assert!(photos[0].blurred_data_url.is_some());
        assert!(photos[1].blurred_data_url.is_none());
        assert!(photos[2].blurred_data_url.is_some());
    }

    #[test]
    fn encodes_a_tiny_jpeg_data_url() {
        // A 32x16 solid-color source image.
        let source = image::RgbImage::from_pixel(32, 16, image::Rgb([120, 80, 40]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(source)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let data_url = blurred_data_url(&bytes).unwrap();
        let payload = data_url.strip_prefix("data:image/jpeg;base64,").unwrap();

        let jpeg = STANDARD.decode(payload).unwrap();
        let preview = image::load_from_memory(&jpeg).unwrap();
        assert!(preview.width() <= PLACEHOLDER_EDGE);
        assert!(preview.height() <= PLACEHOLDER_EDGE);
    }

    #[test]
    fn garbage_bytes_are_an_error_not_a_panic() {
        assert!(blurred_data_url(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn unreachable_url_yields_no_placeholder() {
        let client = PexelsClient::new(&crate::config::Config::new("test-key"));
        // The .invalid TLD never resolves, so this fails fast in DNS.
        let result = fetch_placeholder(&client, "http://gallery.invalid/photo.jpg").await;
        assert_eq!(result, None);
    }
}
