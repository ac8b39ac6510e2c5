use serde::{Deserialize, Serialize};

/// One photo as returned by the Pexels API. `blurred_data_url` never comes
/// from upstream; the placeholder generator fills it in after the page is
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    pub src: PhotoSrc,
    pub photographer: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blurred_data_url: Option<String>,
}

/// Named image variants. Upstream returns more sizes; these two are the
/// ones the gallery renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSrc {
    pub large: String,
    pub large2x: String,
}

/// One page of a curated listing or topic search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPage {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    pub total_results: u64,
    pub photos: Vec<Photo>,
}
