use serde::{Deserialize, Serialize};

/// One video as returned by the Pexels API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub width: u32,
    pub height: u32,
    pub url: String,
    /// Thumbnail shown in the grid before playback starts.
    pub image: String,
    pub full_res: Option<String>,
    pub tags: Vec<String>,
    /// Duration in seconds.
    pub duration: u32,
    pub user: VideoUser,
    pub video_files: Vec<VideoFile>,
    pub video_pictures: Vec<VideoPicture>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoUser {
    pub id: u64,
    pub name: String,
    pub url: String,
}

/// A playable rendition of a video. `quality` is a free-form upstream label
/// ("hd", "sd", ...), not a closed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
    pub id: u64,
    pub quality: String,
    pub file_type: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    pub link: String,
}

/// A preview frame; `nr` is its position in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPicture {
    pub id: u64,
    pub picture: String,
    pub nr: u32,
}

/// One page of a popular listing or topic search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPage {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    pub total_results: u64,
    pub url: String,
    pub videos: Vec<Video>,
}
