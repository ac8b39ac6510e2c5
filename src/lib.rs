//! Data layer for a Pexels-backed stock media gallery.
//!
//! The crate fetches curated/popular listings, topic searches, and single
//! photo/video lookups from the Pexels API, validates the payloads into
//! typed records, computes footer pagination links, and enriches photo
//! pages with blurred lazy-load placeholders. Rendering is left to the
//! consumer; the [`gallery`] module is the surface a UI layer calls.

pub mod config;
pub mod error;
pub mod gallery;
pub mod pagination;
pub mod pexels;
pub mod photos;
pub mod placeholder;
pub mod title;
pub mod videos;

pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use gallery::{PhotoGallery, VideoDetails, VideoGallery};
pub use pexels::PexelsClient;
