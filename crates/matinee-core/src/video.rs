//! Shared video model: identity, metadata, and renditions.
//!
//! A video enters the system as bare identity (service + opaque id) and is
//! enriched in place once metadata resolution completes. Resolution itself
//! happens elsewhere; this module only defines the shapes.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Service a video originates from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VideoService {
    /// YouTube video.
    Youtube,
    /// Vimeo video.
    Vimeo,
    /// Dailymotion video.
    Dailymotion,
    /// Video hosted on a PeerTube instance.
    Peertube,
    /// Direct link to a progressive media file.
    Direct,
    /// Direct link to an HLS playlist.
    Hls,
    /// Direct link to a DASH manifest.
    Dash,
}

/// Every service the player supports.
pub const ALL_VIDEO_SERVICES: [VideoService; 7] = [
    VideoService::Youtube,
    VideoService::Vimeo,
    VideoService::Dailymotion,
    VideoService::Peertube,
    VideoService::Direct,
    VideoService::Hls,
    VideoService::Dash,
];

impl fmt::Display for VideoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Youtube => write!(f, "youtube"),
            Self::Vimeo => write!(f, "vimeo"),
            Self::Dailymotion => write!(f, "dailymotion"),
            Self::Peertube => write!(f, "peertube"),
            Self::Direct => write!(f, "direct"),
            Self::Hls => write!(f, "hls"),
            Self::Dash => write!(f, "dash"),
        }
    }
}

impl FromStr for VideoService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "youtube" => Ok(Self::Youtube),
            "vimeo" => Ok(Self::Vimeo),
            "dailymotion" => Ok(Self::Dailymotion),
            "peertube" => Ok(Self::Peertube),
            "direct" => Ok(Self::Direct),
            "hls" => Ok(Self::Hls),
            "dash" => Ok(Self::Dash),
            other => Err(Error::UnknownService(other.to_string())),
        }
    }
}

/// Identity of a video: the originating service plus the opaque id the
/// service knows it by.
///
/// The id is only meaningful within its service namespace. Identity is
/// immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VideoId {
    /// Service the video originates from.
    pub service: VideoService,
    /// Opaque per-service id.
    pub id: String,
}

impl VideoId {
    /// Create a video identity.
    pub fn new(service: VideoService, id: impl Into<String>) -> Self {
        Self {
            service,
            id: id.into(),
        }
    }

    /// Derive a video identity from a pasted link.
    ///
    /// Recognizes YouTube watch/short/embed links, Vimeo and Dailymotion
    /// video pages, and raw media links (`.m3u8` playlists, `.mpd`
    /// manifests, progressive files), where the link itself becomes the
    /// id. PeerTube instances live on arbitrary domains and cannot be
    /// recognized here; callers select that service explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedUrl`] when no supported service
    /// matches the link.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = url.trim();
        let url_lower = url.to_lowercase();

        if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
            return Err(Error::UnrecognizedUrl(url.to_string()));
        }

        if url_lower.contains("youtube.com") || url_lower.contains("youtu.be") {
            if let Some(id) = extract_youtube_id(url) {
                debug!("recognized link as youtube video {}", id);
                return Ok(Self::new(VideoService::Youtube, id));
            }
        } else if url_lower.contains("vimeo.com") {
            if let Some(id) = capture_first(r"vimeo\.com/(\d+)", url) {
                debug!("recognized link as vimeo video {}", id);
                return Ok(Self::new(VideoService::Vimeo, id));
            }
        } else if url_lower.contains("dailymotion.com") || url_lower.contains("dai.ly") {
            if let Some(id) =
                capture_first(r"(?:dailymotion\.com/video/|dai\.ly/)([a-zA-Z0-9]+)", url)
            {
                debug!("recognized link as dailymotion video {}", id);
                return Ok(Self::new(VideoService::Dailymotion, id));
            }
        } else if let Some(service) = detect_raw_media_service(&url_lower) {
            debug!("recognized link as raw {} media", service);
            return Ok(Self::new(service, url));
        }

        Err(Error::UnrecognizedUrl(url.to_string()))
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.service, self.id)
    }
}

/// Extract a YouTube video id from a watch, short, shorts, or embed link.
fn extract_youtube_id(url: &str) -> Option<String> {
    capture_first(r"(?:[?&]v=|youtu\.be/|/shorts/|/embed/)([A-Za-z0-9_-]{6,})", url)
}

/// Run `pattern` against `url` and return its first capture group.
fn capture_first(pattern: &str, url: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classify a link to a raw media file by its path extension.
fn detect_raw_media_service(url_lower: &str) -> Option<VideoService> {
    // Extension lives on the path, not the query or fragment
    let path = url_lower.split(['?', '#']).next().unwrap_or(url_lower);

    if path.ends_with(".m3u8") {
        Some(VideoService::Hls)
    } else if path.ends_with(".mpd") {
        Some(VideoService::Dash)
    } else if path.ends_with(".mp4") || path.ends_with(".webm") || path.ends_with(".ogv") {
        Some(VideoService::Direct)
    } else {
        None
    }
}

/// One playable rendition of a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoSource {
    /// URL of the rendition.
    pub url: String,
    /// MIME content type (e.g. `video/mp4`).
    pub content_type: String,
    /// Numeric quality rank used to select among alternatives.
    pub quality: u32,
}

/// One subtitle rendition of a video.
///
/// At most one caption is conventionally the default; the type does not
/// enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoCaption {
    /// URL of the caption file.
    pub url: String,
    /// MIME content type (e.g. `text/vtt`).
    pub content_type: String,
    /// Human-readable name, usually the language.
    pub name: String,
    /// Whether the player should enable this caption by default.
    #[serde(default)]
    pub is_default: bool,
}

/// Descriptive attributes of a resolved video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Video title.
    pub title: String,
    /// Video description.
    pub description: String,
    /// Duration in seconds.
    pub length_secs: u64,
    /// Thumbnail URL.
    pub thumbnail_url: String,
    /// MIME type of the primary stream.
    pub mime: String,
    /// Whether the service marked this video as a highlight.
    #[serde(default)]
    pub highlight: bool,
    /// HLS playlist URL, when the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_url: Option<String>,
    /// DASH manifest URL, when the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash_url: Option<String>,
    /// Playable renditions; selection among them is the player's call.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<VideoSource>,
    /// Subtitle renditions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub captions: Vec<VideoCaption>,
}

/// A video as the client knows it: identity, plus metadata once resolved.
///
/// A video is valid with identity alone. "Not yet resolved" is a single
/// explicit state: every descriptive field arrives together when
/// resolution completes, and is never partially invalidated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Identity of the video.
    #[serde(flatten)]
    pub id: VideoId,
    /// Descriptive attributes; `None` until metadata resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VideoMetadata>,
}

impl Video {
    /// Create a video from identity alone.
    #[must_use]
    pub const fn new(id: VideoId) -> Self {
        Self { id, metadata: None }
    }

    /// Attach resolved metadata, replacing any earlier resolution.
    pub fn resolve_metadata(&mut self, metadata: VideoMetadata) {
        self.metadata = Some(metadata);
    }

    /// Whether metadata has resolved for this video.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.metadata.is_some()
    }

    /// Title to render, with a fallback for unresolved videos.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.metadata
            .as_ref()
            .map_or("Untitled video", |m| m.title.as_str())
    }

    /// Thumbnail URL, when metadata has resolved.
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.thumbnail_url.as_str())
    }

    /// Duration in seconds, when metadata has resolved.
    #[must_use]
    pub fn length_secs(&self) -> Option<u64> {
        self.metadata.as_ref().map(|m| m.length_secs)
    }
}

impl From<VideoId> for Video {
    fn from(id: VideoId) -> Self {
        Self::new(id)
    }
}
