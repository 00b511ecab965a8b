//! Shared types for the `Matinee` UI.
//!
//! Player-facing track descriptors derived from the core model, plus the
//! notification shapes surfaced to the viewer.

use matinee_core::{VideoCaption, VideoSource};
use serde::{Deserialize, Serialize};

/// Kind of a text track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// Dialogue transcription or translation.
    #[default]
    Subtitles,
    /// Transcription including non-dialogue audio cues.
    Captions,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subtitles => write!(f, "subtitles"),
            Self::Captions => write!(f, "captions"),
        }
    }
}

/// A video rendition as the player advertises it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoTrack {
    /// Human-readable rendition label (e.g. "1080p").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Frame width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Frame height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl VideoTrack {
    /// Derive a player track from a model rendition.
    ///
    /// The rendition's quality rank is its vertical resolution.
    #[must_use]
    pub fn from_source(source: &VideoSource) -> Self {
        Self {
            label: Some(format!("{}p", source.quality)),
            width: None,
            height: Some(source.quality),
        }
    }
}

/// A text track as the player advertises it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptionTrack {
    /// Kind of the track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TrackKind>,
    /// Human-readable label, usually the language name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Language tag, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srclang: Option<String>,
    /// Whether the player should enable this track by default.
    #[serde(default)]
    pub default: bool,
}

impl CaptionTrack {
    /// Derive a player track from a model caption rendition.
    ///
    /// The model carries a display name but no language tag, so `srclang`
    /// stays unset.
    #[must_use]
    pub fn from_caption(caption: &VideoCaption) -> Self {
        Self {
            kind: Some(TrackKind::Subtitles),
            label: Some(caption.name.clone()),
            srclang: None,
            default: caption.is_default,
        }
    }
}

/// Severity of a player notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerNotifType {
    /// A playback failure the viewer should know about.
    Error,
    /// A degraded condition that does not stop playback.
    Warning,
    /// Neutral status information.
    Info,
}

impl std::fmt::Display for PlayerNotifType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A transient message surfaced to the viewer about playback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerNotif {
    /// Severity of the notification.
    #[serde(rename = "type")]
    pub notif_type: PlayerNotifType,
    /// Short message shown in the notification row.
    pub message: String,
    /// Longer explanation, shown on expansion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl PlayerNotif {
    /// Create a notification.
    #[must_use]
    pub fn new(notif_type: PlayerNotifType, message: impl Into<String>) -> Self {
        Self {
            notif_type,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detailed explanation.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(PlayerNotifType::Error, message)
    }

    /// Create a warning notification.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(PlayerNotifType::Warning, message)
    }

    /// Create an info notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(PlayerNotifType::Info, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_track_from_source() {
        let source = VideoSource {
            url: "https://cdn.example.com/bbb-1080.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            quality: 1080,
        };
        let track = VideoTrack::from_source(&source);
        assert_eq!(track.label.as_deref(), Some("1080p"));
        assert_eq!(track.height, Some(1080));
        assert_eq!(track.width, None);
    }

    #[test]
    fn test_caption_track_from_caption() {
        let caption = VideoCaption {
            url: "https://cdn.example.com/bbb.en.vtt".to_string(),
            content_type: "text/vtt".to_string(),
            name: "English".to_string(),
            is_default: true,
        };
        let track = CaptionTrack::from_caption(&caption);
        assert_eq!(track.kind, Some(TrackKind::Subtitles));
        assert_eq!(track.label.as_deref(), Some("English"));
        assert!(track.default);
        assert!(track.srclang.is_none());
    }

    #[test]
    fn test_all_track_fields_independently_omittable() {
        let track: VideoTrack = serde_json::from_str("{}").unwrap();
        assert_eq!(track, VideoTrack::default());

        let caption: CaptionTrack = serde_json::from_str("{}").unwrap();
        assert_eq!(caption, CaptionTrack::default());
    }

    #[test]
    fn test_notif_constructors() {
        let notif = PlayerNotif::warning("Slow network connection detected");
        assert_eq!(notif.notif_type, PlayerNotifType::Warning);
        assert_eq!(notif.message, "Slow network connection detected");
        assert!(notif.details.is_none());

        let detailed = PlayerNotif::error("Failed to load video")
            .with_details("The video could not be loaded.");
        assert_eq!(detailed.notif_type, PlayerNotifType::Error);
        assert_eq!(detailed.details.as_deref(), Some("The video could not be loaded."));
    }

    #[test]
    fn test_notif_serializes_with_type_tag() {
        let notif = PlayerNotif::info("Video playback will resume shortly");
        let json = serde_json::to_value(&notif).unwrap();
        assert_eq!(json["type"], "info");
        assert_eq!(json["message"], "Video playback will resume shortly");
        assert!(json.get("details").is_none());
    }
}
