//! Playback queue items.
//!
//! A queue item is a [`Video`] placed in a playback sequence, optionally
//! trimmed to a start/end window in seconds. Items are created at enqueue
//! time and consumed when played; ordering and synchronization of the
//! queue itself belong to the room service, not this crate.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::video::Video;

/// A video entry in a playback queue, optionally trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueItem {
    /// The video to play.
    #[serde(flatten)]
    pub video: Video,
    /// Offset in seconds where playback should begin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u64>,
    /// Offset in seconds where playback should stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<u64>,
}

impl QueueItem {
    /// Create an untrimmed queue item.
    #[must_use]
    pub const fn new(video: Video) -> Self {
        Self {
            video,
            start_at: None,
            end_at: None,
        }
    }

    /// Set the start offset.
    #[must_use]
    pub const fn with_start_at(mut self, secs: u64) -> Self {
        self.start_at = Some(secs);
        self
    }

    /// Set the end offset.
    #[must_use]
    pub const fn with_end_at(mut self, secs: u64) -> Self {
        self.end_at = Some(secs);
        self
    }

    /// Check the trim window.
    ///
    /// Construction is deliberately permissive; the enqueue path calls
    /// this to reject windows where the end does not exceed the start.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTrim`] when an end bound is set and does
    /// not exceed the effective start.
    pub fn validate(&self) -> Result<()> {
        if let Some(end_at) = self.end_at {
            let start_at = self.effective_start();
            if end_at <= start_at {
                warn!(
                    "rejecting trim window {}s..{}s for {}",
                    start_at, end_at, self.video.id
                );
                return Err(Error::InvalidTrim { start_at, end_at });
            }
        }
        Ok(())
    }

    /// Second the player should start at (0 when untrimmed).
    #[must_use]
    pub fn effective_start(&self) -> u64 {
        self.start_at.unwrap_or(0)
    }

    /// Second the player should stop at, falling back to the resolved
    /// duration. `None` when untrimmed and unresolved.
    #[must_use]
    pub fn effective_end(&self) -> Option<u64> {
        self.end_at.or_else(|| self.video.length_secs())
    }
}

impl From<Video> for QueueItem {
    fn from(video: Video) -> Self {
        Self::new(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::{VideoId, VideoMetadata, VideoService};

    fn sample_video() -> Video {
        Video::new(VideoId::new(VideoService::Youtube, "dQw4w9WgXcQ"))
    }

    fn resolved_video(length_secs: u64) -> Video {
        let mut video = sample_video();
        video.resolve_metadata(VideoMetadata {
            title: "Sample".to_string(),
            description: String::new(),
            length_secs,
            thumbnail_url: "https://cdn.example.com/t.jpg".to_string(),
            mime: "video/mp4".to_string(),
            highlight: false,
            hls_url: None,
            dash_url: None,
            sources: vec![],
            captions: vec![],
        });
        video
    }

    #[test]
    fn test_untrimmed_item_is_valid() {
        let item = QueueItem::new(sample_video());
        assert!(item.validate().is_ok());
        assert_eq!(item.effective_start(), 0);
        assert_eq!(item.effective_end(), None);
    }

    #[test]
    fn test_builder_sets_trim_window() {
        let item = QueueItem::new(sample_video())
            .with_start_at(10)
            .with_end_at(90);
        assert_eq!(item.start_at, Some(10));
        assert_eq!(item.end_at, Some(90));
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let item = QueueItem::new(sample_video())
            .with_start_at(90)
            .with_end_at(10);
        assert!(matches!(
            item.validate(),
            Err(Error::InvalidTrim {
                start_at: 90,
                end_at: 10
            })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let item = QueueItem::new(sample_video())
            .with_start_at(30)
            .with_end_at(30);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_end_without_start() {
        let item = QueueItem::new(sample_video()).with_end_at(0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_effective_end_falls_back_to_duration() {
        let item = QueueItem::new(resolved_video(596));
        assert_eq!(item.effective_end(), Some(596));

        let trimmed = QueueItem::new(resolved_video(596)).with_end_at(120);
        assert_eq!(trimmed.effective_end(), Some(120));
    }

    #[test]
    fn test_serde_omits_unset_bounds() {
        let item = QueueItem::new(sample_video());
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("start_at").is_none());
        assert!(json.get("end_at").is_none());

        let back: QueueItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
