//! `Matinee` Core Library
//!
//! Shared data model for the Matinee watch-party client:
//! - Video identity (service + opaque per-service id) and link recognition
//! - Resolved video metadata with source and caption renditions
//! - Playback queue items with optional trim windows
//!
//! Metadata resolution, transport, and the playback engine live in other
//! services; this crate only defines the shapes they exchange, so every
//! descriptive field is represented as possibly absent and consumers are
//! expected to degrade gracefully.

pub mod error;
pub mod queue;
pub mod video;

pub use error::{Error, Result};
pub use queue::QueueItem;
pub use video::{
    ALL_VIDEO_SERVICES, Video, VideoCaption, VideoId, VideoMetadata, VideoService, VideoSource,
};
