//! `Matinee` UI - Leptos-based user interface.
//!
//! This crate provides the frontend components for the Matinee
//! watch-party client: the playback queue view and the player
//! notification stack.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// expect_used is restricted to documented cases (context hooks)
#![allow(clippy::expect_used)]

pub mod app;
pub mod components;
pub mod types;

pub use app::App;
pub use types::{CaptionTrack, PlayerNotif, PlayerNotifType, TrackKind, VideoTrack};
