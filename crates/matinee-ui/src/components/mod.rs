//! UI components for the `Matinee` client.

pub mod notifications;
pub mod queue_card;

pub use notifications::{
    PlayerNotifContext, PlayerNotifProvider, PlayerNotifStack, use_player_notifs,
};
pub use queue_card::QueueCard;
