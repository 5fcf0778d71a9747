//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member, VoiceState, Role, GuildChannel) for testing purposes. These
//! factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Overview
//!
//! Classifier tests need before/after snapshots of gateway state without a
//! gateway connection. These factories provide a consistent way to create
//! those objects with sensible defaults while allowing customization of the
//! fields the classifiers actually diff (channel, mute/deafen flags, role
//! list, timeout expiry).
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_voice_state};
//!
//! #[tokio::test]
//! async fn test_voice_join() {
//!     let old = create_test_voice_state(1111, "wumpus", None, false, false);
//!     let new = create_test_voice_state(1111, "wumpus", Some(3001), false, false);
//!
//!     // Use in your tests...
//! }
//! ```

pub mod channel;
pub mod member;
pub mod role;
pub mod user;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use member::create_test_member;
pub use role::create_test_role;
pub use user::create_test_user;
pub use voice_state::{create_test_bot_voice_state, create_test_voice_state};
