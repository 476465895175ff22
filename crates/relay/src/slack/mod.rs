//! Slack integration for payroll notifications.
//!
//! This module provides:
//! - [`SlackClient`] for posting messages, describing files and conversations,
//!   and downloading shared files
//! - Events API payload types for the listeners
//! - Webhook signature verification
//!
//! # Flow
//!
//! 1. A spreadsheet arrives (upload route or `file_shared` event)
//! 2. Each eligible row becomes a direct message via `chat.postMessage`
//! 3. The recipient reacts to the message with the acknowledgement emoji
//! 4. The `reaction_added` event is correlated back to the row
//! 5. A confirmation is posted to the supervisory channel

mod client;
mod error;
pub mod events;
mod types;

pub use client::{SlackClient, sign_request};
pub use error::SlackError;
pub use events::{Event, EventEnvelope, FileSharedEvent, MessageEvent, ReactionAddedEvent};
pub use types::{Conversation, SlackFile};
