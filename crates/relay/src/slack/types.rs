//! Slack Web API request and response types.
//!
//! These types represent the subset of the Web API the relay consumes:
//! `chat.postMessage`, `files.info` and `conversations.info`.
//!
//! See: <https://api.slack.com/methods>

use serde::{Deserialize, Serialize};

/// A plain-text message.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage<'a> {
    /// Channel, DM or user ID to post to.
    pub channel: &'a str,
    /// Message text (mrkdwn).
    pub text: &'a str,
}

/// Common Web API response envelope.
///
/// Every method returns `ok` plus an `error` code on failure; the
/// method-specific fields are flattened into `body`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub ok: bool,
    /// Error code if not ok.
    #[serde(default)]
    pub error: Option<String>,
    /// Method-specific payload.
    #[serde(flatten)]
    pub body: T,
}

/// Response from posting a message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMessageResponse {
    /// Channel ID where message was posted.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (unique ID).
    #[serde(default)]
    pub ts: Option<String>,
}

/// Response from `files.info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileInfoResponse {
    /// File metadata.
    #[serde(default)]
    pub file: Option<SlackFile>,
}

/// File metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackFile {
    /// File ID.
    pub id: String,
    /// Original file name.
    #[serde(default)]
    pub name: Option<String>,
    /// Declared file type (e.g., "csv").
    #[serde(default)]
    pub filetype: Option<String>,
    /// Authenticated download URL.
    #[serde(default)]
    pub url_private_download: Option<String>,
}

impl SlackFile {
    /// Whether Slack classifies this file as a CSV spreadsheet.
    #[must_use]
    pub fn is_csv(&self) -> bool {
        self.filetype
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("csv"))
    }
}

/// Response from `conversations.info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationInfoResponse {
    /// Conversation metadata.
    #[serde(default)]
    pub channel: Option<Conversation>,
}

/// Conversation metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    /// Conversation ID.
    pub id: String,
    /// Whether this is a one-to-one direct message.
    #[serde(default)]
    pub is_im: bool,
}
