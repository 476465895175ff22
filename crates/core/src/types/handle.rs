//! Sent-message handles.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier Slack assigns to a posted message (its `ts`).
///
/// Reaction events reference the message they target by this value, which
/// is how an acknowledgement is correlated back to the notification that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHandle(String);

impl MessageHandle {
    /// Create a handle from the platform-supplied value.
    #[must_use]
    pub fn new(ts: impl Into<String>) -> Self {
        Self(ts.into())
    }

    /// Get the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MessageHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageHandle {
    fn from(ts: String) -> Self {
        Self(ts)
    }
}

impl From<&str> for MessageHandle {
    fn from(ts: &str) -> Self {
        Self(ts.to_string())
    }
}
