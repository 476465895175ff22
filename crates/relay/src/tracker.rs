//! Acknowledgement tracker.
//!
//! Remembers which recipient each sent notification belongs to, keyed by
//! the message handle Slack returned, so a later `reaction_added` event can
//! be attributed back to the right row.
//!
//! Entries live in a `moka` cache: they expire after a configurable TTL and
//! the total is capped, so the map cannot grow without bound. Nothing is
//! persisted; a restart forgets every pending acknowledgement.

use std::time::Duration;

use moka::future::Cache;
use payroll_relay_core::MessageHandle;

use crate::config::AckConfig;

/// Recipient of a sent notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Slack user ID the notification was sent to.
    pub recipient_id: String,
    /// Recipient name as it appeared in the spreadsheet.
    pub recipient_name: String,
}

/// Concurrent map from sent-message handle to recipient.
///
/// Cheap to clone; clones share the same entries.
#[derive(Clone)]
pub struct AckTracker {
    cache: Cache<MessageHandle, NotificationRecord>,
}

impl std::fmt::Debug for AckTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AckTracker")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl AckTracker {
    /// Create a tracker whose entries expire after `ttl`, holding at most
    /// `max_entries`.
    #[must_use]
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { cache }
    }

    /// Create a tracker from the acknowledgement configuration.
    #[must_use]
    pub fn from_config(config: &AckConfig) -> Self {
        Self::new(config.ttl, config.max_entries)
    }

    /// Remember who a sent notification belongs to.
    ///
    /// Overwrites any previous entry for the same handle.
    pub async fn record(
        &self,
        handle: MessageHandle,
        recipient_id: impl Into<String>,
        recipient_name: impl Into<String>,
    ) {
        let record = NotificationRecord {
            recipient_id: recipient_id.into(),
            recipient_name: recipient_name.into(),
        };
        self.cache.insert(handle, record).await;
    }

    /// Look up the recipient of a notification without forgetting it.
    pub async fn lookup(&self, handle: &MessageHandle) -> Option<NotificationRecord> {
        self.cache.get(handle).await
    }

    /// Look up the recipient of a notification and forget it.
    pub async fn take(&self, handle: &MessageHandle) -> Option<NotificationRecord> {
        self.cache.remove(handle).await
    }

    /// Approximate number of tracked notifications.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether no notifications are tracked (approximate).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
