//! Application state shared across handlers.

use std::sync::Arc;

use payroll_relay_core::Composer;

use crate::config::RelayConfig;
use crate::services::{Dispatcher, EventListeners};
use crate::slack::{SlackClient, SlackError};
use crate::tracker::AckTracker;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Background event tasks hold a
/// clone, so the tracker outlives the request that acknowledged the event.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RelayConfig,
    slack: SlackClient,
    dispatcher: Dispatcher,
    listeners: EventListeners,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Slack HTTP client cannot be built.
    pub fn new(config: RelayConfig) -> Result<Self, SlackError> {
        let slack = SlackClient::new(&config.slack)?;
        let tracker = AckTracker::from_config(&config.ack);
        let composer = Composer::new(config.locale, config.sign_off.clone());
        let dispatcher = Dispatcher::new(
            slack.clone(),
            tracker,
            config.columns.clone(),
            composer,
        );
        let listeners = EventListeners::new(
            slack.clone(),
            dispatcher.clone(),
            config.slack.supervisor_channel_id.clone(),
            config.ack.clone(),
            config.upload_dir.clone(),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                slack,
                dispatcher,
                listeners,
            }),
        })
    }

    /// Get a reference to the relay configuration.
    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.inner.config
    }

    /// Get a reference to the Slack client.
    #[must_use]
    pub fn slack(&self) -> &SlackClient {
        &self.inner.slack
    }

    /// Get a reference to the notification dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }

    /// Get a reference to the acknowledgement tracker.
    #[must_use]
    pub fn tracker(&self) -> &AckTracker {
        self.inner.dispatcher.tracker()
    }

    /// Get a reference to the Slack event listeners.
    #[must_use]
    pub fn listeners(&self) -> &EventListeners {
        &self.inner.listeners
    }
}
