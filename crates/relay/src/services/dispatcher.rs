//! Notification dispatcher.
//!
//! Drives one batch through the pipeline:
//! 1. Project each row through the deployment's column map, skipping rows
//!    without a recipient or salary
//! 2. Compose the notification and post it to the recipient
//! 3. Record the returned handle in the acknowledgement tracker
//! 4. Post one summary message to the channel the batch came from
//!
//! Rows are sent strictly in file order, one at a time. The first failed
//! send aborts the rest of the batch and the summary is not posted; rows
//! sent before the failure stay sent and tracked.

use std::path::Path;

use payroll_relay_core::{ColumnMap, Composer, Row};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::slack::{SlackClient, SlackError};
use crate::spreadsheet::{SpreadsheetError, read_rows};
use crate::tracker::AckTracker;

/// Errors that abort a batch.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The spreadsheet could not be read; nothing was sent.
    #[error("Failed to read spreadsheet: {0}")]
    Read(#[from] SpreadsheetError),

    /// Posting a notification failed; remaining rows were not sent.
    #[error("Failed to notify {recipient}: {source}")]
    Send {
        recipient: String,
        #[source]
        source: SlackError,
    },

    /// Every notification was sent but the summary could not be posted.
    #[error("Failed to post batch summary: {0}")]
    Summary(#[source] SlackError),

    /// The batch file could not be staged, or the reader task died.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Outcome of a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Notifications posted and tracked.
    pub sent: usize,
    /// Rows without a recipient or salary.
    pub skipped: usize,
}

/// Sends payroll notifications for a batch of rows.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    slack: SlackClient,
    tracker: AckTracker,
    columns: ColumnMap,
    composer: Composer,
}

impl Dispatcher {
    /// Create a new dispatcher.
    #[must_use]
    pub const fn new(
        slack: SlackClient,
        tracker: AckTracker,
        columns: ColumnMap,
        composer: Composer,
    ) -> Self {
        Self {
            slack,
            tracker,
            columns,
            composer,
        }
    }

    /// Read the spreadsheet at `path` and dispatch its rows.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Read` before anything is sent if the file is
    /// unreadable or malformed, otherwise the errors of [`Dispatcher::dispatch`].
    #[instrument(skip(self, path), fields(channel = %batch_channel))]
    pub async fn dispatch_file(
        &self,
        path: &Path,
        batch_channel: &str,
    ) -> Result<BatchReport, DispatchError> {
        let path = path.to_path_buf();
        let rows = tokio::task::spawn_blocking(move || read_rows(&path))
            .await
            .map_err(std::io::Error::other)??;

        info!(rows = rows.len(), "Spreadsheet read");

        self.dispatch(&rows, batch_channel).await
    }

    /// Notify every eligible row, then post the batch summary.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Send` on the first failed notification (the
    /// summary is skipped) and `DispatchError::Summary` if only the summary
    /// failed.
    #[instrument(skip(self, rows), fields(rows = rows.len(), channel = %batch_channel))]
    pub async fn dispatch(
        &self,
        rows: &[Row],
        batch_channel: &str,
    ) -> Result<BatchReport, DispatchError> {
        let mut report = BatchReport::default();

        for (index, row) in rows.iter().enumerate() {
            let Some(entry) = self.columns.entry(row) else {
                debug!(row = index + 1, "Skipping row without recipient or salary");
                report.skipped += 1;
                continue;
            };

            let message = self.composer.compose(&entry);
            let handle = self
                .slack
                .post_message(&entry.recipient_id, &message)
                .await
                .map_err(|source| {
                    error!(
                        row = index + 1,
                        recipient = %entry.recipient_id,
                        error = %source,
                        "Failed to send payroll notification, aborting batch"
                    );
                    DispatchError::Send {
                        recipient: entry.recipient_id.clone(),
                        source,
                    }
                })?;

            info!(
                recipient = %entry.recipient_id,
                name = %entry.name,
                ts = %handle,
                "Payroll notification sent"
            );

            self.tracker
                .record(handle, entry.recipient_id, entry.name)
                .await;
            report.sent += 1;
        }

        let summary = self.composer.templates().batch_summary();
        self.slack
            .post_message(batch_channel, &summary)
            .await
            .map_err(DispatchError::Summary)?;

        info!(
            sent = report.sent,
            skipped = report.skipped,
            "Payroll batch processed"
        );

        Ok(report)
    }

    /// Tracker the dispatcher records sent notifications in.
    #[must_use]
    pub const fn tracker(&self) -> &AckTracker {
        &self.tracker
    }

    /// Composer used for notifications and the batch summary.
    #[must_use]
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }
}
