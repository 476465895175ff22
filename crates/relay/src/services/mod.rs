//! Business logic services for the relay.
//!
//! # Services
//!
//! - `dispatcher` - Sends one notification per spreadsheet row plus a batch summary
//! - `listeners` - Reacts to Slack events (acknowledgements, DMs, shared files)

pub mod dispatcher;
pub mod listeners;

use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

pub use dispatcher::{BatchReport, DispatchError, Dispatcher};
pub use listeners::{EventListeners, EventOutcome, ListenerError};

/// Create an empty scratch file for an incoming spreadsheet in `dir`.
///
/// The file is deleted when the returned guard is dropped, whichever way
/// the batch ends.
///
/// # Errors
///
/// Returns error if `dir` cannot be created or the file cannot be opened.
pub async fn scratch_file(dir: &Path) -> io::Result<NamedTempFile> {
    tokio::fs::create_dir_all(dir).await?;
    tempfile::Builder::new()
        .prefix("payroll-")
        .suffix(".csv")
        .tempfile_in(dir)
}
