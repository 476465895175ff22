//! Spreadsheet upload endpoint.
//!
//! Accepts a multipart form with the spreadsheet in `file` and the channel
//! that should receive the batch summary in `channel_id`. The body is
//! streamed into a scratch file under the upload directory, dispatched, and
//! the scratch file is removed however the request ends.

use axum::extract::{Multipart, State, multipart::Field};
use payroll_relay_core::templates;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::error::AppError;
use crate::services::{DispatchError, scratch_file};
use crate::state::AppState;

/// Handle a spreadsheet upload.
///
/// Responds 200 with the locale's success text once every notification and
/// the summary have been sent, 400 when the file or channel is missing, and
/// 500 with the locale's failure text when the batch fails.
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<&'static str, AppError> {
    let locale = state.config().locale;
    let t = templates(locale);

    let mut channel_id: Option<String> = None;
    let mut staged: Option<NamedTempFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let scratch = stage(&state, field)
                    .await
                    .map_err(|e| AppError::dispatch(locale, e))?;
                staged = Some(scratch);
            }
            Some("channel_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                channel_id = Some(text.trim().to_string());
            }
            _ => {}
        }
    }

    let Some(file) = staged else {
        return Err(AppError::BadRequest(t.upload_missing_file().to_string()));
    };
    let Some(channel_id) = channel_id.filter(|c| !c.is_empty()) else {
        return Err(AppError::BadRequest("Missing channel_id".to_string()));
    };

    let report = state
        .dispatcher()
        .dispatch_file(file.path(), &channel_id)
        .await
        .map_err(|e| AppError::dispatch(locale, e))?;

    info!(
        channel = %channel_id,
        sent = report.sent,
        skipped = report.skipped,
        "Uploaded spreadsheet processed"
    );

    Ok(t.upload_succeeded())
}

/// Stream a multipart field into a new scratch file.
async fn stage(state: &AppState, mut field: Field<'_>) -> Result<NamedTempFile, DispatchError> {
    let scratch = scratch_file(&state.config().upload_dir).await?;
    let mut out = tokio::fs::File::create(scratch.path()).await?;

    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| std::io::Error::other(e.body_text()))?
    {
        out.write_all(&chunk).await?;
    }
    out.flush().await?;

    Ok(scratch)
}
