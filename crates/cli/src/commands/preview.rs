//! Spreadsheet preview.
//!
//! Composes every notification a spreadsheet would produce, exactly as the
//! relay would send it, without contacting Slack.
//!
//! # Environment Variables
//!
//! - `RELAY_LOCALE` - Default locale when `--locale` is not given
//! - `RELAY_SIGN_OFF` - Default signature when `--sign-off` is not given
//! - `COLUMN_*` - Spreadsheet column names (see the relay configuration)

use std::path::Path;

use payroll_relay::config::column_map_from_env;
use payroll_relay::spreadsheet::{SpreadsheetError, read_rows};
use payroll_relay_core::{ColumnMap, Composer, Locale, LocaleError, Row};
use thiserror::Error;

/// Errors that can occur while previewing.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The spreadsheet could not be read.
    #[error(transparent)]
    Spreadsheet(#[from] SpreadsheetError),

    /// `RELAY_LOCALE` is set to an unsupported value.
    #[error("Invalid RELAY_LOCALE: {0}")]
    Locale(#[from] LocaleError),
}

/// One notification that would be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    /// 1-based data row number.
    pub row: usize,
    /// Slack user the notification would go to.
    pub recipient_id: String,
    /// Composed message text.
    pub message: String,
}

/// Everything a spreadsheet would produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    /// Notifications in file order.
    pub notifications: Vec<PreviewItem>,
    /// 1-based data row numbers without a recipient or salary.
    pub skipped: Vec<usize>,
}

/// Compose the notifications for `rows`.
#[must_use]
pub fn build(rows: &[Row], columns: &ColumnMap, composer: &Composer) -> Preview {
    let mut preview = Preview::default();

    for (index, row) in rows.iter().enumerate() {
        let number = index + 1;
        match columns.entry(row) {
            Some(entry) => preview.notifications.push(PreviewItem {
                row: number,
                message: composer.compose(&entry),
                recipient_id: entry.recipient_id,
            }),
            None => preview.skipped.push(number),
        }
    }

    preview
}

/// Preview the spreadsheet at `path` and print the result.
///
/// # Errors
///
/// Returns error if the spreadsheet cannot be read or `RELAY_LOCALE` is
/// invalid.
pub fn run(
    path: &Path,
    locale: Option<Locale>,
    sign_off: Option<String>,
) -> Result<(), PreviewError> {
    let columns = column_map_from_env();

    let locale = match locale {
        Some(locale) => locale,
        None => std::env::var("RELAY_LOCALE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.parse::<Locale>())
            .transpose()?
            .unwrap_or_default(),
    };
    let sign_off = sign_off.or_else(|| {
        std::env::var("RELAY_SIGN_OFF")
            .ok()
            .filter(|v| !v.trim().is_empty())
    });
    let composer = Composer::new(locale, sign_off);

    tracing::info!("Reading {}", path.display());
    let rows = read_rows(path)?;
    let preview = build(&rows, &columns, &composer);

    #[allow(clippy::print_stdout)]
    {
        for item in &preview.notifications {
            println!("--- row {} -> {} ---", item.row, item.recipient_id);
            println!("{}", item.message);
        }
        println!(
            "{} notification(s), {} row(s) skipped",
            preview.notifications.len(),
            preview.skipped.len()
        );
        if !preview.skipped.is_empty() {
            let rows: Vec<String> = preview.skipped.iter().map(ToString::to_string).collect();
            println!("Skipped rows (missing recipient or salary): {}", rows.join(", "));
        }
        println!("Summary: {}", composer.templates().batch_summary());
    }

    Ok(())
}
