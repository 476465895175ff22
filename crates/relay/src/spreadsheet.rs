//! Spreadsheet reader.
//!
//! Parses comma-delimited payroll files into [`Row`] values. The first line
//! is the header; every following record becomes one row keyed by those
//! headers, in file order. Short records are accepted and simply lack the
//! trailing columns; extra fields beyond the header are dropped. A file that
//! cannot be decoded fails as a whole.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use payroll_relay_core::Row;
use thiserror::Error;

/// Errors that can occur while reading a spreadsheet.
#[derive(Debug, Error)]
pub enum SpreadsheetError {
    /// The file could not be opened.
    #[error("Failed to open spreadsheet {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid CSV (invalid UTF-8, unreadable stream).
    #[error("Failed to parse spreadsheet: {0}")]
    Parse(#[from] csv::Error),
}

/// Read all rows of the spreadsheet at `path`.
///
/// # Errors
///
/// Returns `SpreadsheetError::Open` if the file cannot be opened and
/// `SpreadsheetError::Parse` if any record is malformed.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, SpreadsheetError> {
    let file = File::open(path).map_err(|source| SpreadsheetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rows(file)
}

/// Parse all rows from a CSV stream.
///
/// # Errors
///
/// Returns `SpreadsheetError::Parse` if the header or any record is
/// malformed.
pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<Row>, SpreadsheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    reader
        .records()
        .map(|record| {
            let record = record?;
            Ok(Row::from_pairs(
                headers.iter().cloned().zip(record.iter().map(String::from)),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_keeps_order_and_headers() {
        let csv = "SlackUser,Salary,Name,Absences,HolidaysWorked\n\
                   U123,1000,Jane,2,1\n\
                   U456,2000,John,0,0\n";

        let rows = parse_rows(csv.as_bytes()).expect("valid csv");

        assert_eq!(rows.len(), 2);
        let first = rows.first().expect("first row");
        assert_eq!(first.get("SlackUser"), Some("U123"));
        assert_eq!(first.get("HolidaysWorked"), Some("1"));
        let headers: Vec<&str> = first.iter().map(|(k, _)| k).collect();
        assert_eq!(
            headers,
            ["SlackUser", "Salary", "Name", "Absences", "HolidaysWorked"]
        );
        assert_eq!(rows.get(1).and_then(|r| r.get("Name")), Some("John"));
    }

    #[test]
    fn test_parse_rows_trims_fields_and_strips_bom() {
        let csv = "\u{feff}Slack User , Salary\n  U1 ,  500 \n";

        let rows = parse_rows(csv.as_bytes()).expect("valid csv");
        let row = rows.first().expect("row");

        assert_eq!(row.get("Slack User"), Some("U1"));
        assert_eq!(row.get("Salary"), Some("500"));
    }

    #[test]
    fn test_parse_rows_quoted_fields() {
        let csv = "SlackUser,Salary,Name\nU1,\"1,250.00\",\"Doe, Jane\"\n";

        let rows = parse_rows(csv.as_bytes()).expect("valid csv");
        let row = rows.first().expect("row");

        assert_eq!(row.get("Salary"), Some("1,250.00"));
        assert_eq!(row.get("Name"), Some("Doe, Jane"));
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let rows = parse_rows("SlackUser,Salary\n".as_bytes()).expect("valid csv");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_short_record_lacks_trailing_columns() {
        let csv = "SlackUser,Salary,Name,Absences,HolidaysWorked\nU1,1000,Jane\n";

        let rows = parse_rows(csv.as_bytes()).expect("short rows are accepted");
        let row = rows.first().expect("row");

        assert_eq!(row.get("Name"), Some("Jane"));
        assert_eq!(row.get("Absences"), None);
        assert_eq!(row.get("HolidaysWorked"), None);
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let csv = "SlackUser,Salary\nU1,100\nU2,200,extra\n";

        let rows = parse_rows(csv.as_bytes()).expect("long rows are accepted");

        assert_eq!(rows.len(), 2);
        let second = rows.get(1).expect("second row");
        assert_eq!(second.iter().count(), 2);
        assert_eq!(second.get("Salary"), Some("200"));
    }

    #[test]
    fn test_invalid_utf8_after_valid_rows_fails_whole_file() {
        let mut bytes = b"SlackUser,Salary\nU1,100\nU2,".to_vec();
        bytes.extend_from_slice(&[0xc3, 0x28, b'\n']);
        let result = parse_rows(bytes.as_slice());
        assert!(matches!(result, Err(SpreadsheetError::Parse(_))));
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let mut bytes = b"SlackUser,Salary\nU1,".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let result = parse_rows(bytes.as_slice());
        assert!(matches!(result, Err(SpreadsheetError::Parse(_))));
    }

    #[test]
    fn test_read_rows_missing_file() {
        let result = read_rows(Path::new("/nonexistent/payroll.csv"));
        assert!(matches!(result, Err(SpreadsheetError::Open { .. })));
    }

    #[test]
    fn test_read_rows_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("payroll.csv");
        std::fs::write(&path, "SlackUser,Salary\nU1,100\n").expect("write");

        let rows = read_rows(&path).expect("valid csv");
        assert_eq!(rows.len(), 1);
    }
}
