//! Spreadsheet rows and their projection onto payroll entries.
//!
//! A [`Row`] is what the spreadsheet reader produces: an ordered list of
//! `(header, value)` pairs. A [`ColumnMap`] names the columns a deployment
//! expects and turns eligible rows into typed [`PayrollEntry`] values.

use serde::{Deserialize, Serialize};

/// One data line of an uploaded spreadsheet.
///
/// Keeps the file's column order. Values are stored as read (already
/// trimmed by the reader); typing happens in [`ColumnMap::entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create a row from `(header, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value stored under exactly `header`.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == header)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the column whose header matches `column`, ignoring ASCII
    /// case and whitespace (`"Slack User"` matches `"slackuser"`).
    ///
    /// An exact match wins over a normalized one.
    #[must_use]
    pub fn get_column(&self, column: &str) -> Option<&str> {
        if let Some(value) = self.get(column) {
            return Some(value);
        }

        let wanted = normalize_header(column);
        self.fields
            .iter()
            .find(|(k, _)| normalize_header(k) == wanted)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(header, value)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of columns in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Parse a count column (absences, holidays worked).
///
/// Accepts integers and integral decimals (`"2"`, `" 2 "`, `"2.0"`).
/// Anything else, including empty, negative, or fractional values, counts
/// as zero.
#[must_use]
pub fn parse_count(value: &str) -> u32 {
    let value = value.trim();
    if let Ok(count) = value.parse::<u32>() {
        return count;
    }

    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // range checked above
            let count = n as u32;
            count
        }
        _ => 0,
    }
}

/// Spreadsheet column names expected by a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    /// Column holding the recipient's Slack user ID (required).
    pub recipient: String,
    /// Column holding the salary amount (required).
    pub salary: String,
    /// Column holding the recipient's display name.
    pub name: String,
    /// Column holding the absence count.
    pub absences: String,
    /// Column holding the number of holidays worked.
    pub holidays_worked: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            recipient: "Slack User".to_string(),
            salary: "Salary".to_string(),
            name: "Name".to_string(),
            absences: "Absences".to_string(),
            holidays_worked: "Holidays Worked".to_string(),
        }
    }
}

impl ColumnMap {
    /// Project a row onto a payroll entry.
    ///
    /// Returns `None` when the recipient or salary column is missing or
    /// blank; such rows are not notified. A blank name falls back to the
    /// recipient ID so the greeting is never empty.
    #[must_use]
    pub fn entry(&self, row: &Row) -> Option<PayrollEntry> {
        let recipient_id = non_blank(row.get_column(&self.recipient))?;
        let salary = non_blank(row.get_column(&self.salary))?;
        let name = non_blank(row.get_column(&self.name)).unwrap_or(recipient_id);

        Some(PayrollEntry {
            recipient_id: recipient_id.to_string(),
            name: name.to_string(),
            salary: salary.to_string(),
            absences: row.get_column(&self.absences).map_or(0, parse_count),
            holidays_worked: row.get_column(&self.holidays_worked).map_or(0, parse_count),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A row that is eligible for notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEntry {
    /// Slack user ID the notification is sent to.
    pub recipient_id: String,
    /// Name used in the greeting and the supervisory confirmation.
    pub name: String,
    /// Salary, embedded verbatim.
    pub salary: String,
    /// Number of absences recorded this period.
    pub absences: u32,
    /// Number of holidays worked this period.
    pub holidays_worked: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("0"), 0);
        assert_eq!(parse_count("1"), 1);
        assert_eq!(parse_count(" 12 "), 12);
        assert_eq!(parse_count("2.0"), 2);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("two"), 0);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("1.5"), 0);
    }

    #[test]
    fn test_get_column_ignores_case_and_spaces() {
        let r = row(&[("SlackUser", "U123"), ("holidays worked", "1")]);
        assert_eq!(r.get_column("Slack User"), Some("U123"));
        assert_eq!(r.get_column("Holidays Worked"), Some("1"));
        assert_eq!(r.get_column("Salary"), None);
    }

    #[test]
    fn test_entry_with_all_columns() {
        let r = row(&[
            ("SlackUser", "U123"),
            ("Salary", "1000"),
            ("Name", "Jane"),
            ("Absences", "2"),
            ("HolidaysWorked", "1"),
        ]);

        let entry = ColumnMap::default().entry(&r).expect("eligible row");
        assert_eq!(
            entry,
            PayrollEntry {
                recipient_id: "U123".to_string(),
                name: "Jane".to_string(),
                salary: "1000".to_string(),
                absences: 2,
                holidays_worked: 1,
            }
        );
    }

    #[test]
    fn test_entry_requires_recipient_and_salary() {
        let columns = ColumnMap::default();

        let missing_recipient = row(&[("Slack User", ""), ("Salary", "1000"), ("Name", "Jane")]);
        assert!(columns.entry(&missing_recipient).is_none());

        let missing_salary = row(&[("Slack User", "U1"), ("Salary", "  ")]);
        assert!(columns.entry(&missing_salary).is_none());

        let no_salary_column = row(&[("Slack User", "U1")]);
        assert!(columns.entry(&no_salary_column).is_none());
    }

    #[test]
    fn test_entry_defaults_optional_columns() {
        let r = row(&[("Slack User", "U9"), ("Salary", "750"), ("Absences", "n/a")]);
        let entry = ColumnMap::default().entry(&r).expect("eligible row");

        assert_eq!(entry.name, "U9");
        assert_eq!(entry.absences, 0);
        assert_eq!(entry.holidays_worked, 0);
    }

    #[test]
    fn test_custom_column_names() {
        let columns = ColumnMap {
            recipient: "Usuario".to_string(),
            salary: "Salario".to_string(),
            name: "Nombre".to_string(),
            absences: "Faltas".to_string(),
            holidays_worked: "Feriados".to_string(),
        };
        let r = row(&[("Usuario", "U5"), ("Salario", "900"), ("Faltas", "3")]);

        let entry = columns.entry(&r).expect("eligible row");
        assert_eq!(entry.recipient_id, "U5");
        assert_eq!(entry.absences, 3);
    }
}
