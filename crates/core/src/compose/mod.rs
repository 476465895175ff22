//! Payroll notification composer.
//!
//! Every user-facing text the relay sends comes from a [`Templates`] table
//! selected by [`Locale`]. The composer fills the notification template with
//! the salary, absence and holiday figures of one [`PayrollEntry`].
//!
//! # Plural rules
//!
//! Counts are classified once by [`Quantity::of`]: zero, exactly one, or
//! more than one. Each locale phrases the three cases; the singular and
//! plural phrases embed the literal count.

mod en;
mod es;
mod pt;

use crate::types::{Locale, PayrollEntry};

/// How a count should be phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Nothing recorded.
    None,
    /// Exactly one.
    One,
    /// More than one; carries the count.
    Many(u32),
}

impl Quantity {
    /// Classify a count.
    #[must_use]
    pub const fn of(count: u32) -> Self {
        match count {
            0 => Self::None,
            1 => Self::One,
            n => Self::Many(n),
        }
    }
}

/// Text table for one locale.
///
/// Implementations are stateless; obtain one with [`templates`].
pub trait Templates: Send + Sync {
    /// Locale this table is written in.
    fn locale(&self) -> Locale;

    /// Phrase describing the absences recorded.
    fn absences(&self, quantity: Quantity) -> String;

    /// Phrase describing the holidays worked.
    fn holidays_worked(&self, quantity: Quantity) -> String;

    /// Signature used when the deployment does not configure one.
    fn default_sign_off(&self) -> &'static str;

    /// Full notification body. `absences` and `holidays` are the phrases
    /// produced by [`Templates::absences`] and [`Templates::holidays_worked`].
    fn notification(
        &self,
        name: &str,
        salary: &str,
        absences: &str,
        holidays: &str,
        sign_off: &str,
    ) -> String;

    /// Message posted to the batch source channel once a batch completes.
    fn batch_summary(&self) -> String;

    /// Notice posted to the supervisory channel when a recipient acknowledges.
    fn confirmation(&self, name: &str, recipient_id: &str) -> String;

    /// Reply to a direct message sent to the bot.
    fn echo(&self, text: &str) -> String;

    /// HTTP body for a processed upload.
    fn upload_succeeded(&self) -> &'static str;

    /// HTTP body when the upload carries no file.
    fn upload_missing_file(&self) -> &'static str;

    /// HTTP body when processing the upload failed.
    fn upload_failed(&self) -> &'static str;
}

/// Get the template table for a locale.
#[must_use]
pub fn templates(locale: Locale) -> &'static dyn Templates {
    match locale {
        Locale::Es => &es::Spanish,
        Locale::Pt => &pt::Portuguese,
        Locale::En => &en::English,
    }
}

/// Compose a payroll notification with the locale's default sign-off.
#[must_use]
pub fn compose(
    locale: Locale,
    name: &str,
    salary: &str,
    absences: u32,
    holidays_worked: u32,
) -> String {
    let t = templates(locale);
    render(t, name, salary, absences, holidays_worked, t.default_sign_off())
}

fn render(
    t: &dyn Templates,
    name: &str,
    salary: &str,
    absences: u32,
    holidays_worked: u32,
    sign_off: &str,
) -> String {
    let absences = t.absences(Quantity::of(absences));
    let holidays = t.holidays_worked(Quantity::of(holidays_worked));
    t.notification(name, salary, &absences, &holidays, sign_off)
}

/// Composer bound to a deployment's locale and signature.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    locale: Locale,
    sign_off: Option<String>,
}

impl Composer {
    /// Create a composer for `locale`, optionally overriding the signature.
    #[must_use]
    pub const fn new(locale: Locale, sign_off: Option<String>) -> Self {
        Self { locale, sign_off }
    }

    /// Locale of this composer.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Template table of this composer.
    #[must_use]
    pub fn templates(&self) -> &'static dyn Templates {
        templates(self.locale)
    }

    /// Compose the notification for one payroll entry.
    #[must_use]
    pub fn compose(&self, entry: &PayrollEntry) -> String {
        let t = self.templates();
        let sign_off = self.sign_off.as_deref().unwrap_or_else(|| t.default_sign_off());
        render(
            t,
            &entry.name,
            &entry.salary,
            entry.absences,
            entry.holidays_worked,
            sign_off,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(absences: u32, holidays_worked: u32) -> PayrollEntry {
        PayrollEntry {
            recipient_id: "U123".to_string(),
            name: "Jane".to_string(),
            salary: "1000".to_string(),
            absences,
            holidays_worked,
        }
    }

    #[test]
    fn test_quantity_of() {
        assert_eq!(Quantity::of(0), Quantity::None);
        assert_eq!(Quantity::of(1), Quantity::One);
        assert_eq!(Quantity::of(7), Quantity::Many(7));
    }

    #[test]
    fn test_message_embeds_values_verbatim() {
        let message = compose(Locale::Es, "Jane", "1,250.50", 0, 0);
        assert!(message.contains("Jane"));
        assert!(message.contains("1,250.50"));
    }

    #[test]
    fn test_plural_rules_every_locale() {
        for locale in Locale::ALL {
            let t = templates(locale);
            let composer = Composer::new(locale, None);

            let none = composer.compose(&entry(0, 0));
            assert!(none.contains(&t.absences(Quantity::None)), "{locale}");
            assert!(none.contains(&t.holidays_worked(Quantity::None)), "{locale}");

            let one = composer.compose(&entry(1, 1));
            assert!(one.contains(&t.absences(Quantity::One)), "{locale}");
            assert!(one.contains(&t.holidays_worked(Quantity::One)), "{locale}");
            assert!(t.absences(Quantity::One).contains('1'), "{locale}");

            let many = composer.compose(&entry(3, 4));
            assert!(many.contains(&t.absences(Quantity::Many(3))), "{locale}");
            assert!(many.contains(&t.holidays_worked(Quantity::Many(4))), "{locale}");
        }
    }

    #[test]
    fn test_phrases_differ_between_cases() {
        for locale in Locale::ALL {
            let t = templates(locale);
            assert_ne!(t.absences(Quantity::None), t.absences(Quantity::One));
            assert_ne!(t.absences(Quantity::One), t.absences(Quantity::Many(1)));
            assert_ne!(
                t.holidays_worked(Quantity::None),
                t.holidays_worked(Quantity::One)
            );
        }
    }

    #[test]
    fn test_sign_off_override() {
        let composer = Composer::new(Locale::En, Some("Payroll Team".to_string()));
        let message = composer.compose(&entry(0, 0));
        assert!(message.contains("Payroll Team"));

        let default = Composer::new(Locale::En, None).compose(&entry(0, 0));
        assert!(default.contains(templates(Locale::En).default_sign_off()));
    }

    #[test]
    fn test_templates_report_their_locale() {
        for locale in Locale::ALL {
            assert_eq!(templates(locale).locale(), locale);
        }
    }

    #[test]
    fn test_confirmation_and_echo_embed_inputs() {
        for locale in Locale::ALL {
            let t = templates(locale);
            let confirmation = t.confirmation("Jane", "U123");
            assert!(confirmation.contains("Jane") && confirmation.contains("U123"));
            assert!(t.echo("hola").contains("\"hola\""));
        }
    }
}
