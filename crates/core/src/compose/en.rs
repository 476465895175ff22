//! English templates.

use super::{Quantity, Templates};
use crate::types::Locale;

pub(super) struct English;

impl Templates for English {
    fn locale(&self) -> Locale {
        Locale::En
    }

    fn absences(&self, quantity: Quantity) -> String {
        match quantity {
            Quantity::None => "no absences recorded".to_string(),
            Quantity::One => "1 absence recorded".to_string(),
            Quantity::Many(n) => format!("{n} absences recorded"),
        }
    }

    fn holidays_worked(&self, quantity: Quantity) -> String {
        match quantity {
            Quantity::None => "you worked no holidays".to_string(),
            Quantity::One => "you worked 1 holiday".to_string(),
            Quantity::Many(n) => format!("you worked {n} holidays"),
        }
    }

    fn default_sign_off(&self) -> &'static str {
        "Supervision"
    }

    fn notification(
        &self,
        name: &str,
        salary: &str,
        absences: &str,
        holidays: &str,
        sign_off: &str,
    ) -> String {
        format!(
            "\
:wave: Good morning, {name}!
We hope you are doing well. We are reaching out to share the details of your salary for this month.
*Salary payable this month:* US${salary}
*Invoice instructions:*
• The invoice must be issued before the _second-to-last business day of the month_.
• When issuing it, include the exchange rate used and the reference month. For example:
```
Services <month> - Customer support + applied exchange rate (US$ 1 = <local currency>)
```
*Additional details:*
• Absences: {absences}.
• Holidays worked: {holidays}.
*If there are no pending remarks*, you can issue the invoice with the values above before the second-to-last business day of the month.
Please confirm that you received this message and agree with the values by reacting with a ✅ (*check mark*).
Thank you for your attention and have a great day.
_Kind regards,_
*{sign_off}*
"
        )
    }

    fn batch_summary(&self) -> String {
        "Payroll processed! ✅".to_string()
    }

    fn confirmation(&self, name: &str, recipient_id: &str) -> String {
        format!(
            "Agent {name} (<@{recipient_id}>) has confirmed receipt of their salary and agrees with the values."
        )
    }

    fn echo(&self, text: &str) -> String {
        format!("Hi! I received your message: \"{text}\". If you need anything, I'm here!")
    }

    fn upload_succeeded(&self) -> &'static str {
        "Payroll processed successfully!"
    }

    fn upload_missing_file(&self) -> &'static str {
        "No file was uploaded."
    }

    fn upload_failed(&self) -> &'static str {
        "Error processing the payroll file."
    }
}
