//! Spanish templates.

use super::{Quantity, Templates};
use crate::types::Locale;

pub(super) struct Spanish;

impl Templates for Spanish {
    fn locale(&self) -> Locale {
        Locale::Es
    }

    fn absences(&self, quantity: Quantity) -> String {
        match quantity {
            Quantity::None => "no se registraron faltas".to_string(),
            Quantity::One => "se registró 1 falta".to_string(),
            Quantity::Many(n) => format!("se registraron {n} faltas"),
        }
    }

    fn holidays_worked(&self, quantity: Quantity) -> String {
        match quantity {
            Quantity::None => "no trabajaste días feriados".to_string(),
            Quantity::One => "trabajaste 1 día feriado".to_string(),
            Quantity::Many(n) => format!("trabajaste {n} días feriados"),
        }
    }

    fn default_sign_off(&self) -> &'static str {
        "Supervisión"
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
:wave: ¡Buenos días, {name}!
Esperamos que te encuentres muy bien. Nos comunicamos contigo para compartir los detalles de tu salario correspondiente a este mes.
*Salario a pagar este mes:* US${salary}
*Instrucciones para emitir la factura:*
• La factura debe ser emitida antes del _penúltimo día hábil del mes_.
• Al emitirla, incluye el tipo de cambio utilizado y el mes de referencia. Aquí tienes un ejemplo:
```
Servicios <mes> - Atención al cliente + tipo de cambio aplicado (US$ 1 = ARS$ 950)
```
*Detalles adicionales:*
• Faltas: {absences}.
• Días feriados trabajados: {holidays}.
*Si no hay observaciones pendientes*, puedes emitir la factura con los valores mencionados antes del penúltimo día hábil del mes.
Por favor, confirma que has recibido este mensaje y estás de acuerdo con los valores reaccionando con un ✅ (*marca de verificación*).
Gracias por tu atención y te deseamos un excelente día.
_Atentamente,_
*{sign_off}*
"
        )
    }

    fn batch_summary(&self) -> String {
        "Planilla procesada! ✅".to_string()
    }

    fn confirmation(&self, name: &str, recipient_id: &str) -> String {
        format!(
            "Agente {name} (<@{recipient_id}>) ha confirmado la recepción del salario y está de acuerdo con los valores."
        )
    }

    fn echo(&self, text: &str) -> String {
        format!("¡Hola! He recibido tu mensaje: \"{text}\". Si necesitas algo, ¡estoy aquí!")
    }

    fn upload_succeeded(&self) -> &'static str {
        "Planilla procesada exitosamente!"
    }

    fn upload_missing_file(&self) -> &'static str {
        "No se ha subido ningún archivo."
    }

    fn upload_failed(&self) -> &'static str {
        "Error al procesar la planilla."
    }
}
