//! Portuguese templates.

use super::{Quantity, Templates};
use crate::types::Locale;

pub(super) struct Portuguese;

impl Templates for Portuguese {
    fn locale(&self) -> Locale {
        Locale::Pt
    }

    fn absences(&self, quantity: Quantity) -> String {
        match quantity {
            Quantity::None => "não foram registradas faltas".to_string(),
            Quantity::One => "foi registrada 1 falta".to_string(),
            Quantity::Many(n) => format!("foram registradas {n} faltas"),
        }
    }

    fn holidays_worked(&self, quantity: Quantity) -> String {
        match quantity {
            Quantity::None => "você não trabalhou em feriados".to_string(),
            Quantity::One => "você trabalhou em 1 feriado".to_string(),
            Quantity::Many(n) => format!("você trabalhou em {n} feriados"),
        }
    }

    fn default_sign_off(&self) -> &'static str {
        "Supervisão"
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
:wave: Bom dia, {name}!
Esperamos que você esteja bem. Entramos em contato para compartilhar os detalhes do seu salário referente a este mês.
*Salário a receber este mês:* US${salary}
*Instruções para emissão da nota fiscal:*
• A nota fiscal deve ser emitida até o _penúltimo dia útil do mês_.
• Ao emiti-la, inclua a taxa de câmbio utilizada e o mês de referência. Veja um exemplo:
```
Serviços <mês> - Atendimento ao cliente + taxa de câmbio aplicada (US$ 1 = R$ 5,00)
```
*Detalhes adicionais:*
• Faltas: {absences}.
• Feriados trabalhados: {holidays}.
*Se não houver pendências*, você pode emitir a nota fiscal com os valores informados até o penúltimo dia útil do mês.
Por favor, confirme que recebeu esta mensagem e concorda com os valores reagindo com um ✅ (*marca de verificação*).
Obrigado pela atenção e tenha um ótimo dia.
_Atenciosamente,_
*{sign_off}*
"
        )
    }

    fn batch_summary(&self) -> String {
        "Planilha processada! ✅".to_string()
    }

    fn confirmation(&self, name: &str, recipient_id: &str) -> String {
        format!(
            "Agente {name} (<@{recipient_id}>) confirmou o recebimento do salário e está de acordo com os valores."
        )
    }

    fn echo(&self, text: &str) -> String {
        format!("Olá! Recebi sua mensagem: \"{text}\". Se precisar de algo, estou aqui!")
    }

    fn upload_succeeded(&self) -> &'static str {
        "Planilha processada com sucesso!"
    }

    fn upload_missing_file(&self) -> &'static str {
        "Nenhum arquivo foi enviado."
    }

    fn upload_failed(&self) -> &'static str {
        "Erro ao processar a planilha."
    }
}
