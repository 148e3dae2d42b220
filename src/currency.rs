//! Formatação de valores em reais.

/// Formata um valor no padrão "R$ X,XX" com vírgula como separador decimal.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format!("{value:.2}").replace('.', ","))
}
