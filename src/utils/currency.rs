pub const CURRENCY_SIGN: &str = "GH₵";

/// Formata valor em cedis com separador de milhar: `GH₵ 6,500.00`
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{} {}.{:02}", sign, CURRENCY_SIGN, grouped, fraction)
}
