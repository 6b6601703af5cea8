pub const CURRENCY_SYMBOL: &str = "R$";

/// Formats a monetary amount as `R$ 1.234,56`.
///
/// NaN and infinities render as zero so a broken figure never reaches the report.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{CURRENCY_SYMBOL} 0,00");
    }

    let fixed = format!("{:.2}", value.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = units.bytes().all(|b| b == b'0') && cents.bytes().all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!(
        "{sign}{CURRENCY_SYMBOL} {units},{cents}",
        units = group_thousands(units)
    )
}

pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0.00%".to_string();
    }
    format!("{value:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
