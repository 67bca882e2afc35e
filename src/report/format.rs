//! Currency, percentage and hour rendering.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::FormatConfig;

/// Renders a currency amount, e.g. `$1000.00` or `-$5.00`.
///
/// The amount is rounded to `currency_decimal_places`, midpoints away from
/// zero, and always shows that many fractional digits.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::FormatConfig;
/// use payroll_engine::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(4750), &FormatConfig::default()), "$4750.00");
/// ```
pub fn format_currency(amount: Decimal, format: &FormatConfig) -> String {
    let rounded = round(amount, format.currency_decimal_places);
    let number = format_number(rounded.abs(), format.currency_decimal_places, format);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", format.currency_symbol, number)
    } else {
        format!("{}{}", format.currency_symbol, number)
    }
}

/// Renders a fraction as a percentage, e.g. `0.05` as `5.00%`.
///
/// # Panics
///
/// Panics if `rate × 100` overflows [`Decimal`].
pub fn format_percent(rate: Decimal, format: &FormatConfig) -> String {
    let rounded = round(rate * Decimal::ONE_HUNDRED, format.percent_decimal_places);
    let number = format_number(rounded.abs(), format.percent_decimal_places, format);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}%", number)
    } else {
        format!("{}%", number)
    }
}

/// Renders an hour count exactly as stored (`45`, `37.5`).
pub fn format_hours(hours: Decimal, format: &FormatConfig) -> String {
    let text = hours.to_string();
    if format.decimal_separator == "." {
        text
    } else {
        text.replace('.', &format.decimal_separator)
    }
}

fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a non-negative, already rounded value with exactly `places` decimals.
fn format_number(value: Decimal, places: u32, format: &FormatConfig) -> String {
    let mut scaled = value;
    scaled.rescale(places);
    let text = scaled.to_string();

    match text.split_once('.') {
        Some((integer, fraction)) => format!(
            "{}{}{}",
            group_thousands(integer, &format.thousands_separator),
            format.decimal_separator,
            fraction
        ),
        None => group_thousands(&text, &format.thousands_separator),
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
