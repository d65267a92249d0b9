//! Currency text for totals.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CurrencyFormat;

/// Renders `amount` using `format`.
///
/// The amount is rounded half away from zero to `format.decimal_places`,
/// integer digits are grouped in threes, and negative amounts get a leading
/// minus sign before the symbol.
///
/// # Examples
///
/// ```
/// use babysitter_calc::calculation::format_currency;
/// use babysitter_calc::config::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format_currency(Decimal::from(104), &format), "$104.00");
/// assert_eq!(format_currency(Decimal::new(12345, 1), &format), "$1,234.50");
/// ```
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded = amount
        .round_dp_with_strategy(format.decimal_places, RoundingStrategy::MidpointAwayFromZero)
        .abs();

    let digits = rounded.to_string();
    let (integer_digits, fraction_digits) = digits
        .split_once('.')
        .unwrap_or((digits.as_str(), ""));
    let grouped = group_digits(integer_digits, &format.thousands_separator);

    let mut text = String::new();
    if amount.is_sign_negative() && !rounded.is_zero() {
        text.push('-');
    }
    text.push_str(&format.symbol);
    text.push_str(&grouped);

    if format.decimal_places > 0 {
        // Rounding leaves at most `decimal_places` digits; pad the rest.
        text.push('.');
        text.push_str(&format!(
            "{:0<width$}",
            fraction_digits,
            width = format.decimal_places as usize
        ));
    }

    text
}

fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(c);
    }
    grouped
}
