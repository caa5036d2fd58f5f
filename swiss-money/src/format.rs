//! Number and money rendering

use crate::currency::CurrencyProfile;
use crate::options::MoneyOptions;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest number of fraction digits a [`Decimal`] can hold.
pub const MAX_DECIMALS: u32 = 28;

/// Render `amount` with exactly `decimals` fraction digits.
///
/// Rounds half away from zero, groups the integer part by three with
/// `thousands` and separates the fraction with `decimal`.
///
/// ```
/// use rust_decimal::Decimal;
/// use swiss_money::format_number;
///
/// let amount = Decimal::new(123456789, 2);
/// assert_eq!(format_number(amount, 2, ',', '.'), "1.234.567,89");
/// assert_eq!(format_number(amount, 0, '.', ','), "1,234,568");
/// ```
pub fn format_number(amount: Decimal, decimals: u32, decimal: char, thousands: char) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let mut rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    assemble(negative, &rounded.abs().to_string(), decimals, decimal, thousands)
}

fn assemble(negative: bool, digits: &str, decimals: u32, decimal: char, thousands: char) -> String {
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    out.push_str(&add_grouping(integer, thousands));
    if decimals > 0 {
        out.push(decimal);
        out.push_str(fraction);
    }
    out
}

/// Insert `sep` between every group of three digits, counting from the right.
pub fn add_grouping(digits: &str, sep: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3 * sep.len_utf8());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }

    out
}

/// Substitute `{symbol}` and `{value}` in one left-to-right pass.
///
/// Text coming from either substitution is never expanded again.
pub fn render_template(template: &str, symbol: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + symbol.len() + value.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if let Some(after) = tail.strip_prefix("{symbol}") {
            out.push_str(symbol);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{value}") {
            out.push_str(value);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}

fn decimal_from_f64(value: f64) -> Option<Decimal> {
    // The shortest round-trip text keeps 1.005 as 1.005 rather than its
    // binary neighbour, so rounding matches what the caller wrote.
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Render an `f64` that does not fit a [`Decimal`].
///
/// Finite values that large carry no fraction, so the float's own digits are
/// used. Non-finite values render as zero.
fn format_float(value: f64, decimals: u32, decimal: char, thousands: char) -> String {
    let value = if value.is_finite() {
        value
    } else {
        swiss_log::warn!("amount {} is not finite, rendering zero", value);
        0.0
    };

    let decimals = decimals.min(MAX_DECIMALS);
    let digits = format!("{:.*}", decimals as usize, value.abs());
    assemble(value < 0.0, &digits, decimals, decimal, thousands)
}

/// Format a money amount for a currency code.
///
/// Unknown codes use the USD profile. `options` override the profile field
/// by field; a hidden symbol returns the bare number.
///
/// ```
/// use swiss_money::{money, MoneyOptions};
///
/// assert_eq!(money(1234.56, "USD", &MoneyOptions::default()), "$1,234.56");
/// assert_eq!(money(1234.56, "BRL", &MoneyOptions::default()), "R$ 1.234,56");
/// assert_eq!(money(1234.56, "EUR", &MoneyOptions::default()), "1.234,56€");
/// assert_eq!(money(1234.56, "USD", &MoneyOptions::new().without_symbol()), "1,234.56");
/// assert_eq!(money(1234.56, "USD", &MoneyOptions::new().decimals(0)), "$1,235");
/// ```
pub fn money(value: f64, currency: &str, options: &MoneyOptions) -> String {
    if let Some(amount) = decimal_from_f64(value) {
        return money_decimal(amount, currency, options);
    }

    let profile = CurrencyProfile::for_code(currency).merged(options);
    let number = format_float(value, profile.decimals, profile.decimal, profile.thousands);
    finish(&profile, options, number)
}

/// [`money`] for an exact decimal amount.
pub fn money_decimal(amount: Decimal, currency: &str, options: &MoneyOptions) -> String {
    let profile = CurrencyProfile::for_code(currency).merged(options);
    let number = format_number(amount, profile.decimals, profile.decimal, profile.thousands);
    finish(&profile, options, number)
}

fn finish(profile: &CurrencyProfile, options: &MoneyOptions, number: String) -> String {
    if options.hides_symbol() {
        return number;
    }

    render_template(&profile.template, &profile.symbol, &number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolPosition;

    fn plain(value: f64, code: &str) -> String {
        money(value, code, &MoneyOptions::default())
    }

    #[test]
    fn test_add_grouping() {
        assert_eq!(add_grouping("1234567", ','), "1,234,567");
        assert_eq!(add_grouping("123", ','), "123");
        assert_eq!(add_grouping("1234", ' '), "1 234");
        assert_eq!(add_grouping("", ','), "");
        assert_eq!(add_grouping("100000", '.'), "100.000");
    }

    #[test]
    fn test_format_number_pads_fraction() {
        assert_eq!(format_number(Decimal::from(1234), 2, '.', ','), "1,234.00");
        assert_eq!(format_number(Decimal::new(5, 1), 3, '.', ','), "0.500");
    }

    #[test]
    fn test_format_number_rounds_half_away_from_zero() {
        assert_eq!(format_number(Decimal::new(25, 1), 0, '.', ','), "3");
        assert_eq!(format_number(Decimal::new(-25, 1), 0, '.', ','), "-3");
        assert_eq!(format_number(Decimal::new(1005, 3), 2, '.', ','), "1.01");
        assert_eq!(format_number(Decimal::new(1004, 3), 2, '.', ','), "1.00");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(Decimal::new(-1, 3), 2, '.', ','), "0.00");
    }

    #[test]
    fn test_render_template() {
        assert_eq!(render_template("{symbol}{value}", "$", "1.00"), "$1.00");
        assert_eq!(render_template("{value} {symbol}", "kr", "5"), "5 kr");
        assert_eq!(render_template("{value}", "$", "{symbol}"), "{symbol}");
        assert_eq!(render_template("{x}{value}{", "$", "1"), "{x}1{");
        assert_eq!(render_template("", "$", "1"), "");
    }

    #[test]
    fn test_money_examples() {
        assert_eq!(plain(1234.56, "USD"), "$1,234.56");
        assert_eq!(plain(1234.0, "USD"), "$1,234.00");
        assert_eq!(plain(1234.56, "BRL"), "R$ 1.234,56");
        assert_eq!(plain(1234.56, "EUR"), "1.234,56€");
    }

    #[test]
    fn test_money_table() {
        assert_eq!(plain(1234567.891, "GBP"), "£1,234,567.89");
        assert_eq!(plain(1234567.5, "JPY"), "¥1,234,568");
        assert_eq!(plain(99.9, "CNY"), "¥99.90");
        assert_eq!(plain(1500000.0, "INR"), "₹1,500,000.00");
        assert_eq!(plain(1234.56, "RUB"), "1 234,56₽");
        assert_eq!(plain(10.0, "AUD"), "A$10.00");
        assert_eq!(plain(10.0, "CAD"), "CA$10.00");
        assert_eq!(plain(1234.56, "AOA"), "Kz 1.234,56");
    }

    #[test]
    fn test_money_unknown_currency_uses_usd() {
        assert_eq!(plain(1234.56, "XYZ"), "$1,234.56");
    }

    #[test]
    fn test_money_options() {
        assert_eq!(money(1234.56, "USD", &MoneyOptions::new().without_symbol()), "1,234.56");
        assert_eq!(money(1234.56, "USD", &MoneyOptions::new().decimals(0)), "$1,235");
        assert_eq!(
            money(1234.56, "EUR", &MoneyOptions::new().template("{symbol} {value}")),
            "€ 1.234,56"
        );
        assert_eq!(
            money(1234.56, "USD", &MoneyOptions::new().symbol("US$").thousands_separator('\'')),
            "US$1'234.56"
        );
    }

    #[test]
    fn test_position_does_not_reorder() {
        let options = MoneyOptions::new().position(SymbolPosition::After);
        assert_eq!(money(5.0, "USD", &options), "$5.00");
    }

    #[test]
    fn test_money_negative_and_non_finite() {
        assert_eq!(plain(-1234.5, "USD"), "$-1,234.50");
        assert_eq!(plain(f64::NAN, "USD"), "$0.00");
        assert_eq!(plain(f64::INFINITY, "EUR"), "0,00€");
    }

    #[test]
    fn test_money_beyond_decimal_range() {
        let huge = 2f64.powi(100);
        assert_eq!(plain(huge, "USD"), "$1,267,650,600,228,229,401,496,703,205,376.00");
        assert_eq!(plain(-huge, "BRL"), "R$ -1.267.650.600.228.229.401.496.703.205.376,00");
        assert_ne!(plain(1e29, "USD"), "$0.00");
    }

    #[test]
    fn test_money_decimal_amount() {
        let amount = Decimal::new(100050, 2);
        assert_eq!(money_decimal(amount, "BRL", &MoneyOptions::default()), "R$ 1.000,50");
    }
}
