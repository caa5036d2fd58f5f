//! Integration tests for swiss-money

use swiss_money::*;

#[test]
fn test_money_defaults() {
    let defaults = MoneyOptions::default();
    assert_eq!(money(1234.56, "USD", &defaults), "$1,234.56");
    assert_eq!(money(1234.0, "USD", &defaults), "$1,234.00");
    assert_eq!(money(1234.56, "BRL", &defaults), "R$ 1.234,56");
    assert_eq!(money(1234.56, "EUR", &defaults), "1.234,56€");
}

#[test]
fn test_money_custom_options() {
    assert_eq!(money(1234.56, "USD", &MoneyOptions::new().without_symbol()), "1,234.56");
    assert_eq!(money(1234.56, "USD", &MoneyOptions::new().decimals(0)), "$1,235");
}

#[test]
fn test_money_options_from_config() {
    let options: MoneyOptions = serde_json::from_value(serde_json::json!({
        "decimals": 1,
        "symbol": "BR$",
        "template": "{value} ({symbol})"
    }))
    .unwrap();

    assert_eq!(money(0.25, "BRL", &options), "0,3 (BR$)");
}

#[test]
fn test_rounding_uses_written_value() {
    let defaults = MoneyOptions::default();
    assert_eq!(money(1.005, "USD", &defaults), "$1.01");
    assert_eq!(money(2.675, "USD", &defaults), "$2.68");
    assert_eq!(money(0.5, "JPY", &defaults), "¥1");
}

#[test]
fn test_large_amounts_group_correctly() {
    let defaults = MoneyOptions::default();
    assert_eq!(money(1_000_000_000.0, "USD", &defaults), "$1,000,000,000.00");
    assert_eq!(money(999.999, "EUR", &defaults), "1.000,00€");
}

#[test]
fn test_format_number_matches_number_format() {
    let amount = Decimal::new(123456, 2);
    assert_eq!(format_number(amount, 2, '.', ','), "1,234.56");
    assert_eq!(format_number(amount, 2, ',', '.'), "1.234,56");
    assert_eq!(format_number(amount, 0, '.', ' '), "1 235");
}
