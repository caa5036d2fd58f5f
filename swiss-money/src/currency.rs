//! Currency profiles

use crate::options::{MoneyOptions, SymbolOverride};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Where a currency conventionally puts its symbol.
///
/// Informational only: rendering order comes from the profile template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Formatting rules for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyProfile {
    /// Currency symbol, e.g. `R$`
    pub symbol: Cow<'static, str>,
    pub position: SymbolPosition,
    /// Fraction separator
    pub decimal: char,
    /// Thousands separator
    pub thousands: char,
    /// Fraction digits
    pub decimals: u32,
    /// Output template with `{symbol}` and `{value}` placeholders
    pub template: Cow<'static, str>,
}

const BEFORE: &str = "{symbol}{value}";
const BEFORE_SPACED: &str = "{symbol} {value}";
const AFTER: &str = "{value}{symbol}";

/// Code used when a lookup misses.
pub const FALLBACK_CURRENCY: &str = "USD";

static CURRENCIES: &[(&str, CurrencyProfile)] = &[
    ("USD", CurrencyProfile::builtin("$", SymbolPosition::Before, '.', ',', 2, BEFORE)),
    ("EUR", CurrencyProfile::builtin("€", SymbolPosition::After, ',', '.', 2, AFTER)),
    ("GBP", CurrencyProfile::builtin("£", SymbolPosition::Before, '.', ',', 2, BEFORE)),
    ("JPY", CurrencyProfile::builtin("¥", SymbolPosition::Before, '.', ',', 0, BEFORE)),
    ("CNY", CurrencyProfile::builtin("¥", SymbolPosition::Before, '.', ',', 2, BEFORE)),
    ("BRL", CurrencyProfile::builtin("R$", SymbolPosition::Before, ',', '.', 2, BEFORE_SPACED)),
    ("INR", CurrencyProfile::builtin("₹", SymbolPosition::Before, '.', ',', 2, BEFORE)),
    ("RUB", CurrencyProfile::builtin("₽", SymbolPosition::After, ',', ' ', 2, AFTER)),
    ("AUD", CurrencyProfile::builtin("A$", SymbolPosition::Before, '.', ',', 2, BEFORE)),
    ("CAD", CurrencyProfile::builtin("CA$", SymbolPosition::Before, '.', ',', 2, BEFORE)),
    ("AOA", CurrencyProfile::builtin("Kz", SymbolPosition::Before, ',', '.', 2, BEFORE_SPACED)),
];

impl CurrencyProfile {
    const fn builtin(
        symbol: &'static str,
        position: SymbolPosition,
        decimal: char,
        thousands: char,
        decimals: u32,
        template: &'static str,
    ) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            position,
            decimal,
            thousands,
            decimals,
            template: Cow::Borrowed(template),
        }
    }

    /// Find the built-in profile for an ISO 4217 code, ignoring ASCII case.
    pub fn lookup(code: &str) -> Option<&'static CurrencyProfile> {
        CURRENCIES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code.trim()))
            .map(|(_, profile)| profile)
    }

    /// Find the profile for `code`, falling back to USD.
    pub fn for_code(code: &str) -> &'static CurrencyProfile {
        Self::lookup(code).unwrap_or_else(|| {
            swiss_log::debug!("unknown currency '{}', using {}", code, FALLBACK_CURRENCY);
            &CURRENCIES[0].1
        })
    }

    /// Codes with a built-in profile, in table order.
    pub fn supported_codes() -> impl Iterator<Item = &'static str> {
        CURRENCIES.iter().map(|(code, _)| *code)
    }

    /// Apply caller overrides field by field.
    ///
    /// A hidden symbol leaves the profile symbol in place; hiding is decided
    /// at render time.
    pub fn merged(&self, options: &MoneyOptions) -> CurrencyProfile {
        let mut profile = self.clone();

        if let SymbolOverride::Text(symbol) = &options.symbol {
            profile.symbol = Cow::Owned(symbol.clone());
        }
        if let Some(position) = options.position {
            profile.position = position;
        }
        if let Some(decimal) = options.decimal {
            profile.decimal = decimal;
        }
        if let Some(thousands) = options.thousands {
            profile.thousands = thousands;
        }
        if let Some(decimals) = options.decimals {
            profile.decimals = decimals;
        }
        if let Some(template) = &options.template {
            profile.template = Cow::Owned(template.clone());
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_one_profile() {
        let codes: Vec<_> = CurrencyProfile::supported_codes().collect();
        assert_eq!(codes.len(), 11);
        for code in &codes {
            assert_eq!(codes.iter().filter(|c| *c == code).count(), 1);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(CurrencyProfile::lookup("brl").unwrap().symbol, "R$");
        assert_eq!(CurrencyProfile::lookup(" Eur ").unwrap().symbol, "€");
        assert!(CurrencyProfile::lookup("XYZ").is_none());
    }

    #[test]
    fn test_unknown_code_falls_back_to_usd() {
        let profile = CurrencyProfile::for_code("XYZ");
        assert_eq!(profile, CurrencyProfile::for_code("USD"));
    }

    #[test]
    fn test_table_values() {
        let rub = CurrencyProfile::for_code("RUB");
        assert_eq!(rub.symbol, "₽");
        assert_eq!(rub.position, SymbolPosition::After);
        assert_eq!(rub.thousands, ' ');
        assert_eq!(rub.template, AFTER);

        let jpy = CurrencyProfile::for_code("JPY");
        assert_eq!(jpy.decimals, 0);

        let aoa = CurrencyProfile::for_code("AOA");
        assert_eq!((aoa.decimal, aoa.thousands), (',', '.'));
        assert_eq!(aoa.template, BEFORE_SPACED);
    }

    #[test]
    fn test_merge_overrides_only_given_fields() {
        let options = MoneyOptions::new().decimals(0).symbol("US$");
        let merged = CurrencyProfile::for_code("USD").merged(&options);
        assert_eq!(merged.decimals, 0);
        assert_eq!(merged.symbol, "US$");
        assert_eq!(merged.decimal, '.');
        assert_eq!(merged.template, BEFORE);
    }

    #[test]
    fn test_profile_round_trips_through_serde_json() {
        let json = serde_json::to_value(CurrencyProfile::for_code("BRL")).unwrap();
        assert_eq!(json["position"], "before");
        let back: CurrencyProfile = serde_json::from_value(json).unwrap();
        assert_eq!(&back, CurrencyProfile::for_code("BRL"));
    }
}
