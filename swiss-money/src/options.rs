//! Caller overrides for money rendering

use crate::currency::SymbolPosition;
use serde::{Deserialize, Serialize};

/// What to do with the currency symbol.
///
/// Deserializes from `true` (keep the profile symbol), `false` (hide it) or a
/// string (replace it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SymbolRepr", into = "SymbolRepr")]
pub enum SymbolOverride {
    #[default]
    Profile,
    Hidden,
    Text(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SymbolRepr {
    Flag(bool),
    Text(String),
}

impl From<SymbolRepr> for SymbolOverride {
    fn from(repr: SymbolRepr) -> Self {
        match repr {
            SymbolRepr::Flag(true) => SymbolOverride::Profile,
            SymbolRepr::Flag(false) => SymbolOverride::Hidden,
            SymbolRepr::Text(text) => SymbolOverride::Text(text),
        }
    }
}

impl From<SymbolOverride> for SymbolRepr {
    fn from(symbol: SymbolOverride) -> Self {
        match symbol {
            SymbolOverride::Profile => SymbolRepr::Flag(true),
            SymbolOverride::Hidden => SymbolRepr::Flag(false),
            SymbolOverride::Text(text) => SymbolRepr::Text(text),
        }
    }
}

/// Per-call overrides merged onto a [`CurrencyProfile`](crate::CurrencyProfile).
///
/// Every field left unset keeps the profile value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyOptions {
    pub decimals: Option<u32>,
    pub symbol: SymbolOverride,
    pub decimal: Option<char>,
    pub thousands: Option<char>,
    pub template: Option<String>,
    pub position: Option<SymbolPosition>,
}

impl MoneyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Replace the currency symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = SymbolOverride::Text(symbol.into());
        self
    }

    /// Render the bare number, skipping symbol and template.
    pub fn without_symbol(mut self) -> Self {
        self.symbol = SymbolOverride::Hidden;
        self
    }

    pub fn decimal_separator(mut self, decimal: char) -> Self {
        self.decimal = Some(decimal);
        self
    }

    pub fn thousands_separator(mut self, thousands: char) -> Self {
        self.thousands = Some(thousands);
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn position(mut self, position: SymbolPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn hides_symbol(&self) -> bool {
        self.symbol == SymbolOverride::Hidden
    }
}
