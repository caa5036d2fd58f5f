//! Money formatting for the currencies a typical storefront shows.
//!
//! Each supported ISO 4217 code maps to a [`CurrencyProfile`] holding its
//! symbol, separators, fraction digits and output template. [`money`]
//! resolves the profile (USD when the code is unknown), merges any
//! [`MoneyOptions`] onto it and renders the amount.
//!
//! ```
//! use swiss_money::{money, MoneyOptions};
//!
//! let defaults = MoneyOptions::default();
//! assert_eq!(money(1234.56, "USD", &defaults), "$1,234.56");
//! assert_eq!(money(1234.56, "BRL", &defaults), "R$ 1.234,56");
//! assert_eq!(money(1234.56, "RUB", &defaults), "1 234,56₽");
//! ```
//!
//! Options can come straight from configuration:
//!
//! ```
//! use swiss_money::{money, MoneyOptions};
//!
//! let options: MoneyOptions = serde_json::from_str(r#"{"symbol": false}"#).unwrap();
//! assert_eq!(money(1234.56, "USD", &options), "1,234.56");
//! ```

mod currency;
mod format;
mod options;

pub use currency::{CurrencyProfile, FALLBACK_CURRENCY, SymbolPosition};
pub use format::{MAX_DECIMALS, add_grouping, format_number, money, money_decimal, render_template};
pub use options::{MoneyOptions, SymbolOverride};
pub use rust_decimal::Decimal;
