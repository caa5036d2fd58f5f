//! Field validation for form input
//!
//! Pure predicates that answer `true`/`false` and never panic, plus rule
//! validators that report a [`ValidationError`] naming the field, the
//! constraint and the offending value.
//!
//! # Examples
//!
//! ## Predicates
//!
//! ```
//! use swiss_validation::{is_credit_card, is_email, validate};
//!
//! assert!(is_email("test@example.com"));
//! assert!(is_credit_card("4532 0151 1283 0366"));
//! assert!(validate("Abc123!@#").password());
//! ```
//!
//! ## Validation Rules Builder
//!
//! ```
//! use std::collections::HashMap;
//! use swiss_validation::{IsEmail, NotEmpty, ValidationBuilder, ValidationRules};
//!
//! let builder = ValidationBuilder::new().field(
//!     ValidationRules::for_field("email")
//!         .required()
//!         .add(NotEmpty::validate)
//!         .add(IsEmail::validate),
//! );
//!
//! let mut form = HashMap::new();
//! form.insert("email".to_string(), "nope".to_string());
//!
//! let errors = builder.validate(&form).unwrap_err();
//! assert_eq!(errors.errors[0].constraint, "isEmail");
//! ```

mod errors;
pub mod predicates;
mod rules;
mod subject;
mod validators;

pub use errors::*;
pub use predicates::{
    DEFAULT_DATE_FORMAT, PASSWORD_SPECIALS, PasswordPolicy, contains, ends_with, is_age,
    is_age_at, is_between, is_credit_card, is_date, is_email, is_int, is_ip, is_name,
    is_password, is_url, parse_loose_date, starts_with, whole_years_between,
};
pub use rules::*;
pub use subject::{ValidationSubject, validate};
pub use validators::*;
