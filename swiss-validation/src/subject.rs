// Fluent predicate access over one value

use crate::predicates::{self, DEFAULT_DATE_FORMAT, PasswordPolicy};

/// Borrowed view of one input offering every predicate as a method.
///
/// ```
/// use swiss_validation::validate;
///
/// assert!(validate("user@example.com").email());
/// assert!(validate("4532015112830366").credit_card());
/// assert!(!validate("2024-02-30").date());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSubject<'a> {
    value: &'a str,
}

/// Wrap `value` for predicate checks.
pub fn validate(value: &str) -> ValidationSubject<'_> {
    ValidationSubject { value }
}

impl<'a> ValidationSubject<'a> {
    pub fn value(&self) -> &'a str {
        self.value
    }

    pub fn email(&self) -> bool {
        predicates::is_email(self.value)
    }

    pub fn url(&self) -> bool {
        predicates::is_url(self.value)
    }

    pub fn ip(&self) -> bool {
        predicates::is_ip(self.value)
    }

    /// Date in `%Y-%m-%d`.
    pub fn date(&self) -> bool {
        predicates::is_date(self.value, DEFAULT_DATE_FORMAT)
    }

    pub fn date_with_format(&self, format: &str) -> bool {
        predicates::is_date(self.value, format)
    }

    pub fn name(&self) -> bool {
        predicates::is_name(self.value)
    }

    pub fn credit_card(&self) -> bool {
        predicates::is_credit_card(self.value)
    }

    /// Password under the default policy.
    pub fn password(&self) -> bool {
        predicates::is_password(self.value, &PasswordPolicy::default())
    }

    pub fn password_with(&self, policy: &PasswordPolicy) -> bool {
        predicates::is_password(self.value, policy)
    }

    pub fn age(&self, min: Option<u32>, max: Option<u32>) -> bool {
        predicates::is_age(self.value, min, max)
    }

    pub fn between(&self, min: f64, max: f64) -> bool {
        predicates::is_between(self.value, min, max)
    }

    pub fn contains(&self, needle: &str) -> bool {
        predicates::contains(self.value, needle)
    }

    pub fn starts_with(&self, needle: &str) -> bool {
        predicates::starts_with(self.value, needle)
    }

    pub fn ends_with(&self, needle: &str) -> bool {
        predicates::ends_with(self.value, needle)
    }

    pub fn int(&self) -> bool {
        predicates::is_int(self.value)
    }
}
