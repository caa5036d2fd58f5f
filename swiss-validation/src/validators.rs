// Rule validators: each predicate wrapped to report a ValidationError

use crate::ValidationError;
use crate::predicates::{self, DEFAULT_DATE_FORMAT, PasswordPolicy};

fn check(
    ok: bool,
    value: &str,
    field: &str,
    constraint: &str,
    message: impl FnOnce() -> String,
) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(field, message())
            .with_constraint(constraint)
            .with_value(value.to_string()))
    }
}

/// Validates that a string is not blank
pub struct NotEmpty;

impl NotEmpty {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(
                ValidationError::new(field, format!("{} should not be empty", field))
                    .with_constraint("notEmpty"),
            )
        } else {
            Ok(())
        }
    }
}

/// Validates email format
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::is_email(value), value, field, "isEmail", || {
            format!("{} must be a valid email", field)
        })
    }
}

/// Validates absolute URL format
pub struct IsUrl;

impl IsUrl {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::is_url(value), value, field, "isUrl", || {
            format!("{} must be a valid URL", field)
        })
    }
}

/// Validates an IPv4 or IPv6 address
pub struct IsIp;

impl IsIp {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::is_ip(value), value, field, "isIp", || {
            format!("{} must be a valid IP address", field)
        })
    }
}

/// Validates a date written in a strftime format
pub struct IsDate(pub String);

impl Default for IsDate {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl IsDate {
    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::is_date(value, &self.0), value, field, "isDate", || {
            format!("{} must be a date in the format {}", field, self.0)
        })
    }
}

/// Validates letters and spaces only
pub struct IsName;

impl IsName {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::is_name(value), value, field, "isName", || {
            format!("{} must contain only letters and spaces", field)
        })
    }
}

/// Validates a card number with the Luhn checksum
pub struct IsCreditCard;

impl IsCreditCard {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        // Card numbers are never echoed back.
        if predicates::is_credit_card(value) {
            Ok(())
        } else {
            Err(ValidationError::new(
                field,
                format!("{} must be a valid credit card number", field),
            )
            .with_constraint("isCreditCard"))
        }
    }
}

/// Validates password strength
#[derive(Default)]
pub struct StrongPassword(pub PasswordPolicy);

impl StrongPassword {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        if predicates::is_password(value, &self.0) {
            Ok(())
        } else {
            Err(ValidationError::new(field, self.describe(field)).with_constraint("strongPassword"))
        }
    }

    fn describe(&self, field: &str) -> String {
        let policy = &self.0;
        let mut needs = Vec::new();
        if policy.require_upper {
            needs.push("an uppercase letter");
        }
        if policy.require_lower {
            needs.push("a lowercase letter");
        }
        if policy.require_number {
            needs.push("a number");
        }
        if policy.require_special {
            needs.push("a special character");
        }

        if needs.is_empty() {
            format!("{} must be at least {} characters", field, policy.min_length)
        } else {
            format!(
                "{} must be at least {} characters and contain {}",
                field,
                policy.min_length,
                needs.join(", ")
            )
        }
    }
}

/// Validates an age, in whole years, computed from a birth date
#[derive(Default)]
pub struct AgeBetween {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl AgeBetween {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check(
            predicates::is_age(value, self.min, self.max),
            value,
            field,
            "ageBetween",
            || match (self.min, self.max) {
                (Some(min), Some(max)) => format!("{} must be between {} and {} years ago", field, min, max),
                (Some(min), None) => format!("{} must be at least {} years ago", field, min),
                (None, Some(max)) => format!("{} must be at most {} years ago", field, max),
                (None, None) => format!("{} must be a valid birth date", field),
            },
        )
    }
}

/// Validates a numeric value, or a string length, within inclusive bounds
pub struct Between {
    pub min: f64,
    pub max: f64,
}

impl Between {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check(
            predicates::is_between(value, self.min, self.max),
            value,
            field,
            "between",
            || format!("{} must be between {} and {}", field, self.min, self.max),
        )
    }
}

/// Validates that a substring is present
pub struct Contains(pub String);

impl Contains {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::contains(value, &self.0), value, field, "contains", || {
            format!("{} must contain '{}'", field, self.0)
        })
    }
}

/// Validates a required prefix
pub struct StartsWith(pub String);

impl StartsWith {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::starts_with(value, &self.0), value, field, "startsWith", || {
            format!("{} must start with '{}'", field, self.0)
        })
    }
}

/// Validates a required suffix
pub struct EndsWith(pub String);

impl EndsWith {
    pub fn validate(&self, value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::ends_with(value, &self.0), value, field, "endsWith", || {
            format!("{} must end with '{}'", field, self.0)
        })
    }
}

/// Validates an integer literal
pub struct IsInt;

impl IsInt {
    pub fn validate(value: &str, field: &str) -> Result<(), ValidationError> {
        check(predicates::is_int(value), value, field, "isInt", || {
            format!("{} must be an integer", field)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(NotEmpty::validate("x", "field").is_ok());
        assert!(NotEmpty::validate(" \t\n", "field").is_err());
    }

    #[test]
    fn test_is_email() {
        assert!(IsEmail::validate("test@example.com", "email").is_ok());
        let err = IsEmail::validate("invalid", "email").unwrap_err();
        assert_eq!(err.constraint, "isEmail");
        assert_eq!(err.value.as_deref(), Some("invalid"));
        assert_eq!(err.message, "email must be a valid email");
    }

    #[test]
    fn test_is_url_and_ip() {
        assert!(IsUrl::validate("https://example.com", "site").is_ok());
        assert!(IsUrl::validate("example", "site").is_err());
        assert!(IsIp::validate("10.0.0.1", "ip").is_ok());
        assert!(IsIp::validate("10.0.0.256", "ip").is_err());
    }

    #[test]
    fn test_is_date() {
        assert!(IsDate::default().validate("2024-01-03", "born").is_ok());
        let err = IsDate::new("%d/%m/%Y").validate("2024-01-03", "born").unwrap_err();
        assert_eq!(err.message, "born must be a date in the format %d/%m/%Y");
    }

    #[test]
    fn test_is_name() {
        assert!(IsName::validate("Ana Maria", "name").is_ok());
        assert!(IsName::validate("R2D2", "name").is_err());
    }

    #[test]
    fn test_credit_card_value_not_echoed() {
        assert!(IsCreditCard::validate("4532015112830366", "card").is_ok());
        let err = IsCreditCard::validate("1234567890123456", "card").unwrap_err();
        assert_eq!(err.constraint, "isCreditCard");
        assert!(err.value.is_none());
    }

    #[test]
    fn test_strong_password_message() {
        let err = StrongPassword::default().validate("weak", "password").unwrap_err();
        assert_eq!(err.constraint, "strongPassword");
        assert!(err.message.starts_with("password must be at least 8 characters"));
        assert!(err.message.contains("a special character"));
        assert!(err.value.is_none());

        let relaxed = StrongPassword(
            PasswordPolicy::new()
                .with_special(false)
                .with_number(false)
                .with_upper(false)
                .with_lower(false),
        );
        let err = relaxed.validate("short", "pin").unwrap_err();
        assert_eq!(err.message, "pin must be at least 8 characters");
    }

    #[test]
    fn test_age_between() {
        let adult = AgeBetween {
            min: Some(18),
            max: None,
        };
        assert!(adult.validate("1990-01-01", "birthday").is_ok());
        let err = adult.validate("garbage", "birthday").unwrap_err();
        assert_eq!(err.message, "birthday must be at least 18 years ago");
    }

    #[test]
    fn test_between() {
        let rule = Between { min: 1.0, max: 10.0 };
        assert!(rule.validate("5", "qty").is_ok());
        assert!(rule.validate("abc", "qty").is_ok());
        assert!(rule.validate("11", "qty").is_err());
    }

    #[test]
    fn test_substrings() {
        assert!(Contains("@".into()).validate("a@b", "f").is_ok());
        assert!(StartsWith("https://".into()).validate("http://x", "f").is_err());
        assert!(EndsWith(".pdf".into()).validate("file.pdf", "f").is_ok());
    }

    #[test]
    fn test_is_int() {
        assert!(IsInt::validate("-12", "n").is_ok());
        assert_eq!(IsInt::validate("1.5", "n").unwrap_err().constraint, "isInt");
    }
}
