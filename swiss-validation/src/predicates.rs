// Boolean predicates over a single input string.
//
// None of these panic or return errors: malformed input is simply `false`.

use chrono::format::{Item, Parsed, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::net::IpAddr;
use swiss_text::only_digits;
use url::Url;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s]+$").unwrap());

static INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?(?:0|[1-9][0-9]*)$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

/// Default format for [`is_date`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Characters that count as "special" for [`is_password`].
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*()-_=+{};:,<.>";

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

// Schemes that are only meaningful with an authority part.
const AUTHORITY_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "ws", "wss"];

// Schemes accepted without a host.
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "news", "file", "urn", "tel"];

/// Email address syntax.
pub fn is_email(value: &str) -> bool {
    let Some((local, _domain)) = value.rsplit_once('@') else {
        return false;
    };
    value.len() <= MAX_EMAIL_LENGTH
        && local.len() <= MAX_EMAIL_LOCAL_LENGTH
        && EMAIL_REGEX.is_match(value)
}

/// Absolute URL syntax.
pub fn is_url(value: &str) -> bool {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    let Ok(url) = Url::parse(value) else {
        return false;
    };

    let scheme = url.scheme();
    if AUTHORITY_SCHEMES.contains(&scheme) {
        // `Url` repairs `http:example.com`; the raw text must already be right.
        let written_with_authority = value
            .get(scheme.len()..)
            .is_some_and(|rest| rest.starts_with("://"));
        return written_with_authority && url.host_str().is_some_and(|h| !h.is_empty());
    }

    url.has_host() || HOSTLESS_SCHEMES.contains(&scheme)
}

/// IPv4 or IPv6 literal.
pub fn is_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

fn render(formatted: impl std::fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

/// Calendar date from parsed fields, filling what the format left out.
///
/// A missing year is the current one, a missing month or day is 1. Week and
/// ordinal formats are left to chrono.
fn resolve_date(parsed: &Parsed) -> Option<NaiveDate> {
    if let Ok(date) = parsed.to_naive_date() {
        return Some(date);
    }

    let mut filled = parsed.clone();
    if filled.year().is_none() && filled.year_mod_100().is_none() && filled.isoyear().is_none() {
        filled.set_year(i64::from(Local::now().year())).ok()?;
    }

    let by_week = filled.isoweek().is_some()
        || filled.week_from_mon().is_some()
        || filled.week_from_sun().is_some();
    if !by_week && filled.ordinal().is_none() {
        if filled.month().is_none() {
            filled.set_month(1).ok()?;
        }
        if filled.day().is_none() {
            filled.set_day(1).ok()?;
        }
    }

    filled.to_naive_date().ok()
}

/// Time of day from parsed fields; midnight when the format has no hour.
fn resolve_time(parsed: &Parsed) -> Option<NaiveTime> {
    if let Ok(time) = parsed.to_naive_time() {
        return Some(time);
    }

    if parsed.hour_div_12().is_none() && parsed.hour_mod_12().is_none() {
        return Some(NaiveTime::MIN);
    }

    let mut filled = parsed.clone();
    if filled.minute().is_none() {
        filled.set_minute(0).ok()?;
    }
    filled.to_naive_time().ok()
}

/// `value` is a date written exactly in strftime `format`.
///
/// Parsing alone is not enough: re-rendering the parsed value must give back
/// `value`, which rejects unpadded fields and impossible dates. Fields the
/// format omits get defaults, so `%Y-%m` or `%m/%Y` are fine. A format with an
/// offset re-renders with the parsed offset. A malformed format string is
/// never valid.
pub fn is_date(value: &str, format: &str) -> bool {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        swiss_log::debug!("rejecting malformed date format '{}'", format);
        return false;
    }

    let mut parsed = Parsed::new();
    if chrono::format::parse(&mut parsed, value, items.iter()).is_err() {
        return false;
    }

    let (Some(date), Some(time)) = (resolve_date(&parsed), resolve_time(&parsed)) else {
        return false;
    };
    let datetime = date.and_time(time);

    let rendered = match parsed.offset() {
        Some(seconds) => FixedOffset::east_opt(seconds)
            .and_then(|offset| offset.from_local_datetime(&datetime).single())
            .and_then(|zoned| render(zoned.format_with_items(items.iter()))),
        None => render(datetime.format_with_items(items.iter())),
    };

    rendered.as_deref() == Some(value)
}

/// Only letters (any script) and whitespace.
pub fn is_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

/// Luhn checksum over the digits of `value`.
///
/// Non-digits are ignored, so a value without any digit sums to zero and
/// passes.
pub fn is_credit_card(value: &str) -> bool {
    let digits = only_digits(value);
    let parity = digits.len() % 2;
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let mut digit = u32::from(b - b'0');
            if i % 2 == parity {
                digit *= 2;
                if digit > 9 {
                    digit -= 9;
                }
            }
            digit
        })
        .sum();

    sum % 10 == 0
}

/// Password strength requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters
    pub min_length: usize,
    pub require_special: bool,
    pub require_number: bool,
    pub require_upper: bool,
    pub require_lower: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_special: true,
            require_number: true,
            require_upper: true,
            require_lower: true,
        }
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_special(mut self, required: bool) -> Self {
        self.require_special = required;
        self
    }

    pub fn with_number(mut self, required: bool) -> Self {
        self.require_number = required;
        self
    }

    pub fn with_upper(mut self, required: bool) -> Self {
        self.require_upper = required;
        self
    }

    pub fn with_lower(mut self, required: bool) -> Self {
        self.require_lower = required;
        self
    }
}

/// `value` satisfies every requirement of `policy`.
pub fn is_password(value: &str, policy: &PasswordPolicy) -> bool {
    if value.chars().count() < policy.min_length {
        return false;
    }

    let has = |pred: fn(char) -> bool| value.chars().any(pred);

    (!policy.require_special || has(|c| PASSWORD_SPECIALS.contains(c)))
        && (!policy.require_number || has(|c| c.is_ascii_digit()))
        && (!policy.require_upper || has(|c| c.is_ascii_uppercase()))
        && (!policy.require_lower || has(|c| c.is_ascii_lowercase()))
}

/// Parse the common ways a birth date is written.
///
/// Slash-separated dates are month first, dash- and dot-separated ones day
/// first when the year comes last.
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Whole years between two dates, in either order.
pub fn whole_years_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let mut years = later.year() - earlier.year();
    if (later.month(), later.day()) < (earlier.month(), earlier.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Age of the person born on `value` is within the optional inclusive bounds.
pub fn is_age(value: &str, min: Option<u32>, max: Option<u32>) -> bool {
    is_age_at(value, min, max, Local::now().date_naive())
}

/// [`is_age`] measured on a fixed `today`.
///
/// A blank value stands for `today` itself.
pub fn is_age_at(value: &str, min: Option<u32>, max: Option<u32>, today: NaiveDate) -> bool {
    let birthday = if value.trim().is_empty() {
        today
    } else {
        match parse_loose_date(value) {
            Some(birthday) => birthday,
            None => return false,
        }
    };

    let age = whole_years_between(birthday, today);
    min.is_none_or(|min| age >= min) && max.is_none_or(|max| age <= max)
}

fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !NUMERIC_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Numeric strings compare by value, anything else by character count.
/// Both bounds are inclusive.
pub fn is_between(value: &str, min: f64, max: f64) -> bool {
    let measured = parse_numeric(value).unwrap_or_else(|| value.chars().count() as f64);
    measured >= min && measured <= max
}

pub fn contains(value: &str, needle: &str) -> bool {
    value.contains(needle)
}

pub fn starts_with(value: &str, needle: &str) -> bool {
    value.starts_with(needle)
}

pub fn ends_with(value: &str, needle: &str) -> bool {
    value.ends_with(needle)
}

/// Integer literal that fits an `i64`. Surrounding whitespace is tolerated,
/// leading zeros are not.
pub fn is_int(value: &str) -> bool {
    let trimmed = value.trim();
    INT_REGEX.is_match(trimmed) && trimmed.parse::<i64>().is_ok()
}
