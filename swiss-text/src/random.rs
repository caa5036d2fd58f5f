// Random tokens drawn from the operating system CSPRNG

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default token length.
pub const DEFAULT_TOKEN_LENGTH: usize = 16;

/// Character set a token is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// `0-9a-zA-Z`
    #[default]
    Alnum,
    /// `a-zA-Z`
    Alpha,
    /// `0-9`
    Numeric,
    /// `1-9`
    NoZero,
}

impl Charset {
    /// Look up a charset by name. Unknown names fall back to [`Charset::Alnum`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "alnum" => Charset::Alnum,
            "alpha" => Charset::Alpha,
            "numeric" => Charset::Numeric,
            "nozero" => Charset::NoZero,
            other => {
                swiss_log::debug!("unknown charset '{}', using alnum", other);
                Charset::Alnum
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Charset::Alnum => "alnum",
            Charset::Alpha => "alpha",
            Charset::Numeric => "numeric",
            Charset::NoZero => "nozero",
        }
    }

    /// The characters of this set.
    pub fn chars(&self) -> &'static [u8] {
        match self {
            Charset::Alnum => b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Charset::Alpha => b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
            Charset::Numeric => b"0123456789",
            Charset::NoZero => b"123456789",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate `length` characters drawn uniformly from `charset`.
///
/// Output is not reproducible: every character comes from the OS random
/// source.
///
/// ```
/// use swiss_text::{random, Charset};
///
/// let pin = random(6, Charset::Numeric);
/// assert_eq!(pin.len(), 6);
/// assert!(pin.chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn random(length: usize, charset: Charset) -> String {
    let chars = charset.chars();
    let mut rng = OsRng;
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

/// Reusable token settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenGenerator {
    pub length: usize,
    pub charset: Charset,
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_TOKEN_LENGTH,
            charset: Charset::Alnum,
        }
    }
}

impl TokenGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn generate(&self) -> String {
        random(self.length, self.charset)
    }
}
