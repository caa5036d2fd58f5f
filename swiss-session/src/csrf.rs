//! CSRF tokens stored in the session.

use crate::context::SessionContext;
use crate::error::SessionResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use swiss_text::{Charset, random};

/// Default session name and form field for the token.
pub const DEFAULT_CSRF_KEY: &str = "_token";

/// CSRF protection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsrfConfig {
    /// Session name the token is stored under
    pub session_key: String,

    /// Form field name rendered by [`csrf_field_with`]
    pub field_name: String,

    /// Length of issued tokens
    pub token_length: usize,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_CSRF_KEY.to_string(),
            field_name: DEFAULT_CSRF_KEY.to_string(),
            token_length: 40,
        }
    }
}

impl CsrfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    pub fn with_token_length(mut self, length: usize) -> Self {
        self.token_length = length;
        self
    }
}

/// Escape text for an HTML attribute value.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (byte_a, byte_b) in a.bytes().zip(b.bytes()) {
        result |= byte_a ^ byte_b;
    }

    result == 0
}

/// Token stored in the session under `name`.
///
/// Non-string values are rendered as their JSON text.
pub fn csrf_token(ctx: &SessionContext, name: &str) -> SessionResult<Option<String>> {
    Ok(match ctx.get(name, Value::Null)? {
        Value::Null => None,
        Value::String(token) => Some(token),
        other => Some(other.to_string()),
    })
}

fn hidden_input(field: &str, token: Option<String>) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        escape_html(field),
        escape_html(token.as_deref().unwrap_or_default())
    )
}

/// Hidden `_token` input carrying the token stored under `name`.
///
/// The field is always named `_token`; a missing token renders an empty value.
pub fn csrf_field(ctx: &SessionContext, name: &str) -> SessionResult<String> {
    Ok(hidden_input(DEFAULT_CSRF_KEY, csrf_token(ctx, name)?))
}

/// Hidden input named `config.field_name` carrying the token stored under
/// `config.session_key`.
pub fn csrf_field_with(ctx: &SessionContext, config: &CsrfConfig) -> SessionResult<String> {
    Ok(hidden_input(
        &config.field_name,
        csrf_token(ctx, &config.session_key)?,
    ))
}

/// Return the session's token, storing a fresh one first if there is none.
pub fn issue_csrf_token(ctx: &mut SessionContext, config: &CsrfConfig) -> SessionResult<String> {
    if let Some(token) = csrf_token(ctx, &config.session_key)?
        && !token.is_empty()
    {
        return Ok(token);
    }

    let token = random(config.token_length, Charset::Alnum);
    ctx.put(&config.session_key, &token)?;
    swiss_log::debug!("issued CSRF token under '{}'", config.session_key);
    Ok(token)
}

/// `submitted` matches the session's token. Always false when none is stored.
pub fn verify_csrf_token(
    ctx: &SessionContext,
    config: &CsrfConfig,
    submitted: &str,
) -> SessionResult<bool> {
    Ok(match csrf_token(ctx, &config.session_key)? {
        Some(expected) if !expected.is_empty() => constant_time_eq(&expected, submitted),
        _ => false,
    })
}
