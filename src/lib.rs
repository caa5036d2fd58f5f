// Swiss - stateless helpers for web-application glue
//
// Text transformation, money formatting, field validation, random tokens,
// dotted-path access, and thin session/CSRF and URL helpers over explicit
// context objects. Each concern lives in its own crate behind a feature.

mod datetime;

pub use datetime::{format_datetime, now, now_formatted};

// Logging is always available
pub use swiss_log as log;

// Re-export optional crates
#[cfg(feature = "text")]
pub use swiss_text as text;

#[cfg(feature = "money")]
pub use swiss_money as money;

#[cfg(feature = "validation")]
pub use swiss_validation as validation;

#[cfg(feature = "collections")]
pub use swiss_collections as collections;

#[cfg(feature = "session")]
pub use swiss_session as session;

#[cfg(feature = "http")]
pub use swiss_http as http;

// Prelude for common imports
pub mod prelude {
    pub use crate::{now, now_formatted};
    pub use serde_json::{Value, json};

    #[cfg(feature = "text")]
    pub use swiss_text::{Charset, TokenGenerator, mask, only_digits, random, remove_accents, slug};

    #[cfg(feature = "money")]
    pub use swiss_money::{CurrencyProfile, MoneyOptions, money};

    #[cfg(feature = "validation")]
    pub use swiss_validation::{
        PasswordPolicy, ValidationBuilder, ValidationError, ValidationErrors, ValidationRules,
        ValidationSubject, validate,
    };

    #[cfg(feature = "collections")]
    pub use swiss_collections::{except, get, get_as, has, lookup, only};

    #[cfg(feature = "session")]
    pub use swiss_session::{
        CsrfConfig, MemorySessionStore, Session, SessionConfig, SessionContext, SessionError,
        SessionStore, csrf_field, csrf_token, issue_csrf_token, verify_csrf_token,
    };

    #[cfg(feature = "http")]
    pub use swiss_http::RequestContext;
}
