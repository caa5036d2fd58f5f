//! Nested access over `serde_json::Value`
//!
//! Keys are dotted paths (`user.address.city`). Array elements are addressed
//! by position (`user.roles.0`). Lookups never fail: a path that does not
//! resolve yields `None` or the caller's default.
//!
//! ```
//! use serde_json::json;
//! use swiss_collections::{except, has, lookup};
//!
//! let data = json!({"user": {"roles": ["admin"]}, "_token": "x"});
//! assert_eq!(lookup(&data, "user.roles.0"), Some(&json!("admin")));
//! assert!(!has(&data, "user.email"));
//!
//! let clean = except(data.as_object().unwrap(), &["_token"]);
//! assert_eq!(clean.len(), 1);
//! ```

mod path;
mod project;

pub use path::{PATH_SEPARATOR, get, get_as, has, lookup};
pub use project::{except, only};
