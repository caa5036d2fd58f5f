//! Session access and CSRF helpers.
//!
//! Session state is never global: a [`SessionContext`] is built per request,
//! either from an existing [`Session`] or by [`SessionContext::start`] against
//! a [`SessionStore`], and passed explicitly to whatever needs it.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use swiss_session::*;
//!
//! let store = MemorySessionStore::default();
//! let config = SessionConfig::default();
//!
//! let mut ctx = SessionContext::start(&store, None, &config)?;
//! ctx.put("user_id", 42)?;
//! assert!(ctx.has("user_id")?);
//! assert_eq!(ctx.get("theme", json!("light"))?, json!("light"));
//!
//! let token = issue_csrf_token(&mut ctx, &CsrfConfig::default())?;
//! assert!(csrf_field(&ctx, "_token")?.contains(&token));
//!
//! ctx.persist(&store)?;
//! # Ok::<(), SessionError>(())
//! ```

mod config;
mod context;
mod csrf;
mod error;
mod session;
mod store;

pub use config::SessionConfig;
pub use context::{SessionContext, SessionKeys};
pub use csrf::{
    CsrfConfig, DEFAULT_CSRF_KEY, csrf_field, csrf_field_with, csrf_token, escape_html,
    issue_csrf_token, verify_csrf_token,
};
pub use error::{SessionError, SessionResult};
pub use session::{Session, generate_session_id};
pub use store::{MemorySessionStore, SessionStore};
