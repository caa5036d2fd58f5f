//! URL helpers for the current request.
//!
//! ```
//! use swiss_http::RequestContext;
//!
//! let ctx = RequestContext::new("example.com")
//!     .with_https(true)
//!     .with_request_uri("/test/page");
//!
//! assert_eq!(ctx.current_url(), "https://example.com/test/page");
//! assert_eq!(ctx.to("login"), "https://example.com/login");
//! ```

mod context;

pub use context::RequestContext;
