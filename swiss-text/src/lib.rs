//! Text helpers: accent stripping, slugs, digit extraction, masks and
//! random tokens.
//!
//! # Examples
//!
//! ```
//! use swiss_text::{mask, only_digits, slug};
//!
//! assert_eq!(slug("Olá Mundo"), "ola-mundo");
//! assert_eq!(only_digits("(11) 98765-4321"), "11987654321");
//! assert_eq!(mask("12345678910", "###.###.###-##"), "123.456.789-10");
//! ```
//!
//! ## Tokens
//!
//! ```
//! use swiss_text::{Charset, TokenGenerator};
//!
//! let token = TokenGenerator::new().with_charset(Charset::Alpha).generate();
//! assert_eq!(token.len(), 16);
//! ```

mod mask;
mod random;
mod transform;

pub use mask::{MASK_SLOT, mask};
pub use random::{Charset, DEFAULT_TOKEN_LENGTH, TokenGenerator, random};
pub use transform::{only_digits, remove_accents, slug};
