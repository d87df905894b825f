//! tre builder - fluent construction of pattern descriptions.
//!
//! A [`PatternBuilder`] accumulates pattern syntax one call at a time and
//! yields an immutable description string. Nothing here touches shared state:
//! every method is pure string formatting.
//!
//! ```text
//! let username = PatternBuilder::new()
//!     .start_anchor()
//!     .raw("[a-zA-Z0-9_]{3,16}")
//!     .end_anchor();
//! assert_eq!(username.as_str(), "^[a-zA-Z0-9_]{3,16}$");
//! ```
//!
//! # Modules
//!
//! - [`blueprints`]: ready-made builders for common formats (email, IPv4, ...)
//!
//! Descriptions are compared byte-for-byte by the cache. Two builders that
//! produce equivalent but differently spelled patterns are different keys.

mod builder;
pub mod blueprints;

pub use builder::{digit, whitespace, word_char, PatternBuilder};
