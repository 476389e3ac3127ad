//! # Kinds
//!
//! Types that own the syntax knowledge of the dialect: callout keywords and
//! their target constructs, the masked math symbols, and the placeholder
//! token delimiters.
//!
//! Rewrite passes call these; they never hardcode `[!note]`, `theorem` or a
//! token delimiter themselves.

pub mod callout;
pub mod math;
pub mod token;

pub use callout::{CalloutForm, CalloutKind, Construct};
pub use math::MathSymbol;
pub use token::{SpanKind, SpanRef, Token};
