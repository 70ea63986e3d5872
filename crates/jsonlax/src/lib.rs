//! # jsonlax
//!
//! A permissive JSON decoder with structured diagnostics.
//!
//! The dialect accepts both single- and double-quoted strings and passes
//! escape sequences through verbatim instead of interpreting them. Every
//! rejection is a dedicated [`ParseError`] variant naming the first grammar
//! rule violated and carrying the offending text, rather than a generic
//! "parse error".
//!
//! Decoding comes in two flavors: [`parse`] consumes the whole input, while
//! [`parse_partial`] consumes one value and hands back the unconsumed
//! remainder.
//!
//! ```rust
//! use jsonlax::{parse, parse_partial, Value};
//!
//! let value = parse("{'a': [1, 2]}")?;
//! let Value::Object(object) = &value else {
//!     unreachable!()
//! };
//! assert!(object.get("a").is_ok());
//!
//! let (value, remaining) = parse_partial("1]")?;
//! assert_eq!(value, Value::Number(1.0));
//! assert_eq!(remaining, "]");
//! # Ok::<(), jsonlax::ParseError>(())
//! ```
mod error;
#[cfg(feature = "serde_json")]
mod impls;
mod parser;
mod value;

pub use error::ParseError;
pub use value::{Object, Value};

/// Composite values nested deeper than this fail with
/// [`ParseError::NestingTooDeep`] instead of recursing further.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses one value from the start of `input` and returns it together with
/// the unconsumed remainder.
///
/// The remainder borrows from `input`; the returned [`Value`] owns all of its
/// contents.
///
/// # Errors
///
/// Any [`ParseError`] raised by the sub-parser the first character of `input`
/// dispatches to, propagated unchanged.
pub fn parse_partial(input: &str) -> Result<(Value, &str), ParseError> {
    parser::parse_value(input, 0)
}

/// Parses `input` as a single complete value.
///
/// # Errors
///
/// Everything [`parse_partial`] raises, plus
/// [`ParseError::TrailingContentAfterValue`] when input remains after the
/// value.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let (value, remaining) = parse_partial(input)?;
    if remaining.is_empty() {
        Ok(value)
    } else {
        Err(ParseError::TrailingContentAfterValue {
            remaining: remaining.to_string(),
        })
    }
}
