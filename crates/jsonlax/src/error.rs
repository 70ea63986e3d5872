use std::fmt;

use crate::value::Object;

/// Every way decoding can fail.
///
/// Each variant names the first grammar rule violated and carries the
/// sub-input that was being parsed when the rule failed (and, where a parser
/// had already consumed part of that sub-input, the unconsumed remainder at
/// the failure point). The carried text is owned, so errors stay valid after
/// the input buffer is gone.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Zero-length input where a value was expected.
    EmptyInput,
    /// The first character does not begin any JSON value.
    InvalidBeginCharacter { input: String },
    /// [`parse`](crate::parse) consumed a value but input remained.
    TrailingContentAfterValue { remaining: String },
    /// End of input before the closing quote of a string.
    UnterminatedString { input: String },
    /// The greedily consumed numeric candidate does not match the number
    /// grammar.
    MalformedNumber { input: String, candidate: String },
    /// End of input before the closing `]` of an array.
    UnterminatedArray { input: String },
    /// An array element after the first was not preceded by `,`.
    MissingCommaInArray { input: String, remaining: String },
    /// End of input before the closing `}` of an object.
    UnterminatedObject { input: String },
    /// An object entry after the first was not preceded by `,`.
    MissingCommaInObject { input: String, remaining: String },
    /// An object entry does not begin with a quoted property name.
    MissingKeyString { input: String, remaining: String },
    /// An object property name was not followed by `:`.
    MissingKeyValueSeparator { input: String },
    /// Composite values nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH).
    NestingTooDeep { input: String },
    /// [`Object::get`] was given a key with no matching entry.
    PropertyNotFound { key: String, object: Object },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => f.write_str("input is empty"),
            ParseError::InvalidBeginCharacter { input } => {
                write!(f, "{input:?} does not begin a JSON value")
            }
            ParseError::TrailingContentAfterValue { remaining } => {
                write!(f, "unexpected trailing content {remaining:?} after the value")
            }
            ParseError::UnterminatedString { input } => {
                write!(f, "string {input:?} has no closing quote")
            }
            ParseError::MalformedNumber { candidate, .. } => {
                write!(f, "{candidate:?} is not a valid number")
            }
            ParseError::UnterminatedArray { input } => {
                write!(f, "array {input:?} has no closing ']'")
            }
            ParseError::MissingCommaInArray { remaining, .. } => {
                write!(f, "expected ',' before {remaining:?} in array")
            }
            ParseError::UnterminatedObject { input } => {
                write!(f, "object {input:?} has no closing '}}'")
            }
            ParseError::MissingCommaInObject { remaining, .. } => {
                write!(f, "expected ',' before {remaining:?} in object")
            }
            ParseError::MissingKeyString { remaining, .. } => {
                write!(f, "expected a quoted property name at {remaining:?}")
            }
            ParseError::MissingKeyValueSeparator { input } => {
                write!(f, "expected ':' after a property name in object {input:?}")
            }
            ParseError::NestingTooDeep { .. } => {
                write!(
                    f,
                    "value is nested deeper than {} levels",
                    crate::MAX_NESTING_DEPTH
                )
            }
            ParseError::PropertyNotFound { key, .. } => {
                write!(f, "property {key:?} not found")
            }
        }
    }
}

impl std::error::Error for ParseError {}
