use std::slice;

use crate::ParseError;

/// A decoded JSON value.
///
/// Numbers are stored as `f64` regardless of their textual form, and strings
/// own their contents — nothing in a `Value` borrows from the parsed input.
/// Equality is structural and order-sensitive: two arrays are equal only if
/// their elements match position by position, and two objects are equal only
/// if their entries match in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Object(Object),
    Array(Vec<Value>),
}

/// An ordered sequence of `(key, value)` entries.
///
/// Unlike map-backed representations, entries are kept exactly as they were
/// parsed: insertion order is preserved and duplicate keys are stored as
/// separate entries rather than merged. [`Object::get`] resolves duplicates
/// by returning the first match in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Object::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }

    /// Looks up `key`, returning the value of the first entry with that key
    /// in insertion order.
    ///
    /// # Errors
    ///
    /// [`ParseError::PropertyNotFound`] if no entry has the given key. The
    /// error carries the key and a copy of the searched object.
    pub fn get(&self, key: &str) -> Result<&Value, ParseError> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
            .ok_or_else(|| ParseError::PropertyNotFound {
                key: key.to_string(),
                object: self.clone(),
            })
    }
}

impl From<Vec<(String, Value)>> for Object {
    fn from(entries: Vec<(String, Value)>) -> Self {
        Object { entries }
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Object {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = &'a (String, Value);
    type IntoIter = slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}
