use serde_json::{Map, Number};

use crate::{Object, Value};

/// Conversion into the `serde_json` data model.
///
/// Two lossy spots, both inherent to the target model: duplicate object keys
/// collapse into one entry with the last occurrence winning, and non-finite
/// numbers (the grammar admits `1e999`) become `null` since
/// [`Number::from_f64`] has no representation for them.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(value) => serde_json::Value::Bool(*value),
            Value::Number(value) => {
                Number::from_f64(*value).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::String(value) => serde_json::Value::String(value.clone()),
            Value::Object(object) => {
                let mut map = Map::with_capacity(object.len());
                for (key, value) in object {
                    map.insert(key.clone(), value.into());
                }
                serde_json::Value::Object(map)
            }
            Value::Array(elements) => {
                serde_json::Value::Array(elements.iter().map(Into::into).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        (&value).into()
    }
}

impl From<Object> for serde_json::Value {
    fn from(object: Object) -> Self {
        (&Value::Object(object)).into()
    }
}
