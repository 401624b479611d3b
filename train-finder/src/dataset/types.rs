//! Dataset DTOs.
//!
//! These types map directly to the JSON stored in the dataset file. Every
//! recognized field is kept as a raw `serde_json::Value` so that conversion
//! can check its type explicitly instead of letting serde coerce it.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One train entry as it appears in the dataset.
///
/// A field is `None` when the key is absent. A key that is present with a
/// `null` value becomes `Some(Value::Null)`, so conversion can still reject
/// it as the wrong type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDto {
    #[serde(default, deserialize_with = "present")]
    pub train_id: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub departure_station_id: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub arrival_station_id: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,

    /// Expected as "HH:MM:SS".
    #[serde(default, deserialize_with = "present")]
    pub arrival_time: Option<Value>,

    /// Expected as "HH:MM:SS".
    #[serde(default, deserialize_with = "present")]
    pub departure_time: Option<Value>,
}

/// Deserialize a value that is known to be present, keeping `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
