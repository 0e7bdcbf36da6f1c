use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// JSON object returned by the validation endpoint, kept exactly as received.
///
/// The schema belongs to the service (typically `e164`, `country`, number type and so on),
/// so the client does not interpret it. The accessors below only read the map.
pub struct ValidationResult(Map<String, Value>);

impl ValidationResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a top-level field holding a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The number in E.164 format, when the service returned one.
    pub fn e164(&self) -> Option<&str> {
        self.get_str("e164")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<ValidationResult> for Value {
    fn from(value: ValidationResult) -> Self {
        Value::Object(value.0)
    }
}
