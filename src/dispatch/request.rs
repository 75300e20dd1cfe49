use serde_json::{Map, Value};
use thiserror::Error;

/// Transport-contract violation: the caller handed us something that is
/// not a structured request at all.
///
/// This is deliberately a separate channel from the structured-error
/// responses (codes 10-13): a non-object payload means the surrounding
/// shell broke the contract, and no Response is produced for it.
#[derive(Debug, Error)]
pub enum TransportError {
  #[error("request payload must be a JSON object, got {kind}")]
  NotAnObject { kind: &'static str },
}

/// A required field is present but carries the wrong JSON type.
#[derive(Debug, Error)]
#[error("Malformed Request, invalid Request Field ({name})")]
pub struct InvalidField {
  pub name: String,
}

impl InvalidField {
  fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
    }
  }
}

/// Read-only view over an incoming request mapping.
///
/// Constructed once per call after the transport-level type check; field
/// accessors perform the per-field type checks, which is the only place
/// runtime type inspection happens.
#[derive(Debug)]
pub struct Request<'a> {
  fields: &'a Map<String, Value>,
}

impl<'a> Request<'a> {
  /// Wraps a JSON value, failing fatally unless it is an object.
  pub fn from_value(value: &'a Value) -> Result<Self, TransportError> {
    match value {
      Value::Object(fields) => Ok(Self { fields }),
      other => Err(TransportError::NotAnObject {
        kind: json_kind(other),
      }),
    }
  }

  pub fn contains(&self, key: &str) -> bool {
    self.fields.contains_key(key)
  }

  /// The raw `request_type` value, if the key is present at all.
  pub fn request_type(&self) -> Option<&'a Value> {
    self.fields.get("request_type")
  }

  /// A required field that must be a string.
  pub fn str_field(&self, key: &str) -> Result<&'a str, InvalidField> {
    self
      .fields
      .get(key)
      .and_then(Value::as_str)
      .ok_or_else(|| InvalidField::new(key))
  }

  /// A required field that must be a sequence of strings.
  pub fn str_seq_field(&self, key: &str) -> Result<Vec<&'a str>, InvalidField> {
    let items = self
      .fields
      .get(key)
      .and_then(Value::as_array)
      .ok_or_else(|| InvalidField::new(key))?;

    items
      .iter()
      .map(|item| item.as_str().ok_or_else(|| InvalidField::new(key)))
      .collect()
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
