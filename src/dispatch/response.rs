use serde::Serialize;
use serde_json::{Map, Value};

/// The numeric status codes a Response may carry.
///
/// 0 means success; 10-13 are structural request errors owned by the
/// dispatcher; 20+ are business failures owned by the handlers.
pub mod codes {
  pub const SUCCESS: u32 = 0;
  pub const MISSING_REQUEST_TYPE: u32 = 10;
  pub const UNSUPPORTED_REQUEST_TYPE: u32 = 11;
  pub const MISSING_REQUEST_FIELDS: u32 = 12;
  pub const INVALID_REQUEST_FIELD: u32 = 13;
  pub const USERNAME_TAKEN: u32 = 20;
  pub const INVALID_CREDENTIALS: u32 = 21;
  pub const INVALID_TOKEN: u32 = 22;
  pub const UNSUPPORTED_DATA_FIELD: u32 = 23;
  pub const INVALID_EMAIL: u32 = 24;
  pub const INTERNAL: u32 = 50;
}

/// The structured answer to a single request.
///
/// Serializes to a flat JSON object: `success_code`, `error_message` only
/// on failure, and operation-specific result fields only on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
  pub success_code: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,
  #[serde(flatten)]
  pub fields: Map<String, Value>,
}

impl Response {
  /// A successful response with no result fields yet.
  pub fn ok() -> Self {
    Self {
      success_code: codes::SUCCESS,
      error_message: None,
      fields: Map::new(),
    }
  }

  /// A failure response. `code` must be nonzero and `message` non-empty;
  /// failure responses never carry result fields.
  pub fn error(code: u32, message: impl Into<String>) -> Self {
    debug_assert_ne!(code, codes::SUCCESS);
    Self {
      success_code: code,
      error_message: Some(message.into()),
      fields: Map::new(),
    }
  }

  /// Adds one result field.
  pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
    self.fields.insert(key.into(), value);
    self
  }

  /// Merges a mapping of result fields.
  pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
    self.fields.extend(fields);
    self
  }

  pub fn is_success(&self) -> bool {
    self.success_code == codes::SUCCESS
  }

  /// Looks up a result field (mostly a test convenience).
  pub fn field(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }
}
