use std::sync::Arc;

use serde_json::Value;

use crate::application::handlers::{LoginHandler, RegisterUserHandler, RetrieveDataHandler};
use crate::domain::account::AccountService;
use crate::domain::auth::AuthenticationManager;

use super::operation::Operation;
use super::request::{Request, TransportError};
use super::response::{Response, codes};

/// Validates incoming requests and routes them to per-operation handlers.
///
/// The validation pipeline short-circuits at the first failure:
/// transport-level type check (fatal), missing `request_type` (code 10),
/// unknown `request_type` (code 11), missing required fields (code 12),
/// then dispatch. Structural failures never reach the collaborators.
pub struct RequestDispatcher {
  register_user: RegisterUserHandler,
  login: LoginHandler,
  retrieve_data: RetrieveDataHandler,
}

impl RequestDispatcher {
  pub fn new(accounts: Arc<AccountService>, auth: Arc<AuthenticationManager>) -> Self {
    Self {
      register_user: RegisterUserHandler::new(accounts.clone()),
      login: LoginHandler::new(auth.clone()),
      retrieve_data: RetrieveDataHandler::new(accounts, auth),
    }
  }

  /// Handles one request and produces one Response.
  ///
  /// # Errors
  /// Returns `TransportError` if `request` is not a JSON object. That is
  /// the only failure that escapes; everything else, structural or
  /// business, comes back as a Response with a nonzero `success_code` and
  /// an `error_message`.
  pub fn handle_request(&self, request: &Value) -> Result<Response, TransportError> {
    let request = Request::from_value(request)?;

    let Some(raw_type) = request.request_type() else {
      tracing::debug!("request without request_type");
      return Ok(Response::error(
        codes::MISSING_REQUEST_TYPE,
        "Malformed Request, missing Request Type",
      ));
    };

    let Some(operation) = raw_type.as_str().and_then(Operation::from_name) else {
      let supplied = render_request_type(raw_type);
      tracing::debug!(request_type = %supplied, "unsupported request type");
      return Ok(Response::error(
        codes::UNSUPPORTED_REQUEST_TYPE,
        format!("Unsupported Request Type ({supplied})"),
      ));
    };

    let missing: Vec<&str> = operation
      .required_fields()
      .iter()
      .copied()
      .filter(|field| !request.contains(field))
      .collect();
    if !missing.is_empty() {
      tracing::debug!(operation = operation.name(), ?missing, "missing request fields");
      return Ok(Response::error(
        codes::MISSING_REQUEST_FIELDS,
        format!(
          "Malformed Request, missing Request Fields ({})",
          missing.join(", ")
        ),
      ));
    }

    let response = match operation {
      Operation::RegisterUser => self.register_user.handle(&request),
      Operation::Login => self.login.handle(&request),
      Operation::RetrieveData => self.retrieve_data.handle(&request),
    };

    tracing::debug!(
      operation = operation.name(),
      success_code = response.success_code,
      "request handled"
    );
    Ok(response)
  }
}

/// Echoes the supplied request_type literally: strings appear bare (the
/// empty string yields empty parentheses), non-strings in their JSON
/// rendering.
fn render_request_type(value: &Value) -> String {
  match value {
    Value::String(name) => name.clone(),
    other => other.to_string(),
  }
}
