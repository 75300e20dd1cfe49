use std::sync::Arc;

use serde_json::Value;

use crate::domain::auth::{AuthError, AuthenticationManager};
use crate::dispatch::request::Request;
use crate::dispatch::response::{Response, codes};

use super::invalid_field;

/// Handles `login`: authenticates the credentials and returns the issued
/// token under `authentication_token`.
pub struct LoginHandler {
  auth: Arc<AuthenticationManager>,
}

impl LoginHandler {
  pub fn new(auth: Arc<AuthenticationManager>) -> Self {
    Self { auth }
  }

  pub fn handle(&self, request: &Request<'_>) -> Response {
    let username = match request.str_field("username") {
      Ok(value) => value,
      Err(err) => return invalid_field(err),
    };
    let password = match request.str_field("password") {
      Ok(value) => value,
      Err(err) => return invalid_field(err),
    };

    match self.auth.authenticate(username, password) {
      Ok(token) => {
        tracing::info!(username, "login succeeded");
        Response::ok().with_field("authentication_token", Value::String(token.into_inner()))
      }
      Err(err @ AuthError::InvalidCredentials) => {
        tracing::info!(username, "login rejected");
        Response::error(codes::INVALID_CREDENTIALS, err.to_string())
      }
      Err(err) => {
        tracing::error!(%err, "authentication failure during login");
        Response::error(codes::INTERNAL, "Internal server error")
      }
    }
  }
}
