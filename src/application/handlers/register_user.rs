use std::sync::Arc;

use crate::domain::account::{AccountError, AccountService};
use crate::dispatch::request::Request;
use crate::dispatch::response::{Response, codes};

use super::invalid_field;

/// Handles `register_user`: creates a new account in the user store.
pub struct RegisterUserHandler {
  accounts: Arc<AccountService>,
}

impl RegisterUserHandler {
  pub fn new(accounts: Arc<AccountService>) -> Self {
    Self { accounts }
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
    let email = match request.str_field("email") {
      Ok(value) => value,
      Err(err) => return invalid_field(err),
    };

    match self.accounts.create_account(username, password, email) {
      Ok(()) => {
        tracing::info!(username, "account registered");
        Response::ok()
      }
      Err(err @ AccountError::UsernameTaken(_)) => {
        Response::error(codes::USERNAME_TAKEN, err.to_string())
      }
      Err(err @ AccountError::InvalidEmail(_)) => {
        Response::error(codes::INVALID_EMAIL, err.to_string())
      }
      Err(err) => {
        tracing::error!(%err, "account store failure during registration");
        Response::error(codes::INTERNAL, "Internal server error")
      }
    }
  }
}
