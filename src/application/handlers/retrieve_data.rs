use std::sync::Arc;

use crate::domain::account::{AccountService, DataField};
use crate::domain::auth::{AuthError, AuthenticationManager, AuthenticationToken};
use crate::dispatch::request::Request;
use crate::dispatch::response::{Response, codes};

use super::invalid_field;

/// Handles `retrieve_data`: resolves the token to an account and projects
/// exactly the requested attributes into the response. Performs no
/// mutation.
pub struct RetrieveDataHandler {
  accounts: Arc<AccountService>,
  auth: Arc<AuthenticationManager>,
}

impl RetrieveDataHandler {
  pub fn new(accounts: Arc<AccountService>, auth: Arc<AuthenticationManager>) -> Self {
    Self { accounts, auth }
  }

  pub fn handle(&self, request: &Request<'_>) -> Response {
    let token = match request.str_field("authentication_token") {
      Ok(value) => AuthenticationToken::new(value),
      Err(err) => return invalid_field(err),
    };
    let names = match request.str_seq_field("fields") {
      Ok(value) => value,
      Err(err) => return invalid_field(err),
    };

    // Duplicates collapse; each requested attribute appears once.
    let mut fields: Vec<DataField> = Vec::new();
    for name in names {
      match DataField::from_name(name) {
        Some(field) if !fields.contains(&field) => fields.push(field),
        Some(_) => {}
        None => {
          return Response::error(
            codes::UNSUPPORTED_DATA_FIELD,
            format!("Unsupported Data Field ({name})"),
          );
        }
      }
    }

    let username = match self.auth.resolve_token(&token) {
      Ok(username) => username,
      Err(err @ AuthError::InvalidToken) => {
        return Response::error(codes::INVALID_TOKEN, err.to_string());
      }
      Err(err) => {
        tracing::error!(%err, "token resolution failure");
        return Response::error(codes::INTERNAL, "Internal server error");
      }
    };

    match self.accounts.project_fields(&username, &fields) {
      Ok(projection) => Response::ok().with_fields(projection),
      Err(err) => {
        // The token resolved, so the account must exist; anything here is
        // a collaborator defect.
        tracing::error!(%err, username, "account projection failure");
        Response::error(codes::INTERNAL, "Internal server error")
      }
    }
  }
}
