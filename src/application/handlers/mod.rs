//! Per-operation request handlers
//!
//! Each handler is a thin slice over the domain services: it extracts its
//! typed fields from an already structurally validated request, invokes the
//! collaborators, and maps the outcome to a Response. Collaborator failures
//! are always converted to failure responses, never propagated.

mod login;
mod register_user;
mod retrieve_data;

pub use login::LoginHandler;
pub use register_user::RegisterUserHandler;
pub use retrieve_data::RetrieveDataHandler;

use crate::dispatch::request::InvalidField;
use crate::dispatch::response::{Response, codes};

/// Maps a wrongly typed request field to its failure response.
pub(crate) fn invalid_field(err: InvalidField) -> Response {
  Response::error(codes::INVALID_REQUEST_FIELD, err.to_string())
}
