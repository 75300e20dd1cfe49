use super::entities::{AuthenticationToken, TokenRecord};
use super::errors::AuthError;

/// Service trait for secure token generation.
pub trait TokenGenerator: Send + Sync {
  /// Generates a new opaque token value.
  fn generate(&self) -> Result<String, AuthError>;
}

/// Repository trait for issued-token storage.
///
/// At most one token is live per username; inserting a record displaces
/// any token previously bound to that username.
pub trait TokenRepository: Send + Sync {
  /// Stores a token record.
  fn insert(&self, record: TokenRecord) -> Result<(), AuthError>;

  /// Resolves a token to the username it authenticates.
  fn find_username(&self, token: &AuthenticationToken) -> Result<Option<String>, AuthError>;

  /// Looks up the live token for a username, if one exists.
  fn find_token(&self, username: &str) -> Result<Option<AuthenticationToken>, AuthError>;

  /// Revokes the live token for a username, if any.
  fn remove_for_username(&self, username: &str) -> Result<(), AuthError>;
}
