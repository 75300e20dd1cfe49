use thiserror::Error;

use crate::domain::account::AccountError;

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid username or password")]
  InvalidCredentials,

  #[error("Invalid authentication token")]
  InvalidToken,

  #[error("Token generation failed: {0}")]
  TokenGeneration(String),

  #[error("Account error: {0}")]
  Account(#[from] AccountError),
}
