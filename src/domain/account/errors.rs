use thiserror::Error;

/// Errors raised by the account store and its domain service.
///
/// Display strings double as the `error_message` field of failure
/// responses, so they are phrased for clients.
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("Username already registered ({0})")]
  UsernameTaken(String),

  #[error("No account registered for username ({0})")]
  UnknownUsername(String),

  #[error("Invalid email address ({0})")]
  InvalidEmail(String),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}
