use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque token proving a user has logged in.
///
/// Issued on successful login and presented with any request that needs
/// identity. The value itself carries no structure; only the token
/// repository knows which username it is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthenticationToken(String);

impl AuthenticationToken {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String.
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for AuthenticationToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A token together with the username it authenticates and when it was
/// issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
  pub token: AuthenticationToken,
  pub username: String,
  pub issued_at: DateTime<Utc>,
}

impl TokenRecord {
  /// Creates a record stamped with the current time.
  pub fn new(token: AuthenticationToken, username: String) -> Self {
    Self {
      token,
      username,
      issued_at: Utc::now(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_token_display_matches_inner() {
    let token = AuthenticationToken::new("abc123");
    assert_eq!(token.to_string(), "abc123");
    assert_eq!(token.as_str(), "abc123");
  }

  #[test]
  fn test_record_is_timestamped() {
    let before = Utc::now();
    let record = TokenRecord::new(AuthenticationToken::new("t"), "player".to_string());
    assert!(record.issued_at >= before);
    assert_eq!(record.username, "player");
  }
}
