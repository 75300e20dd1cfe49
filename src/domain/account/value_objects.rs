use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::errors::AccountError;

/// A validated email address, stored exactly as the client supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation.
  pub fn new(email: impl Into<String>) -> Result<Self, AccountError> {
    let email = email.into();

    if !email.validate_email() {
      return Err(AccountError::InvalidEmail(email));
    }

    Ok(Self(email))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String.
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The account attributes a client may retrieve.
///
/// Deliberately excludes the password; requests naming anything outside
/// this set are rejected rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataField {
  Username,
  Email,
  Coins,
  SudokuPuzzle,
  Habits,
}

impl DataField {
  pub const ALL: [DataField; 5] = [
    DataField::Username,
    DataField::Email,
    DataField::Coins,
    DataField::SudokuPuzzle,
    DataField::Habits,
  ];

  /// Maps a wire name to a field, if it names one.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "username" => Some(Self::Username),
      "email" => Some(Self::Email),
      "coins" => Some(Self::Coins),
      "sudoku_puzzle" => Some(Self::SudokuPuzzle),
      "habits" => Some(Self::Habits),
      _ => None,
    }
  }

  /// The key this field is returned under in a response.
  pub const fn name(self) -> &'static str {
    match self {
      Self::Username => "username",
      Self::Email => "email",
      Self::Coins => "coins",
      Self::SudokuPuzzle => "sudoku_puzzle",
      Self::Habits => "habits",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_email_preserves_supplied_casing() {
    let email = Email::new("Player@Example.COM").unwrap();
    assert_eq!(email.as_str(), "Player@Example.COM");
  }

  #[test]
  fn test_email_rejects_malformed() {
    assert!(Email::new("not-an-email").is_err());
    assert!(Email::new("").is_err());
  }

  #[test]
  fn test_data_field_round_trips_names() {
    for field in DataField::ALL {
      assert_eq!(DataField::from_name(field.name()), Some(field));
    }
  }

  #[test]
  fn test_password_is_not_retrievable() {
    assert_eq!(DataField::from_name("password"), None);
  }

  #[test]
  fn test_unknown_data_field() {
    assert_eq!(DataField::from_name("highscores"), None);
  }
}
