use std::sync::Arc;

use serde_json::{Map, Value};

use super::entities::Account;
use super::errors::AccountError;
use super::ports::AccountRepository;
use super::value_objects::{DataField, Email};

/// Domain service managing user accounts.
///
/// The counterpart to the dispatcher's "user store" collaborator: creates
/// accounts, checks credentials, and projects account attributes for
/// retrieval. Token handling lives in the auth module.
pub struct AccountService {
  accounts: Arc<dyn AccountRepository>,
}

impl AccountService {
  pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
    Self { accounts }
  }

  /// Registers a new account.
  ///
  /// # Errors
  /// Returns `AccountError::InvalidEmail` for a malformed email and
  /// `AccountError::UsernameTaken` if the username is already registered.
  pub fn create_account(
    &self,
    username: &str,
    password: &str,
    email: &str,
  ) -> Result<(), AccountError> {
    let email = Email::new(email)?;
    let account = Account::new(username.to_string(), password.to_string(), email.into_inner());
    self.accounts.create(account)
  }

  /// Checks whether the given credentials match a registered account.
  ///
  /// Unknown usernames and wrong passwords are both reported as a plain
  /// `false` so callers cannot distinguish them.
  pub fn verify_credentials(&self, username: &str, password: &str) -> Result<bool, AccountError> {
    let account = self.accounts.find_by_username(username)?;
    Ok(account.is_some_and(|account| account.password == password))
  }

  /// Projects the requested attributes of an account into a JSON mapping,
  /// one entry per field, with documented defaults for unset values.
  pub fn project_fields(
    &self,
    username: &str,
    fields: &[DataField],
  ) -> Result<Map<String, Value>, AccountError> {
    let account = self
      .accounts
      .find_by_username(username)?
      .ok_or_else(|| AccountError::UnknownUsername(username.to_string()))?;

    let mut projection = Map::new();
    for field in fields {
      projection.insert(field.name().to_string(), account.field_value(*field)?);
    }

    Ok(projection)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryAccountRepository;
  use serde_json::json;

  fn service() -> AccountService {
    AccountService::new(Arc::new(InMemoryAccountRepository::new()))
  }

  #[test]
  fn test_create_and_verify() {
    let service = service();
    service
      .create_account("player", "secret", "player@example.com")
      .unwrap();

    assert!(service.verify_credentials("player", "secret").unwrap());
    assert!(!service.verify_credentials("player", "wrong").unwrap());
    assert!(!service.verify_credentials("ghost", "secret").unwrap());
  }

  #[test]
  fn test_duplicate_username_rejected() {
    let service = service();
    service
      .create_account("player", "secret", "player@example.com")
      .unwrap();

    let result = service.create_account("player", "other", "other@example.com");
    assert!(matches!(result, Err(AccountError::UsernameTaken(_))));
  }

  #[test]
  fn test_invalid_email_rejected() {
    let service = service();
    let result = service.create_account("player", "secret", "nope");
    assert!(matches!(result, Err(AccountError::InvalidEmail(_))));
  }

  #[test]
  fn test_projection_defaults() {
    let service = service();
    service
      .create_account("player", "secret", "player@example.com")
      .unwrap();

    let projection = service
      .project_fields("player", &[DataField::Coins, DataField::SudokuPuzzle, DataField::Habits])
      .unwrap();

    assert_eq!(projection["coins"], json!(0));
    assert_eq!(projection["sudoku_puzzle"], Value::Null);
    assert_eq!(projection["habits"], json!([]));
  }

  #[test]
  fn test_projection_unknown_username() {
    let service = service();
    let result = service.project_fields("ghost", &[DataField::Coins]);
    assert!(matches!(result, Err(AccountError::UnknownUsername(_))));
  }
}
