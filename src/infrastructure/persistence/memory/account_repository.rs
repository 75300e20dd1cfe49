use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::account::{Account, AccountError, AccountRepository};

/// In-memory implementation of the AccountRepository trait.
///
/// Accounts live in a map keyed by username behind an RwLock, so each
/// repository call is linearizable.
pub struct InMemoryAccountRepository {
  accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
  pub fn new() -> Self {
    Self {
      accounts: RwLock::new(HashMap::new()),
    }
  }
}

impl Default for InMemoryAccountRepository {
  fn default() -> Self {
    Self::new()
  }
}

impl AccountRepository for InMemoryAccountRepository {
  fn create(&self, account: Account) -> Result<(), AccountError> {
    let mut accounts = self
      .accounts
      .write()
      .unwrap_or_else(PoisonError::into_inner);

    if accounts.contains_key(&account.username) {
      return Err(AccountError::UsernameTaken(account.username));
    }

    accounts.insert(account.username.clone(), account);
    Ok(())
  }

  fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError> {
    let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
    Ok(accounts.get(username).cloned())
  }

  fn update(&self, account: Account) -> Result<(), AccountError> {
    let mut accounts = self
      .accounts
      .write()
      .unwrap_or_else(PoisonError::into_inner);

    if !accounts.contains_key(&account.username) {
      return Err(AccountError::UnknownUsername(account.username));
    }

    accounts.insert(account.username.clone(), account);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn account(username: &str) -> Account {
    Account::new(
      username.to_string(),
      "secret".to_string(),
      format!("{username}@example.com"),
    )
  }

  #[test]
  fn test_create_and_find() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("player")).unwrap();

    let found = repo.find_by_username("player").unwrap().unwrap();
    assert_eq!(found.email, "player@example.com");
    assert!(repo.find_by_username("ghost").unwrap().is_none());
  }

  #[test]
  fn test_create_rejects_duplicates() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("player")).unwrap();

    let result = repo.create(account("player"));
    assert!(matches!(result, Err(AccountError::UsernameTaken(_))));
  }

  #[test]
  fn test_update_replaces_existing() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("player")).unwrap();

    let mut updated = repo.find_by_username("player").unwrap().unwrap();
    updated.award_coins(25);
    repo.update(updated).unwrap();

    assert_eq!(repo.find_by_username("player").unwrap().unwrap().coins, 25);
  }

  #[test]
  fn test_update_rejects_unknown_username() {
    let repo = InMemoryAccountRepository::new();
    let result = repo.update(account("ghost"));
    assert!(matches!(result, Err(AccountError::UnknownUsername(_))));
  }
}
