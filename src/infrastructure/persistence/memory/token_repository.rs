use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::auth::{AuthError, AuthenticationToken, TokenRecord, TokenRepository};

/// Both directions of the token binding under one lock, so the
/// token-to-username and username-to-token views cannot drift apart.
#[derive(Default)]
struct TokenTable {
  by_token: HashMap<String, TokenRecord>,
  by_username: HashMap<String, String>,
}

impl TokenTable {
  fn remove_for_username(&mut self, username: &str) {
    if let Some(token) = self.by_username.remove(username) {
      self.by_token.remove(&token);
    }
  }
}

/// In-memory implementation of the TokenRepository trait.
pub struct InMemoryTokenRepository {
  table: RwLock<TokenTable>,
}

impl InMemoryTokenRepository {
  pub fn new() -> Self {
    Self {
      table: RwLock::new(TokenTable::default()),
    }
  }
}

impl Default for InMemoryTokenRepository {
  fn default() -> Self {
    Self::new()
  }
}

impl TokenRepository for InMemoryTokenRepository {
  fn insert(&self, record: TokenRecord) -> Result<(), AuthError> {
    let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);

    table.remove_for_username(&record.username);
    table
      .by_username
      .insert(record.username.clone(), record.token.as_str().to_string());
    table
      .by_token
      .insert(record.token.as_str().to_string(), record);

    Ok(())
  }

  fn find_username(&self, token: &AuthenticationToken) -> Result<Option<String>, AuthError> {
    let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
    Ok(
      table
        .by_token
        .get(token.as_str())
        .map(|record| record.username.clone()),
    )
  }

  fn find_token(&self, username: &str) -> Result<Option<AuthenticationToken>, AuthError> {
    let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
    Ok(
      table
        .by_username
        .get(username)
        .map(|token| AuthenticationToken::new(token.clone())),
    )
  }

  fn remove_for_username(&self, username: &str) -> Result<(), AuthError> {
    let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
    table.remove_for_username(username);
    Ok(())
  }
}
