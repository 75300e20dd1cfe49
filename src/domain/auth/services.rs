use std::sync::Arc;

use crate::domain::account::AccountService;

use super::entities::{AuthenticationToken, TokenRecord};
use super::errors::AuthError;
use super::ports::{TokenGenerator, TokenRepository};

/// Domain service issuing and resolving authentication tokens.
///
/// Credentials are checked against the account service; issued tokens are
/// kept in the token repository, one live token per username.
pub struct AuthenticationManager {
  accounts: Arc<AccountService>,
  tokens: Arc<dyn TokenRepository>,
  token_generator: Arc<dyn TokenGenerator>,
}

impl AuthenticationManager {
  pub fn new(
    accounts: Arc<AccountService>,
    tokens: Arc<dyn TokenRepository>,
    token_generator: Arc<dyn TokenGenerator>,
  ) -> Self {
    Self {
      accounts,
      tokens,
      token_generator,
    }
  }

  /// Verifies the credentials and issues a fresh token, revoking any token
  /// previously held by the same username.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown username or a
  /// wrong password; the two cases are not distinguished.
  pub fn authenticate(
    &self,
    username: &str,
    password: &str,
  ) -> Result<AuthenticationToken, AuthError> {
    if !self.accounts.verify_credentials(username, password)? {
      return Err(AuthError::InvalidCredentials);
    }

    let token = AuthenticationToken::new(self.token_generator.generate()?);
    self.tokens.remove_for_username(username)?;
    self
      .tokens
      .insert(TokenRecord::new(token.clone(), username.to_string()))?;

    Ok(token)
  }

  /// Resolves a token to the username it authenticates.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidToken` if the token is unknown or has been
  /// displaced by a newer login.
  pub fn resolve_token(&self, token: &AuthenticationToken) -> Result<String, AuthError> {
    self
      .tokens
      .find_username(token)?
      .ok_or(AuthError::InvalidToken)
  }

  /// Looks up the live token for a username, if one exists.
  pub fn token_for_username(
    &self,
    username: &str,
  ) -> Result<Option<AuthenticationToken>, AuthError> {
    self.tokens.find_token(username)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::{
    InMemoryAccountRepository, InMemoryTokenRepository,
  };
  use crate::infrastructure::security::SecureTokenGenerator;

  fn manager() -> AuthenticationManager {
    let accounts = Arc::new(AccountService::new(Arc::new(
      InMemoryAccountRepository::new(),
    )));
    accounts
      .create_account("player", "secret", "player@example.com")
      .unwrap();
    AuthenticationManager::new(
      accounts,
      Arc::new(InMemoryTokenRepository::new()),
      Arc::new(SecureTokenGenerator::new(32)),
    )
  }

  #[test]
  fn test_authenticate_issues_resolvable_token() {
    let manager = manager();
    let token = manager.authenticate("player", "secret").unwrap();

    assert_eq!(manager.resolve_token(&token).unwrap(), "player");
    assert_eq!(manager.token_for_username("player").unwrap(), Some(token));
  }

  #[test]
  fn test_authenticate_rejects_bad_credentials() {
    let manager = manager();

    assert!(matches!(
      manager.authenticate("player", "wrong"),
      Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
      manager.authenticate("ghost", "secret"),
      Err(AuthError::InvalidCredentials)
    ));
  }

  #[test]
  fn test_relogin_rotates_token() {
    let manager = manager();
    let first = manager.authenticate("player", "secret").unwrap();
    let second = manager.authenticate("player", "secret").unwrap();

    assert_ne!(first, second);
    assert!(matches!(
      manager.resolve_token(&first),
      Err(AuthError::InvalidToken)
    ));
    assert_eq!(manager.resolve_token(&second).unwrap(), "player");
  }

  #[test]
  fn test_unknown_token_rejected() {
    let manager = manager();
    let result = manager.resolve_token(&AuthenticationToken::new("bogus"));
    assert!(matches!(result, Err(AuthError::InvalidToken)));
  }
}
