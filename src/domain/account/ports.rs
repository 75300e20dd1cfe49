use super::entities::Account;
use super::errors::AccountError;

/// Repository trait for account persistence operations.
///
/// Implementations must be internally synchronized; each call is expected
/// to be linearizable with respect to concurrent callers.
pub trait AccountRepository: Send + Sync {
  /// Stores a new account, failing if the username is already taken.
  fn create(&self, account: Account) -> Result<(), AccountError>;

  /// Finds an account by its username.
  fn find_by_username(&self, username: &str) -> Result<Option<Account>, AccountError>;

  /// Replaces an existing account, failing if the username is unknown.
  fn update(&self, account: Account) -> Result<(), AccountError>;
}
