mod account_repository;
mod token_repository;

pub use account_repository::InMemoryAccountRepository;
pub use token_repository::InMemoryTokenRepository;
