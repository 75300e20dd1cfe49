pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use entities::{AuthenticationToken, TokenRecord};
pub use errors::AuthError;
pub use ports::{TokenGenerator, TokenRepository};
pub use services::AuthenticationManager;
