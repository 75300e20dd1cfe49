mod token_generator;

pub use token_generator::SecureTokenGenerator;
