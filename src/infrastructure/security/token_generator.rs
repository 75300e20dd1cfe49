use rand::RngCore;

use crate::domain::auth::{AuthError, TokenGenerator};

/// Token generator backed by the operating system's cryptographically
/// secure random number generator, emitting base64url strings.
pub struct SecureTokenGenerator {
  token_length_bytes: usize,
}

impl SecureTokenGenerator {
  pub fn new(token_length_bytes: usize) -> Self {
    Self { token_length_bytes }
  }

  /// Encodes bytes as unpadded base64url (RFC 4648).
  fn encode_base64url(bytes: &[u8]) -> String {
    const ALPHABET: &[u8; 64] =
      b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
      let group = u32::from_be_bytes([
        0,
        chunk[0],
        chunk.get(1).copied().unwrap_or(0),
        chunk.get(2).copied().unwrap_or(0),
      ]);
      // One output character per 6 input bits, plus one for the remainder.
      for index in 0..=chunk.len() {
        let shift = 18 - 6 * index;
        out.push(ALPHABET[((group >> shift) & 0x3f) as usize] as char);
      }
    }

    out
  }
}

impl TokenGenerator for SecureTokenGenerator {
  fn generate(&self) -> Result<String, AuthError> {
    let mut token_bytes = vec![0u8; self.token_length_bytes];
    rand::rngs::OsRng
      .try_fill_bytes(&mut token_bytes)
      .map_err(|err| AuthError::TokenGeneration(err.to_string()))?;

    Ok(Self::encode_base64url(&token_bytes))
  }
}
