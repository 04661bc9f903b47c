//! Public key bytes and Ed25519 keypair generation.
//!
//! The renderer treats a key purely as a byte source, so [`PublicKey`] accepts any
//! non-empty length. Keys that are not 32 bytes long are still rendered, with a warning.

use {
  crate::error::{Error, Result},
  ed25519_dalek::SigningKey,
  rand::rngs::OsRng,
  std::fmt::{self, Display, Formatter}
};


pub const ED25519_PUBLIC_KEY_LEN: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Immutable, non-empty key bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
  pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self> {
    let bytes = bytes.into();
    if bytes.is_empty() {
      return Err(Error::EmptyKey);
    }
    if bytes.len() != ED25519_PUBLIC_KEY_LEN {
      tracing::warn!(len = bytes.len(), "key is not an ed25519 public key, rendering anyway");
    }
    Ok(Self(bytes))
  }

  /// Parse a hex string. Surrounding whitespace and a `0x` prefix are ignored.
  pub fn from_hex(input: &str) -> Result<Self> {
    let input = input.trim();
    let digits = input.strip_prefix("0x")
      .or_else(|| input.strip_prefix("0X"))
      .unwrap_or(input);
    Self::new(hex::decode(digits)?)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Number of bytes, never zero.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Byte at `index`, wrapping around the end of the key.
  pub fn byte_wrapping(&self, index: usize) -> u8 {
    self.0[index % self.0.len()]
  }
}

impl Display for PublicKey {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&hex::encode(&self.0))
  }
}

impl std::str::FromStr for PublicKey {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::from_hex(s)
  }
}

/// Freshly generated Ed25519 keypair.
pub struct Keypair {
  signing: SigningKey
}

impl Keypair {
  /// Draws the secret seed from the operating system's CSPRNG.
  pub fn generate() -> Self {
    Self { signing: SigningKey::generate(&mut OsRng) }
  }

  pub fn public_key(&self) -> PublicKey {
    PublicKey(self.signing.verifying_key().to_bytes().to_vec())
  }

  /// Private key in the 64 byte `seed || public` form.
  pub fn private_key_hex(&self) -> String {
    hex::encode(self.signing.to_keypair_bytes())
  }
}

impl fmt::Debug for Keypair {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("Keypair")
      .field("public", &self.public_key().to_string())
      .finish_non_exhaustive()
  }
}
