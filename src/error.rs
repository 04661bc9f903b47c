//! Error type shared by the library modules.
//!
//! The binary wraps these in `anyhow` and adds context; inside the crate every fallible
//! operation returns [`Result`].

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("key must contain at least one byte")]
  EmptyKey,

  #[error("malformed hex key: {0}")]
  Hex(#[from] hex::FromHexError),

  #[error("invalid render config: {0}")]
  Config(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("image error: {0}")]
  Image(#[from] image::ImageError),
}

impl Error {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
