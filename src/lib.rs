//! Deterministic visual fingerprints of public keys.
//!
//! Every byte of a key becomes one filled, opaque disk on a transparent square canvas.
//! The byte itself and its three successors (wrapping around the end of the key) choose
//! the position, radius and color of the disk. The same key always yields the same image.
//!
//! It is split into [`renderer`] (the pure key → pixels mapping), [`drawing`] (disk
//! rasterisation on `image::RgbaImage`) and [`sequence`] (PNG output of one or many frames).
//! Keys are parsed or generated in [`key`].
//!
//! # Basic usage
//! ```no_run
//! # use key_fingerprint::{
//! #   error::Result,
//! #   key::Keypair,
//! #   renderer::RenderConfig,
//! #   sequence::Sequence
//! # };
//! # fn main() -> Result<()> {
//! let keypair = Keypair::generate();
//! println!("Public key: {}", keypair.public_key());
//!
//! // A single 512x512 image: img/ed25519_key.png
//! Sequence::new(RenderConfig::still(), "img")?
//!   .write_all(&keypair.public_key())?;
//!
//! // 2048 frames of 1024x1024, the disks slowly orbiting: img/ed25519_key_NN.png
//! Sequence::new(RenderConfig::animated(), "img")?
//!   .write_all(&keypair.public_key())?;
//! # Ok(())
//! # }
//! ```
//!
//! Rendering without touching the filesystem:
//! ```
//! # use key_fingerprint::{error::Result, key::PublicKey, renderer::{RenderConfig, Placement}};
//! # fn main() -> Result<()> {
//! let key = PublicKey::from_hex("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")?;
//! let config = RenderConfig::new(256, 64, Placement::Scaled { margin: 0.2, jitter: true })?;
//! let frame = config.render(&key, 10);
//! assert_eq!(frame.dimensions(), (256, 256));
//! assert_eq!(frame, config.render(&key, 10));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod geometry;
pub mod key;
pub mod drawing;
pub mod renderer;
pub mod sequence;
pub mod util;
