//! Fingerprint renderer: one filled disk per key byte.
//!
//! For byte index `i` of a key `k` with length `N`, the disk is derived from
//! `k[i]`, `k[i+1]`, `k[i+2]` and `k[i+3]` (indices modulo `N`): the first two
//! place the center, the third sets the radius, the fourth the color
//! `(v, 255 - v, v / 2, 255)`. Disks are painted in index order onto a fully
//! transparent square canvas.
//!
//! ```
//! # use key_fingerprint::{key::PublicKey, renderer::RenderConfig, error::Result};
//! # fn main() -> Result<()> {
//! let key = PublicKey::new([0u8; 32])?;
//! let image = RenderConfig::still().render(&key, 0);
//! assert_eq!(image.get_pixel(128, 128).0, [0, 255, 0, 255]);
//! # Ok(())
//! # }
//! ```

use {
  crate::{
    drawing,
    error::{Error, Result},
    geometry::{Disk, P2},
    key::PublicKey
  },
  image::{Rgba, RgbaImage},
  std::f64::consts::FRAC_PI_4
};


/// How key bytes are mapped to disk centers and radii.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Placement {
  /// Bytes scaled into the canvas minus a border of `margin * size` on every side.
  /// With `jitter`, centers orbit by `0.1 * size` as the animation phase advances.
  Scaled { margin: f64, jitter: bool },
  /// `byte mod (size / 2) + size / 4`, radius `byte mod (size / 8)`. Phase independent.
  Modulo
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
  pub image_size: u32,
  pub frame_count: u32,
  pub placement: Placement
}

impl RenderConfig {
  pub fn new(image_size: u32, frame_count: u32, placement: Placement) -> Result<Self> {
    let config = Self { image_size, frame_count, placement };
    config.validate()?;
    Ok(config)
  }

  /// 2048 frames of 1024x1024, 20% border, rotating jitter.
  pub fn animated() -> Self {
    Self {
      image_size: 1024,
      frame_count: 2048,
      placement: Placement::Scaled { margin: 0.2, jitter: true }
    }
  }

  /// Single 512x512 frame with modulo placement.
  pub fn still() -> Self {
    Self {
      image_size: 512,
      frame_count: 1,
      placement: Placement::Modulo
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.image_size == 0 {
      return Err(Error::config("image size must be positive"));
    }
    if self.frame_count == 0 {
      return Err(Error::config("frame count must be at least 1"));
    }
    match self.placement {
      Placement::Scaled { margin, .. } if !(0.0..0.5).contains(&margin) =>
        Err(Error::config(format!("margin {} is outside [0, 0.5)", margin))),
      Placement::Modulo if self.image_size < 8 =>
        Err(Error::config(format!("modulo placement needs an image of at least 8px, got {}", self.image_size))),
      _ => Ok(())
    }
  }

  /// Angular phase of `frame`, `(π/4) * frame / frame_count`.
  pub fn phase(&self, frame: u32) -> f64 {
    FRAC_PI_4 * frame as f64 / self.frame_count as f64
  }

  /// Disk descriptors of `frame`, in paint order.
  pub fn circles<'a>(&'a self, key: &'a PublicKey, frame: u32) -> impl Iterator<Item = Disk> + 'a {
    debug_assert!(frame < self.frame_count, "frame {} out of range", frame);
    let shift = self.phase(frame);
    (0..key.len()).map(move |i| self.circle(key, i, shift))
  }

  fn circle(&self, key: &PublicKey, i: usize, shift: f64) -> Disk {
    let size = self.image_size;
    let (center, radius) = match self.placement {
      Placement::Scaled { margin, jitter } => {
        let size = size as f64;
        let scale = 1.0 - 2.0 * margin;
        let unit = |byte: u8| byte as f64 / 255.0 * scale * size;
        let (dx, dy) = if jitter {
          let angle = shift * (i + 1) as f64;
          (0.1 * size * angle.sin(), 0.1 * size * angle.cos())
        } else {
          (0.0, 0.0)
        };
        let x = unit(key.byte_wrapping(i)) + margin * size + dx;
        let y = unit(key.byte_wrapping(i + 1)) + margin * size + dy;
        let radius = unit(key.byte_wrapping(i + 2)) / 8.0;
        (P2::new(x.round() as i64, y.round() as i64), radius as u32)
      }
      Placement::Modulo => {
        // unvalidated configs below 8px must not divide by zero
        let (half, quarter, eighth) = ((size / 2).max(1), size / 4, (size / 8).max(1));
        let x = key.byte_wrapping(i) as u32 % half + quarter;
        let y = key.byte_wrapping(i + 1) as u32 % half + quarter;
        let radius = key.byte_wrapping(i + 2) as u32 % eighth;
        (P2::new(x as i64, y as i64), radius)
      }
    };
    Disk { center, radius, color: color(key.byte_wrapping(i + 3)) }
  }

  /// Render `frame` onto a transparent `image_size` square.
  pub fn render(&self, key: &PublicKey, frame: u32) -> RgbaImage {
    let mut image = RgbaImage::new(self.image_size, self.image_size);
    drawing::draw_all(&mut image, self.circles(key, frame));
    image
  }
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self::animated()
  }
}

/// Opaque color of a disk whose color byte is `v`.
pub fn color(v: u8) -> Rgba<u8> {
  Rgba([v, 255 - v, v / 2, 255])
}
