//! .
//!
//! The origin of coordinate system is in top-left corner, one unit per pixel.

use {
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::Rgba
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

pub type P2 = Point2D<i64, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Filled circle with an opaque color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Disk {
  pub center: P2,
  pub radius: u32,
  pub color: Rgba<u8>
}

impl Disk {
  pub fn contains(&self, pixel: P2) -> bool {
    let d = pixel - self.center;
    let r = self.radius as i64;
    d.x * d.x + d.y * d.y <= r * r
  }
}

/// Half-open box covering every pixel the disk may touch.
impl BoundingBox<i64, PixelSpace> for Disk {
  fn bounding_box(&self) -> Box2D<i64, PixelSpace> {
    let r = V2::splat(self.radius as i64);
    Box2D::new(
      self.center - r,
      self.center + r + V2::splat(1)
    )
  }
}

/// Rectangle covering every pixel of a `width` x `height` image.
pub fn canvas(width: u32, height: u32) -> Box2D<i64, PixelSpace> {
  Box2D::from_size(Size2D::new(width as i64, height as i64))
}
