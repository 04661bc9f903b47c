use crate::geometry::{BoundingBox, PixelSpace};

mod impl_draw_rgbaimage;

/// Paint onto a pixel backend. Writes are opaque, the last shape drawn wins.
pub trait Draw<Backend>: BoundingBox<i64, PixelSpace> {
  fn draw(&self, image: &mut Backend);
}

/// Draw shapes in iteration order.
pub fn draw_all<B, S>(
  framebuffer: &mut B,
  shapes: impl IntoIterator<Item = S>
) -> &mut B where S: Draw<B> {
  shapes.into_iter()
    .for_each(|shape| shape.draw(framebuffer));
  framebuffer
}
