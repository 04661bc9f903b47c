use {
  image::RgbaImage,
  crate::{
    drawing::Draw,
    geometry::{self, BoundingBox, Disk, P2}
  }
};

impl Draw<RgbaImage> for Disk {
  fn draw(&self, image: &mut RgbaImage) {
    let (width, height) = image.dimensions();
    let bounding_box = match self.bounding_box().intersection(&geometry::canvas(width, height)) {
      Some(x) => x,
      None => return // disk has no intersection with canvas at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| P2::new(x, y))
      .filter(|&pixel| self.contains(pixel))
      .for_each(|pixel| image.put_pixel(pixel.x as u32, pixel.y as u32, self.color));
  }
}
