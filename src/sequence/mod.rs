//! Writes every frame of a fingerprint as an independent PNG file.

use {
  crate::{
    error::Result,
    key::PublicKey,
    profile,
    renderer::RenderConfig,
    util
  },
  image::{codecs::png::PngEncoder, ColorType, ImageEncoder, RgbaImage},
  rayon::prelude::*,
  std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf}
  }
};

#[cfg(test)] mod tests;

pub const FILE_STEM: &str = "ed25519_key";

#[derive(Debug, Clone)]
pub struct Sequence {
  pub config: RenderConfig,
  pub out_dir: PathBuf,
  /// Render frames on the rayon pool. Output is identical either way.
  pub parallel: bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOutput {
  pub frame: u32,
  pub path: PathBuf,
  pub bytes: u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
  pub frames: u32,
  pub bytes: u64
}

impl Sequence {
  pub fn new(config: RenderConfig, out_dir: impl Into<PathBuf>) -> Result<Self> {
    config.validate()?;
    Ok(Self { config, out_dir: out_dir.into(), parallel: true })
  }

  pub fn parallel(self, parallel: bool) -> Self {
    Self { parallel, ..self }
  }

  /// `ed25519_key_07.png` for animations, `ed25519_key.png` for a single frame.
  pub fn file_name(&self, frame: u32) -> String {
    match self.config.frame_count {
      1 => format!("{}.png", FILE_STEM),
      _ => format!("{}_{:02}.png", FILE_STEM, frame)
    }
  }

  pub fn path(&self, frame: u32) -> PathBuf {
    self.out_dir.join(self.file_name(frame))
  }

  /// Render one frame and write it. Creation and encoding failures are returned.
  pub fn write_frame(&self, key: &PublicKey, frame: u32) -> Result<FrameOutput> {
    let path = self.path(frame);
    let image = self.config.render(key, frame);
    encode_png(&image, &mut BufWriter::new(fs::File::create(&path)?))?;
    let bytes = fs::metadata(&path)?.len();
    tracing::debug!(frame, path = %path.display(), bytes, "wrote frame");
    Ok(FrameOutput { frame, path, bytes })
  }

  /// Write all frames into `out_dir`, creating it if needed. Stops at the first failure.
  #[tracing::instrument(skip(self, key), fields(out_dir = %self.out_dir.display(), frames = self.config.frame_count))]
  pub fn write_all(&self, key: &PublicKey) -> Result<Summary> {
    fs::create_dir_all(&self.out_dir)?;
    let mut summary = Summary::default();

    profile!("write_all", {
      let frames = 0..self.config.frame_count;
      let outputs = if self.parallel {
        frames.into_par_iter()
          .map(|frame| self.write_frame(key, frame))
          .collect::<Result<Vec<_>>>()?
      } else {
        frames
          .map(|frame| self.write_frame(key, frame))
          .collect::<Result<Vec<_>>>()?
      };
      summary = outputs.iter().fold(summary, |acc, out| Summary {
        frames: acc.frames + 1,
        bytes: acc.bytes + out.bytes
      });
    });

    tracing::info!(
      frames = summary.frames,
      size = %util::file_size(summary.bytes),
      "fingerprint written to {}", self.out_dir.display()
    );
    Ok(summary)
  }
}

/// Lossless RGBA8 PNG with default compression.
pub fn encode_png(image: &RgbaImage, writer: &mut impl Write) -> Result<()> {
  let (width, height) = image.dimensions();
  PngEncoder::new(&mut *writer)
    .write_image(image.as_raw(), width, height, ColorType::Rgba8)?;
  writer.flush()?;
  Ok(())
}

/// Decode a PNG written by [`Sequence`] back into a pixel buffer.
pub fn read_png(path: &Path) -> Result<RgbaImage> {
  Ok(image::open(path)?.into_rgba8())
}
