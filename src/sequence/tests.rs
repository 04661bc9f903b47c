use {
  super::*,
  crate::{
    error::Error,
    renderer::Placement
  },
  anyhow::Result
};

fn temp_dir(name: &str) -> PathBuf {
  std::env::temp_dir().join(format!(
    "key_fingerprint_{}_{}_{}",
    name,
    std::process::id(),
    std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
      .map(|d| d.as_nanos())
      .unwrap_or_default()
  ))
}

fn small_animation() -> Result<RenderConfig> {
  Ok(RenderConfig::new(96, 12, Placement::Scaled { margin: 0.2, jitter: true })?)
}

fn test_key() -> Result<PublicKey> {
  Ok(PublicKey::from_hex("3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29")?)
}

#[test] fn file_names() -> Result<()> {
  let seq = Sequence::new(small_animation()?, "img")?;
  assert_eq!(seq.file_name(0), "ed25519_key_00.png");
  assert_eq!(seq.file_name(7), "ed25519_key_07.png");
  assert_eq!(seq.file_name(11), "ed25519_key_11.png");
  assert_eq!(seq.file_name(2047), "ed25519_key_2047.png");
  assert_eq!(seq.path(3), Path::new("img").join("ed25519_key_03.png"));

  let still = Sequence::new(RenderConfig::still(), "img")?;
  assert_eq!(still.file_name(0), "ed25519_key.png");
  Ok(())
}

#[test] fn png_round_trip() -> Result<()> {
  let dir = temp_dir("round_trip");
  let key = test_key()?;
  let seq = Sequence::new(small_animation()?, &dir)?;
  let summary = seq.write_all(&key)?;
  assert_eq!(summary.frames, 12);

  let mut total = 0;
  for frame in 0..12 {
    let path = seq.path(frame);
    total += fs::metadata(&path)?.len();
    assert_eq!(read_png(&path)?, seq.config.render(&key, frame));
  }
  assert_eq!(summary.bytes, total);

  fs::remove_dir_all(&dir).ok();
  Ok(())
}

#[test] fn still_image() -> Result<()> {
  let dir = temp_dir("still");
  let key = PublicKey::new([0u8; 32])?;
  let seq = Sequence::new(RenderConfig::still(), dir.join("nested/out"))?;
  let summary = seq.write_all(&key)?;
  assert_eq!(summary.frames, 1);

  let entries = fs::read_dir(&seq.out_dir)?.collect::<std::io::Result<Vec<_>>>()?;
  assert_eq!(entries.len(), 1);
  let image = read_png(&seq.path(0))?;
  assert_eq!(image.get_pixel(128, 128).0, [0, 255, 0, 255]);
  assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);

  fs::remove_dir_all(&dir).ok();
  Ok(())
}

#[test] fn parallel_matches_sequential() -> Result<()> {
  let key = test_key()?;
  let (dir_a, dir_b) = (temp_dir("parallel"), temp_dir("sequential"));
  let a = Sequence::new(small_animation()?, &dir_a)?.parallel(true);
  let b = Sequence::new(small_animation()?, &dir_b)?.parallel(false);
  assert_eq!(a.write_all(&key)?, b.write_all(&key)?);

  for frame in 0..12 {
    assert_eq!(fs::read(a.path(frame))?, fs::read(b.path(frame))?);
  }

  fs::remove_dir_all(&dir_a).ok();
  fs::remove_dir_all(&dir_b).ok();
  Ok(())
}

#[test] fn write_failure_is_reported() -> Result<()> {
  let dir = temp_dir("blocked");
  fs::create_dir_all(&dir)?;
  // a regular file where the output directory should be
  let blocked = dir.join("img");
  fs::write(&blocked, b"")?;

  let seq = Sequence::new(small_animation()?, &blocked)?;
  assert!(matches!(seq.write_all(&test_key()?), Err(Error::Io(_))));
  assert!(matches!(seq.write_frame(&test_key()?, 0), Err(Error::Io(_))));

  fs::remove_dir_all(&dir).ok();
  Ok(())
}

#[test] fn invalid_config_rejected() {
  let config = RenderConfig { image_size: 0, ..RenderConfig::animated() };
  assert!(matches!(Sequence::new(config, "img"), Err(Error::Config(_))));
}
