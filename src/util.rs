/// Time a block and report the elapsed milliseconds as a `debug` event.
///
/// ```
/// # use key_fingerprint::profile;
/// let mut n = 0;
/// profile!("count", { n += 1; });
/// assert_eq!(n, 1);
/// ```
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    $crate::util::tracing::debug!(elapsed_ms = t0.elapsed().as_millis() as u64, "{} profile", $title);
  }}
);

#[doc(hidden)]
pub use tracing;

/// Human readable byte count, binary units.
pub fn file_size(bytes: u64) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::BINARY)
    .unwrap_or_else(|_| format!("{} B", bytes))
}

#[cfg(test)]
mod tests {
  use super::*;

  // expands through the re-exported `tracing`, no direct import needed at the call site
  #[test] fn profile_runs_block() {
    let mut frames = vec![];
    crate::profile!("collect", { frames.extend(0..4u32); });
    assert_eq!(frames, [0, 1, 2, 3]);
  }

  #[test] fn sizes() {
    assert!(file_size(0).starts_with('0'));
    assert!(file_size(2048).ends_with("KiB"));
    assert!(file_size(3 << 20).ends_with("MiB"));
  }
}
