use {
  anyhow::{Context as _, Result},
  clap::{ArgAction, Parser},
  key_fingerprint::{
    key::{Keypair, PublicKey},
    renderer::{Placement, RenderConfig},
    sequence::Sequence
  },
  std::path::PathBuf,
  tracing::Level
};

const USAGE_HINT: &str = "Please provide --generate flag or --pubkey flag with a public key value.";

/// Render a public key as a set of colored circles, written as PNG frames.
#[derive(Parser, Debug)]
#[command(name = "key-fingerprint", version)]
struct Cli {
  /// Generate a new ed25519 keypair and print both keys. Takes precedence over --pubkey.
  #[arg(long)]
  generate: bool,

  /// Use the provided public key (hex).
  #[arg(long, value_name = "HEX")]
  pubkey: Option<String>,

  /// Single static image with modulo placement instead of an animation.
  #[arg(long)]
  still: bool,

  /// Number of animation frames.
  #[arg(long, conflicts_with = "still")]
  frames: Option<u32>,

  /// Width and height of each image in pixels.
  #[arg(long, value_name = "PX")]
  size: Option<u32>,

  /// Border reserved on each side, as a fraction of the image size.
  #[arg(long, conflicts_with = "still")]
  margin: Option<f64>,

  /// Keep the circles in place across frames.
  #[arg(long, conflicts_with = "still")]
  no_jitter: bool,

  /// Output directory.
  #[arg(long, default_value = "img")]
  out_dir: PathBuf,

  /// Render frames one after another on the current thread.
  #[arg(long)]
  sequential: bool,

  /// More log output (-v debug, -vv trace).
  #[arg(short, long, action = ArgAction::Count)]
  verbose: u8,

  /// Only log errors.
  #[arg(short, long, conflicts_with = "verbose")]
  quiet: bool,
}

impl Cli {
  /// An empty --pubkey counts as not supplied.
  fn pubkey(&self) -> Option<&str> {
    self.pubkey.as_deref().filter(|hex| !hex.is_empty())
  }

  fn has_key_source(&self) -> bool {
    self.generate || self.pubkey().is_some()
  }

  fn log_level(&self) -> Level {
    match (self.quiet, self.verbose) {
      (true, _) => Level::ERROR,
      (false, 0) => Level::INFO,
      (false, 1) => Level::DEBUG,
      (false, _) => Level::TRACE
    }
  }

  fn render_config(&self) -> Result<RenderConfig> {
    let defaults = if self.still { RenderConfig::still() } else { RenderConfig::animated() };
    let placement = match defaults.placement {
      Placement::Scaled { margin, jitter } => Placement::Scaled {
        margin: self.margin.unwrap_or(margin),
        jitter: jitter && !self.no_jitter
      },
      Placement::Modulo => Placement::Modulo
    };
    Ok(RenderConfig::new(
      self.size.unwrap_or(defaults.image_size),
      self.frames.unwrap_or(defaults.frame_count),
      placement
    )?)
  }
}

fn acquire_key(cli: &Cli) -> Result<Option<PublicKey>> {
  if cli.generate {
    let keypair = Keypair::generate();
    println!("Public key: {}", keypair.public_key());
    println!("Private key: {}", keypair.private_key_hex());
    return Ok(Some(keypair.public_key()));
  }
  cli.pubkey()
    .map(|hex| PublicKey::from_hex(hex).context("Error parsing public key"))
    .transpose()
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  tracing_subscriber::fmt()
    .with_max_level(cli.log_level())
    .with_writer(std::io::stderr)
    .init();

  if !cli.has_key_source() {
    println!("{}", USAGE_HINT);
    return Ok(());
  }

  let config = cli.render_config().context("invalid rendering options")?;
  let key = acquire_key(&cli)?.context(USAGE_HINT)?;

  let summary = Sequence::new(config, &cli.out_dir)?
    .parallel(!cli.sequential)
    .write_all(&key)
    .with_context(|| format!("writing fingerprint to '{}'", cli.out_dir.display()))?;
  tracing::debug!(?summary, "done");
  Ok(())
}
