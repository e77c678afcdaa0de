use anyhow::Result;
use clap::Parser;
use snapgrep::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Finds images whose AI-generated descriptions mention a keyword.
#[derive(Parser, Debug)]
#[command(name = "snapgrep", version, about, long_about = None)]
struct Cli {
  /// Directory containing the images to scan
  directory: PathBuf,

  /// Keyword to look for, singular form; quote multi-word phrases
  keyword: String,

  /// Also scan immediate subdirectories (one level deep)
  #[arg(short, long)]
  recurse: bool,

  /// Log tokenization and matching decisions
  #[arg(short, long)]
  debug: bool,

  /// Ollama generate endpoint to send images to
  #[arg(long, env = "SNAPGREP_API_URL", default_value = DEFAULT_API_URL)]
  api_url: String,

  /// Vision model asked for the descriptions
  #[arg(long, default_value = DEFAULT_MODEL)]
  model: String,

  /// Prompt sent along with every image
  #[arg(long, default_value = DEFAULT_PROMPT)]
  prompt: String,

  /// Seconds to wait for a single description before giving up
  #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
  timeout: u64,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.debug);

  println!(
    "{} {} started at: {}",
    env!("CARGO_PKG_NAME"),
    env!("CARGO_PKG_VERSION"),
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
  );

  let provider = OllamaProvider::with_timeout(cli.api_url, Duration::from_secs(cli.timeout))?;
  let scanner = ImageScanner::builder()
    .provider(Box::new(provider))
    .model(cli.model)
    .prompt(cli.prompt)
    .recurse(cli.recurse)
    .build()?;

  scanner.scan(&cli.directory, &cli.keyword)?;
  Ok(())
}

/// Routes diagnostics through tracing; `--debug` turns on the full trace
/// of tokenization and matching decisions.
fn init_tracing(debug: bool) {
  let filter = if debug {
    EnvFilter::new("info,snapgrep=debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
  };
  tracing_subscriber::fmt().with_env_filter(filter).init();
}
