use std::path::PathBuf;

use clap::Args;

use crate::types::{output_format::OutputFormat, platform::Platform};

#[derive(Args)]
pub struct InputArgs {
  /// Entry modules, in execution order.
  pub input: Vec<String>,

  /// JSON config file. Flags take precedence over its values.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  #[clap(long)]
  pub cwd: Option<PathBuf>,

  #[clap(long, short)]
  pub platform: Option<Platform>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long, short = 'o')]
  pub file: Option<String>,

  /// Supports `[name]`, `[hash]` and `[hash:N]`.
  #[clap(long)]
  pub filename: Option<String>,

  #[clap(long)]
  pub name: Option<String>,

  #[clap(long)]
  pub format: Option<OutputFormat>,

  #[clap(long)]
  pub pathinfo: bool,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long, short = 's')]
  pub silent: bool,

  #[clap(long, short = 'v')]
  pub verbose: bool,
}
