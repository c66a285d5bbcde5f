use std::path::PathBuf;

use crate::{FilenameTemplate, InputItem, OutputFormat, Platform};

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: Vec<InputItem>,
  pub cwd: PathBuf,
  pub platform: Platform,

  // --- Output
  pub name: String,
  pub filename: FilenameTemplate,
  pub dir: String,
  pub file: Option<String>,
  pub format: OutputFormat,
  pub pathinfo: bool,
}

impl NormalizedBundlerOptions {
  /// Absolute output directory.
  pub fn out_dir(&self) -> PathBuf {
    self.cwd.join(&self.dir)
  }
}
