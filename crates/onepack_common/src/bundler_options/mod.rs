pub mod config_file;
pub mod filename_template;
pub mod input_item;
pub mod normalized_bundler_options;
pub mod output_format;
pub mod platform;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{InputItem, OutputFormat, Platform};

/// Raw options as given by the user. Normalized once per `Bundler` into
/// `NormalizedBundlerOptions`.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundlerOptions {
  // --- Input
  pub input: Option<Vec<InputItem>>,
  pub cwd: Option<PathBuf>,
  pub platform: Option<Platform>,

  // --- Output
  /// Substituted for `[name]` in `filename`. Defaults to `main`.
  pub name: Option<String>,
  /// Filename template, supports `[name]`, `[hash]` and `[hash:N]`. Defaults to `[name].js`.
  pub filename: Option<String>,
  /// Output directory, relative to `cwd`. Defaults to `dist`.
  pub dir: Option<String>,
  /// Exact output path. Takes precedence over `dir` and `filename`.
  pub file: Option<String>,
  pub format: Option<OutputFormat>,
  /// Prefix each module with a comment naming its stable id.
  pub pathinfo: Option<bool>,
}
