use std::{sync::Arc, time::Instant};

use onepack_common::{BundlerOptions, NormalizedBundlerOptions};
use onepack_error::{BuildDiagnostic, BuildResult};
use onepack_fs::{FileSystem, OsFileSystem};
use onepack_resolver::Resolver;

use crate::{
  stages::{generate::GenerateStage, link::LinkStage, scan::ScanStage},
  types::{bundle_output::BundleOutput, SharedOptions, SharedResolver},
  utils::normalize_options::normalize_options,
};

pub struct Bundler {
  pub(crate) fs: OsFileSystem,
  pub(crate) options: SharedOptions,
  pub(crate) resolver: SharedResolver,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> BuildResult<Self> {
    let options = normalize_options(options)?;

    let resolver: SharedResolver = Resolver::new(options.platform, options.cwd.clone()).into();

    Ok(Self { fs: OsFileSystem, options: Arc::new(options), resolver })
  }

  pub fn options(&self) -> &NormalizedBundlerOptions {
    &self.options
  }

  /// Builds the bundle and writes it into the output directory.
  pub async fn write(&mut self) -> BuildResult<BundleOutput> {
    self.build(true).await
  }

  /// Builds the bundle without touching the output directory.
  pub async fn generate(&mut self) -> BuildResult<BundleOutput> {
    self.build(false).await
  }

  async fn build(&mut self, is_write: bool) -> BuildResult<BundleOutput> {
    let start = Instant::now();

    let scan_stage_output =
      ScanStage::new(self.fs, Arc::clone(&self.options), Arc::clone(&self.resolver))
        .scan()
        .await?;

    let mut link_stage_output = LinkStage::new(scan_stage_output).link();

    let output = GenerateStage::new(&mut link_stage_output, &self.options).generate()?;

    if is_write {
      self.write_output(&output)?;
    }

    tracing::info!(
      format = %self.options.format,
      modules = link_stage_output.sorted_modules.len(),
      warnings = output.warnings.len(),
      elapsed = ?start.elapsed(),
      "build finished"
    );

    Ok(output)
  }

  fn write_output(&self, output: &BundleOutput) -> BuildResult<()> {
    let dir = self.options.out_dir();

    for asset in &output.assets {
      let dest = dir.join(asset.filename());
      if let Some(parent) = dest.parent() {
        self
          .fs
          .create_dir_all(parent)
          .map_err(|source| BuildDiagnostic::Write { path: parent.to_path_buf(), source })?;
      }
      self
        .fs
        .write(&dest, asset.content_as_bytes())
        .map_err(|source| BuildDiagnostic::Write { path: dest.clone(), source })?;
      tracing::info!(path = %dest.display(), "bundle written");
    }

    Ok(())
  }
}
