mod generate_filename;
mod render_concat;
mod render_iife;

use onepack_common::{NormalizedBundlerOptions, OutputAsset, OutputFormat};
use onepack_error::BuildResult;

use super::link::LinkStageOutput;
use crate::types::bundle_output::BundleOutput;

pub struct GenerateStage<'a> {
  link_output: &'a mut LinkStageOutput,
  options: &'a NormalizedBundlerOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(link_output: &'a mut LinkStageOutput, options: &'a NormalizedBundlerOptions) -> Self {
    Self { link_output, options }
  }

  pub fn generate(&mut self) -> BuildResult<BundleOutput> {
    let mut warnings = std::mem::take(&mut self.link_output.warnings);

    let content = match self.options.format {
      OutputFormat::Iife => self.render_iife(&mut warnings),
      OutputFormat::Concat => self.render_concat(),
    };

    let filename = self.generate_filename(&content);
    tracing::debug!(
      filename = %filename,
      modules = self.link_output.sorted_modules.len(),
      "bundle rendered"
    );

    Ok(BundleOutput { assets: vec![OutputAsset { filename, content }], warnings })
  }
}

/// `/*! src/main.js */`, emitted before a module when `pathinfo` is on.
fn pathinfo_comment(stable_id: &str) -> String {
  format!("/*! {} */", stable_id.replace("*/", "*\\/"))
}
