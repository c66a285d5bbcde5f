use onepack_common::OutputAsset;

#[derive(Debug, Default)]
pub struct BundleOutput {
  /// Always exactly one asset, the bundle.
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<anyhow::Error>,
}
