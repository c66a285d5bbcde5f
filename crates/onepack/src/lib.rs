mod bundler;
mod module_loader;
mod stages;
mod types;
mod utils;

pub use crate::{bundler::Bundler, types::bundle_output::BundleOutput};
pub use onepack_common::*;
pub use onepack_error::{BuildDiagnostic, BuildError, BuildResult};
