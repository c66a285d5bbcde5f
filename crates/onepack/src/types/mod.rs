pub mod bundle_output;

use std::sync::Arc;

use onepack_common::NormalizedBundlerOptions;
use onepack_resolver::Resolver;

pub type SharedResolver = Arc<Resolver>;
pub type SharedOptions = Arc<NormalizedBundlerOptions>;
