mod bundler_options;
mod module;
mod module_loader;
mod types;

pub use bundler_options::{
  config_file::ConfigFile,
  filename_template::{FilenameTemplate, DEFAULT_HASH_LEN},
  input_item::InputItem,
  normalized_bundler_options::NormalizedBundlerOptions, output_format::OutputFormat,
  platform::Platform, BundlerOptions,
};

pub use crate::{
  module::{external_module::ExternalModule, normal_module::NormalModule, Module},
  module_loader::{task_result::NormalModuleTaskResult, ModuleLoaderMsg},
  types::{
    entry_point::EntryPoint,
    import_kind::ImportKind,
    import_record::{ImportRecord, RawImportRecord, ResolvedImportRecord},
    module_id::ModuleId,
    module_table::{IndexModules, ModuleTable},
    output_asset::OutputAsset,
    raw_idx::{ImportRecordIdx, ModuleIdx},
    resolved_request_info::ResolvedId,
    source::Source,
    source_joiner::SourceJoiner,
  },
};
