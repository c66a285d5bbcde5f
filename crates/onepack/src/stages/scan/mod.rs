use std::sync::Arc;

use onepack_common::{ImportKind, ResolvedId};
use onepack_error::{BuildDiagnostic, BuildResult};
use onepack_fs::OsFileSystem;

use crate::{
  module_loader::{ModuleLoader, ModuleLoaderOutput},
  types::{SharedOptions, SharedResolver},
  utils::resolve_id::resolve_id,
};

pub type ScanStageOutput = ModuleLoaderOutput;

pub struct ScanStage {
  fs: OsFileSystem,
  options: SharedOptions,
  resolver: SharedResolver,
}

impl ScanStage {
  pub fn new(fs: OsFileSystem, options: SharedOptions, resolver: SharedResolver) -> Self {
    Self { fs, options, resolver }
  }

  pub async fn scan(&self) -> BuildResult<ScanStageOutput> {
    if self.options.input.is_empty() {
      Err(BuildDiagnostic::invalid_option("You must supply at least one entry in `input`"))?;
    }

    let user_entries = self.resolve_user_defined_entries()?;

    let module_loader =
      ModuleLoader::new(self.fs, Arc::clone(&self.options), Arc::clone(&self.resolver));
    let output = module_loader.fetch_all_modules(user_entries).await?;

    Ok(output)
  }

  /// Resolves every entry against `cwd` before any module is loaded, reporting all missing
  /// entries at once.
  fn resolve_user_defined_entries(&self) -> BuildResult<Vec<ResolvedId>> {
    let resolver = &self.resolver;

    let resolved_ids = self.options.input.iter().map(|input_item| {
      let resolved = resolve_id(resolver, &input_item.import, None, ImportKind::Import, true);

      (input_item, resolved)
    });

    let mut ret = Vec::with_capacity(self.options.input.len());

    let mut errors: Vec<anyhow::Error> = vec![];

    for (input_item, resolved) in resolved_ids {
      match resolved {
        Ok(info) if info.is_external => {
          errors.push(
            BuildDiagnostic::MissingEntry {
              specifier: input_item.import.clone(),
              reason: "entry can't be external".to_string(),
            }
            .into(),
          );
        }
        Ok(info) => {
          ret.push(info);
        }
        Err(err) => {
          errors.push(
            BuildDiagnostic::MissingEntry {
              specifier: input_item.import.clone(),
              reason: err.to_string(),
            }
            .into(),
          );
        }
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(ret)
  }
}
