use arcstr::ArcStr;
use oxc_index::IndexVec;

use crate::{ImportRecordIdx, ModuleId, ModuleIdx, ResolvedImportRecord};

#[derive(Debug)]
pub struct NormalModule {
  /// `u32::MAX` until the link stage sorts the modules.
  pub exec_order: u32,
  pub idx: ModuleIdx,
  pub id: ModuleId,
  /// `stable_id` is calculated based on `id` to be stable across machine and os.
  pub stable_id: String,
  pub source: ArcStr,
  /// Whether the source contains `import`/`export` declarations.
  pub has_module_syntax: bool,
  pub import_records: IndexVec<ImportRecordIdx, ResolvedImportRecord>,
}
