use oxc_index::IndexVec;

use crate::{ImportRecordIdx, ModuleId, ModuleIdx, ResolvedImportRecord};

/// A module that is referenced but not bundled, such as an http url or a node builtin. The
/// bundle asks the host `require` for it at runtime.
#[derive(Debug)]
pub struct ExternalModule {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  pub exec_order: u32,
  /// Always empty, externals are leaves of the graph.
  pub import_records: IndexVec<ImportRecordIdx, ResolvedImportRecord>,
}

impl ExternalModule {
  pub fn new(idx: ModuleIdx, id: ModuleId) -> Self {
    Self { idx, id, exec_order: u32::MAX, import_records: IndexVec::default() }
  }
}
