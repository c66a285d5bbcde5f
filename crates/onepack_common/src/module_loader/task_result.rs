use oxc_index::IndexVec;

use crate::{ImportRecordIdx, NormalModule, RawImportRecord, ResolvedId};

pub struct NormalModuleTaskResult {
  /// `import_records` is left empty, the module loader fills it once targets have indexes.
  pub module: NormalModule,
  pub resolved_deps: IndexVec<ImportRecordIdx, ResolvedId>,
  pub raw_import_records: IndexVec<ImportRecordIdx, RawImportRecord>,
}
