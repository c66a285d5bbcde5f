pub mod external_module;
pub mod normal_module;

use oxc_index::IndexVec;

use crate::{ExternalModule, ImportRecordIdx, NormalModule, ResolvedImportRecord};

#[derive(Debug)]
pub enum Module {
  Normal(Box<NormalModule>),
  External(Box<ExternalModule>),
}

impl Module {
  pub fn exec_order(&self) -> u32 {
    match self {
      Self::Normal(v) => v.exec_order,
      Self::External(v) => v.exec_order,
    }
  }

  pub fn stable_id(&self) -> &str {
    match self {
      Self::Normal(v) => &v.stable_id,
      Self::External(v) => &v.id,
    }
  }

  pub fn as_normal(&self) -> Option<&NormalModule> {
    match self {
      Self::Normal(v) => Some(v),
      Self::External(_) => None,
    }
  }

  pub fn import_records(&self) -> &IndexVec<ImportRecordIdx, ResolvedImportRecord> {
    match self {
      Self::Normal(v) => &v.import_records,
      Self::External(v) => &v.import_records,
    }
  }
}

impl From<NormalModule> for Module {
  fn from(module: NormalModule) -> Self {
    Self::Normal(Box::new(module))
  }
}

impl From<ExternalModule> for Module {
  fn from(module: ExternalModule) -> Self {
    Self::External(Box::new(module))
  }
}
