use std::ops::{Index, IndexMut};

use oxc_index::IndexVec;

use crate::{Module, ModuleIdx};

pub type IndexModules = IndexVec<ModuleIdx, Module>;

/// The module graph: every discovered module, with edges stored as the resolved import
/// records of each module. Every edge points at an index of this table.
#[derive(Debug, Default)]
pub struct ModuleTable {
  pub modules: IndexModules,
}

impl ModuleTable {
  pub fn new(modules: IndexModules) -> Self {
    Self { modules }
  }

  /// Direct dependencies of `idx`, in the order they are referenced in the source.
  pub fn dependencies(&self, idx: ModuleIdx) -> impl Iterator<Item = ModuleIdx> + '_ {
    self.modules[idx].import_records().iter().map(|rec| rec.state)
  }
}

impl Index<ModuleIdx> for ModuleTable {
  type Output = Module;

  fn index(&self, idx: ModuleIdx) -> &Self::Output {
    &self.modules[idx]
  }
}

impl IndexMut<ModuleIdx> for ModuleTable {
  fn index_mut(&mut self, idx: ModuleIdx) -> &mut Self::Output {
    &mut self.modules[idx]
  }
}
