mod sort_modules;

use onepack_common::{EntryPoint, ModuleIdx, ModuleTable};

use super::scan::ScanStageOutput;

#[derive(Debug)]
pub struct LinkStageOutput {
  pub module_table: ModuleTable,
  pub entry_points: Vec<EntryPoint>,
  /// Normal modules in execution order, each before every module that depends on it.
  pub sorted_modules: Vec<ModuleIdx>,
  pub warnings: Vec<anyhow::Error>,
}

#[derive(Debug)]
pub struct LinkStage {
  pub module_table: ModuleTable,
  pub entry_points: Vec<EntryPoint>,
  pub sorted_modules: Vec<ModuleIdx>,
  pub warnings: Vec<anyhow::Error>,
}

impl LinkStage {
  pub fn new(scan_stage_output: ScanStageOutput) -> Self {
    Self {
      sorted_modules: Vec::with_capacity(scan_stage_output.module_table.modules.len()),
      module_table: scan_stage_output.module_table,
      entry_points: scan_stage_output.entry_points,
      warnings: vec![],
    }
  }

  pub fn link(mut self) -> LinkStageOutput {
    self.sort_modules();

    LinkStageOutput {
      module_table: self.module_table,
      entry_points: self.entry_points,
      sorted_modules: self.sorted_modules,
      warnings: self.warnings,
    }
  }
}
