use task_result::NormalModuleTaskResult;

pub mod task_result;

pub enum ModuleLoaderMsg {
  NormalModuleDone(NormalModuleTaskResult),
  BuildErrors(Vec<anyhow::Error>),
}
