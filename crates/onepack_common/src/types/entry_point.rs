use crate::ModuleIdx;

#[derive(Debug)]
pub struct EntryPoint {
  pub idx: ModuleIdx,
}
