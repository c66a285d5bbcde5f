use std::iter;

use onepack_common::{Module, ModuleIdx};
use onepack_error::BuildDiagnostic;
use onepack_utils::indexmap::FxIndexSet;
use rustc_hash::{FxHashMap, FxHashSet};

use super::LinkStage;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum Status {
  ToBeExecuted(ModuleIdx),
  WaitForExit(ModuleIdx),
}

impl LinkStage {
  /// Depth-first post-order walk from the entries in input order. Dependencies are visited
  /// in source order, so the result only depends on the graph and never on load timing.
  /// A module already on the current chain is skipped, which breaks the cycle at the module
  /// discovered first.
  pub(crate) fn sort_modules(&mut self) {
    let mut execution_stack = self
      .entry_points
      .iter()
      .rev()
      .map(|entry| Status::ToBeExecuted(entry.idx))
      .collect::<Vec<_>>();

    let mut executed_ids =
      FxHashSet::with_capacity_and_hasher(self.module_table.modules.len(), Default::default());
    let mut stack_indexes_of_executing_id = FxHashMap::default();

    let mut next_exec_order = 0;
    let mut circular_dependencies = FxIndexSet::default();
    let mut sorted_modules = Vec::with_capacity(self.module_table.modules.len());

    while let Some(status) = execution_stack.pop() {
      match status {
        Status::ToBeExecuted(id) => {
          if executed_ids.contains(&id) {
            // Try to check if there is a circular dependency
            if let Some(index) = stack_indexes_of_executing_id.get(&id).copied() {
              // Executing
              let cycle = execution_stack[index..]
                .iter()
                .filter_map(|action| match action {
                  // Only modules with `Status::WaitForExit` are on the execution chain
                  Status::ToBeExecuted(_) => None,
                  Status::WaitForExit(id) => Some(*id),
                })
                .chain(iter::once(id))
                .collect::<Box<[_]>>();
              circular_dependencies.insert(cycle);
            }
          } else {
            executed_ids.insert(id);
            execution_stack.push(Status::WaitForExit(id));
            stack_indexes_of_executing_id.insert(id, execution_stack.len() - 1);

            let dependencies = self.module_table.dependencies(id).collect::<Vec<_>>();
            execution_stack.extend(dependencies.into_iter().rev().map(Status::ToBeExecuted));
          }
        }
        Status::WaitForExit(id) => {
          match &mut self.module_table[id] {
            Module::Normal(module) => {
              sorted_modules.push(id);
              module.exec_order = next_exec_order;
            }
            Module::External(module) => {
              module.exec_order = next_exec_order;
            }
          }
          next_exec_order += 1;
          stack_indexes_of_executing_id.remove(&id);
        }
      }
    }

    for cycle in circular_dependencies {
      let paths =
        cycle.iter().map(|id| self.module_table[*id].stable_id().to_string()).collect::<Vec<_>>();
      tracing::warn!(cycle = %paths.join(" -> "), "circular dependency");
      self.warnings.push(BuildDiagnostic::CircularDependency { paths }.into());
    }

    self.sorted_modules = sorted_modules;
  }
}
