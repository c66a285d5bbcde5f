mod module_task;
pub mod task_context;

use std::sync::Arc;

use arcstr::ArcStr;
use onepack_common::{
  EntryPoint, ExternalModule, ImportRecordIdx, Module, ModuleId, ModuleIdx, ModuleLoaderMsg,
  ModuleTable, NormalModuleTaskResult, ResolvedId,
};
use onepack_error::{BuildDiagnostic, BuildResult};
use onepack_fs::OsFileSystem;
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use tokio::{
  sync::mpsc::Receiver,
  task::{JoinError, JoinSet},
};

use self::{module_task::ModuleTask, task_context::TaskContext};
use crate::types::{SharedOptions, SharedResolver};

/// Builds the module graph. Every normal module is loaded and scanned by its own task, while
/// the loader is the only one touching `visited` and `modules`, so a module reachable through
/// several paths is still assigned exactly one index.
pub struct ModuleLoader {
  rx: Receiver<ModuleLoaderMsg>,
  /// Spawned tasks that have not reported back yet.
  remaining: u32,
  /// A task that panics never sends a message, only its join error tells the loop about it.
  tasks: JoinSet<()>,
  shared_context: Arc<TaskContext>,
  modules: IndexVec<ModuleIdx, Option<Module>>,
  visited: FxHashMap<ArcStr, ModuleIdx>,
}

#[derive(Debug)]
pub struct ModuleLoaderOutput {
  pub module_table: ModuleTable,
  /// In the order of `options.input`.
  pub entry_points: Vec<EntryPoint>,
}

impl ModuleLoader {
  pub fn new(fs: OsFileSystem, options: SharedOptions, resolver: SharedResolver) -> Self {
    // 1024 should be enough for most cases
    // over 1024 pending tasks are insane
    let (tx, rx) = tokio::sync::mpsc::channel(1024);

    let shared_context = Arc::new(TaskContext { fs, resolver, options, tx });

    Self {
      rx,
      remaining: 0,
      tasks: JoinSet::new(),
      shared_context,
      modules: IndexVec::new(),
      visited: FxHashMap::default(),
    }
  }

  fn try_spawn_new_task(&mut self, resolved_id: ResolvedId) -> ModuleIdx {
    if let Some(idx) = self.visited.get(&resolved_id.id) {
      return *idx;
    }

    let idx = self.modules.push(None);
    self.visited.insert(resolved_id.id.clone(), idx);

    if resolved_id.is_external {
      let module = ExternalModule::new(idx, ModuleId::new(resolved_id.id));
      self.modules[idx] = Some(module.into());
    } else {
      self.remaining += 1;
      let task = ModuleTask::new(Arc::clone(&self.shared_context), idx, resolved_id);
      self.tasks.spawn(task.run());
    }

    idx
  }

  pub async fn fetch_all_modules(
    mut self,
    user_defined_entries: Vec<ResolvedId>,
  ) -> BuildResult<ModuleLoaderOutput> {
    let entry_points = user_defined_entries
      .into_iter()
      .map(|info| EntryPoint { idx: self.try_spawn_new_task(info) })
      .collect::<Vec<_>>();

    let mut errors: Vec<anyhow::Error> = vec![];

    while self.remaining > 0 {
      let msg = tokio::select! {
        msg = self.rx.recv() => msg,
        Some(joined) = self.tasks.join_next() => {
          // Finished tasks have already sent their message.
          if let Err(err) = joined {
            errors.push(task_failure(err));
            self.remaining -= 1;
          }
          continue;
        }
      };
      let Some(msg) = msg else {
        break;
      };
      match msg {
        ModuleLoaderMsg::NormalModuleDone(task_result) => {
          let NormalModuleTaskResult { mut module, resolved_deps, raw_import_records } =
            task_result;

          let import_records = raw_import_records
            .into_iter()
            .zip(resolved_deps)
            .map(|(raw_rec, info)| {
              let idx = self.try_spawn_new_task(info);
              raw_rec.into_resolved(idx)
            })
            .collect::<IndexVec<ImportRecordIdx, _>>();

          module.import_records = import_records;
          let idx = module.idx;
          self.modules[idx] = Some(module.into());
        }
        ModuleLoaderMsg::BuildErrors(errs) => {
          errors.extend(errs);
        }
      }
      self.remaining -= 1;
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    let modules = self
      .modules
      .into_iter()
      .map(|module| module.expect("Every spawned task should have reported its module"))
      .collect();

    tracing::debug!(modules = self.visited.len(), "module graph built");

    Ok(ModuleLoaderOutput { module_table: ModuleTable::new(modules), entry_points })
  }
}

fn task_failure(err: JoinError) -> anyhow::Error {
  let message = match err.try_into_panic() {
    Ok(payload) => payload
      .downcast_ref::<&str>()
      .map(ToString::to_string)
      .or_else(|| payload.downcast_ref::<String>().cloned())
      .unwrap_or_else(|| "unknown panic payload".to_string()),
    Err(err) => err.to_string(),
  };
  BuildDiagnostic::TaskPanicked { message }.into()
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use onepack_common::BundlerOptions;
  use onepack_error::BuildDiagnostic;
  use onepack_fs::OsFileSystem;
  use onepack_resolver::Resolver;

  use super::ModuleLoader;
  use crate::utils::normalize_options::normalize_options;

  #[tokio::test(flavor = "multi_thread")]
  async fn panicking_task_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let options = normalize_options(BundlerOptions {
      cwd: Some(dir.path().to_path_buf()),
      ..Default::default()
    })
    .unwrap();
    let resolver = Arc::new(Resolver::new(options.platform, options.cwd.clone()));

    let mut loader = ModuleLoader::new(OsFileSystem, Arc::new(options), resolver);
    loader.remaining += 1;
    loader.tasks.spawn(async { panic!("parser blew up") });

    let err = loader.fetch_all_modules(vec![]).await.unwrap_err();

    assert!(matches!(
      err.diagnostics().next(),
      Some(BuildDiagnostic::TaskPanicked { message }) if message == "parser blew up"
    ));
  }
}
