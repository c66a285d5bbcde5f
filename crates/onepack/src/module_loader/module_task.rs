use std::sync::Arc;

use onepack_common::{
  ImportRecordIdx, ModuleId, ModuleIdx, ModuleLoaderMsg, NormalModule, NormalModuleTaskResult,
  RawImportRecord, ResolvedId,
};
use onepack_ecmascript::{EcmaCompiler, EcmaScanResult};
use onepack_error::{BuildDiagnostic, BuildResult};
use onepack_utils::source_position::line_column;
use oxc_index::IndexVec;

use super::task_context::TaskContext;
use crate::utils::{load_source::load_source, resolve_id::resolve_id};

pub struct ModuleTask {
  ctx: Arc<TaskContext>,
  idx: ModuleIdx,
  resolved_id: ResolvedId,
}

impl ModuleTask {
  pub fn new(ctx: Arc<TaskContext>, idx: ModuleIdx, resolved_id: ResolvedId) -> Self {
    Self { ctx, idx, resolved_id }
  }

  pub async fn run(self) {
    if let Err(errs) = self.run_inner().await {
      self.ctx.tx.send(ModuleLoaderMsg::BuildErrors(errs.0)).await.expect("Send should not fail");
    }
  }

  async fn run_inner(&self) -> BuildResult<()> {
    let id = ModuleId::new(self.resolved_id.id.clone());
    let stable_id = id.stabilize(&self.ctx.options.cwd);

    let source = load_source(&self.ctx.fs, &self.resolved_id)
      .map_err(|source| BuildDiagnostic::Load { id: stable_id.clone(), source })?;

    let EcmaScanResult { import_records: raw_import_records, has_module_syntax } =
      EcmaCompiler::scan(&stable_id, &source, EcmaCompiler::source_type_for(id.as_path()))?;

    let resolved_deps = self.resolve_dependencies(&id, &stable_id, &source, &raw_import_records)?;

    tracing::debug!(id = %stable_id, dependencies = resolved_deps.len(), "module scanned");

    let module = NormalModule {
      exec_order: u32::MAX,
      idx: self.idx,
      id,
      stable_id,
      source: source.into(),
      has_module_syntax,
      import_records: IndexVec::default(),
    };

    self
      .ctx
      .tx
      .send(ModuleLoaderMsg::NormalModuleDone(NormalModuleTaskResult {
        module,
        resolved_deps,
        raw_import_records,
      }))
      .await
      .expect("Send should not fail");

    Ok(())
  }

  /// Every reference of the module is resolved, and all failures are reported together.
  fn resolve_dependencies(
    &self,
    importer: &ModuleId,
    stable_id: &str,
    source: &str,
    dependencies: &IndexVec<ImportRecordIdx, RawImportRecord>,
  ) -> BuildResult<IndexVec<ImportRecordIdx, ResolvedId>> {
    let mut ret = IndexVec::with_capacity(dependencies.len());
    let mut errors: Vec<anyhow::Error> = vec![];

    for rec in dependencies.iter() {
      match resolve_id(&self.ctx.resolver, &rec.specifier, Some(&**importer), rec.kind, false) {
        Ok(info) => {
          ret.push(info);
        }
        Err(err) => {
          let (line, column) = line_column(source, rec.state.start);
          errors.push(
            BuildDiagnostic::UnresolvedReference {
              importer: stable_id.to_string(),
              specifier: rec.specifier.to_string(),
              location: format!("{stable_id}:{line}:{column}"),
              reason: err.to_string(),
            }
            .into(),
          );
        }
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(ret)
  }
}
