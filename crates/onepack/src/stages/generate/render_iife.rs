use indexmap::map::Entry;
use onepack_common::{Module, NormalModule, SourceJoiner};
use onepack_error::BuildDiagnostic;
use onepack_utils::{
  ecmascript::js_string_literal,
  indexmap::{FxIndexMap, FxIndexSet},
  rayon::{IntoParallelRefIterator, ParallelIterator},
};

use super::{pathinfo_comment, GenerateStage};

/// Opens the wrapper. Each module runs once, the first time it is required, and its
/// `module` record is cached before it runs so a cyclic `require` sees the partial exports.
/// Specifiers missing from a module's dependency map are externals and go to the host
/// `require`.
const RUNTIME_HEAD: &str = r#"(function (modules, entries) {
  var cache = {};
  function load(id) {
    if (Object.prototype.hasOwnProperty.call(cache, id)) return cache[id].exports;
    var record = modules[id];
    var module = (cache[id] = { exports: {} });
    var dependencies = record[1];
    record[0].call(module.exports, module, module.exports, function (specifier) {
      if (Object.prototype.hasOwnProperty.call(dependencies, specifier)) {
        return load(dependencies[specifier]);
      }
      if (typeof require === "function") return require(specifier);
      throw new Error("Cannot find module '" + specifier + "'");
    });
    return module.exports;
  }
  entries.forEach(load);
})({"#;

impl GenerateStage<'_> {
  /// A single self-executing function holding every module keyed by stable id. Entries run
  /// in input order.
  pub(super) fn render_iife(&self, warnings: &mut Vec<anyhow::Error>) -> String {
    let module_table = &self.link_output.module_table;
    let pathinfo = self.options.pathinfo;

    let normal_modules = self
      .link_output
      .sorted_modules
      .iter()
      .filter_map(|idx| module_table[*idx].as_normal())
      .collect::<Vec<_>>();

    warnings.extend(normal_modules.iter().filter(|module| module.has_module_syntax).map(|module| {
      anyhow::Error::from(BuildDiagnostic::ModuleSyntaxInIife { id: module.stable_id.clone() })
    }));

    let rendered_modules = normal_modules
      .par_iter()
      .map(|module| {
        // Only `require` calls reach the runtime, so when `import` and `require` of one
        // specifier resolve to different modules the `require` target is kept.
        let mut dependencies = FxIndexMap::default();
        for rec in module.import_records.iter() {
          let Module::Normal(importee) = &module_table[rec.state] else { continue };
          let target = importee.stable_id.as_str();
          match dependencies.entry(rec.specifier.as_str()) {
            Entry::Vacant(entry) => {
              entry.insert(target);
            }
            Entry::Occupied(mut entry) if rec.kind.is_require() => {
              entry.insert(target);
            }
            Entry::Occupied(_) => {}
          }
        }
        render_module(module, &dependencies, pathinfo)
      })
      .collect::<Vec<_>>();

    let entries = self
      .link_output
      .entry_points
      .iter()
      .map(|entry| module_table[entry.idx].stable_id())
      .collect::<FxIndexSet<_>>()
      .into_iter()
      .map(js_string_literal)
      .collect::<Vec<_>>()
      .join(", ");

    let mut joiner = SourceJoiner::default();
    joiner.prepend_source(RUNTIME_HEAD);
    rendered_modules.into_iter().for_each(|source| joiner.append_source(source));
    joiner.append_source(format!("}}, [{entries}]);\n"));
    joiner.join()
  }
}

fn render_module(
  module: &NormalModule,
  dependencies: &FxIndexMap<&str, &str>,
  pathinfo: bool,
) -> String {
  let dependencies = dependencies
    .iter()
    .map(|(specifier, stable_id)| {
      format!("{}: {}", js_string_literal(specifier), js_string_literal(stable_id))
    })
    .collect::<Vec<_>>()
    .join(", ");

  let mut ret = String::with_capacity(module.source.len() + 128);
  if pathinfo {
    ret.push_str(&pathinfo_comment(&module.stable_id));
    ret.push('\n');
  }
  ret.push_str(&js_string_literal(&module.stable_id));
  ret.push_str(": [function (module, exports, require) {\n");
  ret.push_str(&module.source);
  if !module.source.ends_with('\n') {
    ret.push('\n');
  }
  ret.push_str("}, {");
  ret.push_str(&dependencies);
  ret.push_str("}],");
  ret
}
