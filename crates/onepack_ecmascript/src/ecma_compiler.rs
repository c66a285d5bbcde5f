use std::path::Path;

use itertools::Itertools;
use onepack_error::{BuildDiagnostic, BuildResult};
use oxc::{
  allocator::Allocator,
  ast_visit::Visit,
  parser::{ParseOptions, Parser},
  span::SourceType,
};

use crate::ast_scanner::{AstScanner, EcmaScanResult};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source` and collects its dependency references. The AST is dropped afterwards,
  /// sources are emitted as they were read.
  pub fn scan(id: &str, source: &str, source_type: SourceType) -> BuildResult<EcmaScanResult> {
    let allocator = Allocator::default();
    // Scripts run wrapped in a function, so a top-level `return` is valid there.
    let options = ParseOptions {
      allow_return_outside_function: !source_type.is_module(),
      ..ParseOptions::default()
    };
    let ret = Parser::new(&allocator, source, source_type).with_options(options).parse();

    if ret.panicked || !ret.errors.is_empty() {
      let message = ret.errors.iter().map(ToString::to_string).join("; ");
      Err(BuildDiagnostic::Parse { id: id.to_string(), message })?;
    }

    let mut scanner = AstScanner::default();
    scanner.visit_program(&ret.program);
    Ok(scanner.into_result())
  }

  /// `.mjs` is an ES module and `.cjs` a script. Anything else is a module only if it uses
  /// `import`/`export`.
  pub fn source_type_for(path: &Path) -> SourceType {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some("mjs") => SourceType::mjs(),
      Some("cjs") => SourceType::cjs(),
      _ => SourceType::unambiguous(),
    }
  }
}
