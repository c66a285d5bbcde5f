use arcstr::ArcStr;
use onepack_common::{ImportKind, ImportRecordIdx, RawImportRecord};
use oxc::{
  ast::ast,
  ast_visit::{walk, Visit},
};
use oxc_index::IndexVec;

#[derive(Debug, Default)]
pub struct EcmaScanResult {
  /// In source order.
  pub import_records: IndexVec<ImportRecordIdx, RawImportRecord>,
  pub has_module_syntax: bool,
}

/// Collects the dependency references of a module. Only static forms are recognized:
/// `import`/`export ... from` declarations and `require('...')` calls with a single string
/// literal. `import()` is left alone.
#[derive(Default)]
pub struct AstScanner {
  result: EcmaScanResult,
}

impl AstScanner {
  pub fn into_result(self) -> EcmaScanResult {
    self.result
  }

  fn add_import_record(&mut self, source: &ast::StringLiteral, kind: ImportKind) {
    let specifier = ArcStr::from(source.value.as_str());
    self.result.import_records.push(RawImportRecord::new(specifier, kind, source.span));
  }
}

fn as_require_call<'a, 'ast>(expr: &'a ast::CallExpression<'ast>) -> Option<&'a ast::StringLiteral<'ast>> {
  let ast::Expression::Identifier(callee) = &expr.callee else { return None };
  if callee.name.as_str() != "require" || expr.arguments.len() != 1 {
    return None;
  }
  match &expr.arguments[0] {
    ast::Argument::StringLiteral(request) => Some(&**request),
    _ => None,
  }
}

impl<'ast> Visit<'ast> for AstScanner {
  fn visit_import_declaration(&mut self, decl: &ast::ImportDeclaration<'ast>) {
    self.result.has_module_syntax = true;
    self.add_import_record(&decl.source, ImportKind::Import);
  }

  fn visit_export_named_declaration(&mut self, decl: &ast::ExportNamedDeclaration<'ast>) {
    self.result.has_module_syntax = true;
    if let Some(source) = &decl.source {
      self.add_import_record(source, ImportKind::Import);
    }
    walk::walk_export_named_declaration(self, decl);
  }

  fn visit_export_all_declaration(&mut self, decl: &ast::ExportAllDeclaration<'ast>) {
    self.result.has_module_syntax = true;
    self.add_import_record(&decl.source, ImportKind::Import);
  }

  fn visit_export_default_declaration(&mut self, decl: &ast::ExportDefaultDeclaration<'ast>) {
    self.result.has_module_syntax = true;
    walk::walk_export_default_declaration(self, decl);
  }

  fn visit_call_expression(&mut self, expr: &ast::CallExpression<'ast>) {
    if let Some(request) = as_require_call(expr) {
      self.add_import_record(request, ImportKind::Require);
    }
    walk::walk_call_expression(self, expr);
  }
}
