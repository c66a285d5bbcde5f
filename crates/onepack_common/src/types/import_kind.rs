use std::fmt::Display;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImportKind {
  /// `import foo from 'foo'`, `import 'foo'`, `export { foo } from 'foo'`, `export * from 'foo'`
  Import,
  /// `require('foo')`
  Require,
}

impl ImportKind {
  pub fn is_require(&self) -> bool {
    matches!(self, Self::Require)
  }
}

impl Display for ImportKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // https://github.com/evanw/esbuild/blob/d34e79e2a998c21bb71d57b92b0017ca11756912/internal/ast/ast.go#L42
    match self {
      Self::Import => write!(f, "import-statement"),
      Self::Require => write!(f, "require-call"),
    }
  }
}
