use std::fmt::Debug;

use arcstr::ArcStr;
use oxc::span::Span;

use crate::{ImportKind, ModuleIdx};

pub type RawImportRecord = ImportRecord<Span>;
pub type ResolvedImportRecord = ImportRecord<ModuleIdx>;

/// A dependency reference of a module. `State` is the span of the specifier before resolution
/// and the target module after it.
#[derive(Debug)]
pub struct ImportRecord<State: Debug> {
  pub state: State,
  /// `./lib.js` in `import { foo } from './lib.js';`
  pub specifier: ArcStr,
  pub kind: ImportKind,
}

impl RawImportRecord {
  pub fn new(specifier: ArcStr, kind: ImportKind, span: Span) -> Self {
    Self { specifier, kind, state: span }
  }

  pub fn into_resolved(self, resolved_module: ModuleIdx) -> ResolvedImportRecord {
    ResolvedImportRecord { state: resolved_module, specifier: self.specifier, kind: self.kind }
  }
}
