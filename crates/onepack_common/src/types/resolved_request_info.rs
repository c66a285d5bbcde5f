use arcstr::ArcStr;

#[derive(Debug, Clone)]
pub struct ResolvedId {
  pub id: ArcStr,
  /// Mapped to `false` by a package `browser` field. Loaded as an empty module.
  pub ignored: bool,
  pub is_external: bool,
}

impl ResolvedId {
  pub fn external(id: impl Into<ArcStr>) -> Self {
    Self { id: id.into(), ignored: false, is_external: true }
  }
}
