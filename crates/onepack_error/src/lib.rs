mod diagnostic;

use std::ops::{Deref, DerefMut};

pub use crate::diagnostic::BuildDiagnostic;

/// All errors that made a build fail. A build keeps going after the first failing module so
/// every broken reference is reported at once.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// The typed diagnostics carried by this error, skipping plain `anyhow` errors.
  pub fn diagnostics(&self) -> impl Iterator<Item = &BuildDiagnostic> {
    self.0.iter().filter_map(|error| error.downcast_ref::<BuildDiagnostic>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<BuildDiagnostic> for BuildError {
  fn from(diagnostic: BuildDiagnostic) -> Self {
    Self(vec![diagnostic.into()])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_diagnostics_skip_untyped_errors() {
  let error = BuildError::from(vec![
    anyhow::anyhow!("untyped"),
    BuildDiagnostic::MissingEntry { specifier: "./main.js".to_string(), reason: "NotFound".into() }
      .into(),
  ]);

  assert_eq!(error.len(), 2);
  assert_eq!(error.diagnostics().count(), 1);
  assert!(!error.diagnostics().any(BuildDiagnostic::is_warning));
}
