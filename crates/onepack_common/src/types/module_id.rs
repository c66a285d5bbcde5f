use std::{fmt::Display, path::Path};

use arcstr::ArcStr;
use sugar_path::SugarPath;

/// `ModuleId` is the unique string identifier for each module.
/// - For modules on disk it is the resolved, symlink-free absolute path, so two references to
///   the same file always end up as the same module.
/// - For external modules it is the specifier as written.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  pub fn as_path(&self) -> &Path {
    Path::new(self.0.as_str())
  }

  /// The id relative to `cwd` with `/` separators, identical across machines and os.
  pub fn stabilize(&self, cwd: &Path) -> String {
    if self.as_path().is_absolute() {
      self.as_path().relative(cwd).to_slash_lossy().into_owned()
    } else {
      self.to_string()
    }
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::ModuleId;

  #[test]
  fn stabilize_relative_to_cwd() {
    let cwd = PathBuf::from("/project");
    let id = ModuleId::new(cwd.join("src").join("main.js").to_string_lossy().into_owned());
    assert_eq!(id.stabilize(&cwd), "src/main.js");

    let outside = ModuleId::new("/shared/lib.js");
    assert_eq!(outside.stabilize(&cwd), "../shared/lib.js");
  }

  #[test]
  fn stabilize_keeps_non_path_ids() {
    let cwd = PathBuf::from("/project");
    assert_eq!(ModuleId::new("https://cdn.example.com/lib.js").stabilize(&cwd), "https://cdn.example.com/lib.js");
    assert_eq!(ModuleId::new("fs").stabilize(&cwd), "fs");
  }
}
