use std::fmt::Display;

use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// A self-executing module registry with a CommonJS style `require`.
  #[default]
  Iife,
  /// Module sources joined in execution order.
  Concat,
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Iife => write!(f, "iife"),
      Self::Concat => write!(f, "concat"),
    }
  }
}
