use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  /// Node builtins are external, `node` export condition.
  Node,
  /// `browser` field and export condition.
  #[default]
  Browser,
  Neutral,
}
