use std::borrow::Cow;

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(from = "RawInputItem")]
pub struct InputItem {
  /// Names the bundle when the `name` option is not set. The first named entry wins.
  pub name: Option<String>,
  pub import: String,
}

/// `"./main.js"` or `{ "name": "main", "import": "./main.js" }`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawInputItem {
  Import(String),
  Named { name: Option<String>, import: String },
}

impl From<RawInputItem> for InputItem {
  fn from(value: RawInputItem) -> Self {
    match value {
      RawInputItem::Import(import) => Self { name: None, import },
      RawInputItem::Named { name, import } => Self { name, import },
    }
  }
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { name: None, import: value.to_string() }
  }
}

impl From<String> for InputItem {
  fn from(value: String) -> Self {
    Self { name: None, import: value }
  }
}

impl From<Cow<'_, str>> for InputItem {
  fn from(value: Cow<'_, str>) -> Self {
    Self { name: None, import: value.into_owned() }
  }
}
