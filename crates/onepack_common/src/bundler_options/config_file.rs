use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::{BundlerOptions, InputItem, OutputFormat, Platform};

/// A webpack shaped JSON config file:
///
/// ```json
/// { "entry": ["./main.js", "./show.js"], "output": { "filename": "[hash].js", "path": "./dist" } }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
  pub entry: Option<ConfigEntry>,
  #[serde(default)]
  pub output: ConfigOutput,
  pub name: Option<String>,
  pub format: Option<OutputFormat>,
  pub platform: Option<Platform>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ConfigEntry {
  Single(InputItem),
  Multiple(Vec<InputItem>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOutput {
  pub filename: Option<String>,
  pub path: Option<String>,
  pub pathinfo: Option<bool>,
}

impl ConfigFile {
  pub fn from_json(text: &str) -> anyhow::Result<Self> {
    Ok(serde_json::from_str(text)?)
  }

  /// Reads the config at `path`. Relative entries and output paths are taken relative to the
  /// directory of the config file.
  pub fn load(path: &Path) -> anyhow::Result<BundlerOptions> {
    let text = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Self::from_json(&text)
      .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    let config_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(config.into_bundler_options(&config_dir))
  }

  pub fn into_bundler_options(self, config_dir: &Path) -> BundlerOptions {
    let input = self.entry.map(|entry| match entry {
      ConfigEntry::Single(item) => vec![item],
      ConfigEntry::Multiple(items) => items,
    });

    BundlerOptions {
      input,
      cwd: Some(config_dir.to_path_buf()),
      platform: self.platform,
      name: self.name,
      filename: self.output.filename,
      dir: self.output.path,
      file: None,
      format: self.format,
      pathinfo: self.output.pathinfo,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn parse_webpack_shaped_config() {
    let config = ConfigFile::from_json(
      r#"{
        "entry": ["./main.js", { "name": "show", "import": "./show.js" }],
        "output": { "filename": "[hash].js", "path": "./dist", "pathinfo": true }
      }"#,
    )
    .unwrap();

    let options = config.into_bundler_options(&PathBuf::from("/project"));
    let input = options.input.unwrap();
    assert_eq!(input.len(), 2);
    assert_eq!(input[0].import, "./main.js");
    assert_eq!(input[1].name.as_deref(), Some("show"));
    assert_eq!(options.filename.as_deref(), Some("[hash].js"));
    assert_eq!(options.dir.as_deref(), Some("./dist"));
    assert_eq!(options.pathinfo, Some(true));
    assert_eq!(options.cwd, Some(PathBuf::from("/project")));
  }

  #[test]
  fn parse_single_entry_and_enums() {
    let config = ConfigFile::from_json(
      r#"{ "entry": "./main.js", "format": "concat", "platform": "node" }"#,
    )
    .unwrap();
    assert_eq!(config.format, Some(OutputFormat::Concat));
    assert_eq!(config.platform, Some(Platform::Node));
    assert!(matches!(config.entry, Some(ConfigEntry::Single(ref item)) if item.import == "./main.js"));
  }

  #[test]
  fn reject_unknown_fields() {
    assert!(ConfigFile::from_json(r#"{ "entry": "./main.js", "plugins": [] }"#).is_err());
    assert!(ConfigFile::from_json(r#"{ "output": { "library": "x" } }"#).is_err());
  }

  #[test]
  fn load_relative_to_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("onepack.json");
    std::fs::write(&path, r#"{ "entry": "./main.js" }"#).unwrap();

    let options = ConfigFile::load(&path).unwrap();
    assert_eq!(options.cwd.as_deref(), Some(dir.path()));
    assert!(ConfigFile::load(&dir.path().join("missing.json")).is_err());
  }
}
