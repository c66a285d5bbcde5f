use std::path::Path;

use onepack_common::{BundlerOptions, FilenameTemplate, NormalizedBundlerOptions};
use onepack_error::BuildResult;
use onepack_utils::sanitize_file_name::sanitize_file_name;
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: BundlerOptions) -> BuildResult<NormalizedBundlerOptions> {
  let cwd = match raw_options.cwd {
    Some(cwd) => cwd.absolutize(),
    None => std::env::current_dir()
      .map_err(|err| anyhow::anyhow!("Failed to get current dir: {err}"))?,
  };

  let dir = raw_options.file.as_ref().map_or(
    raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    |file| {
      Path::new(file.as_str())
        .parent()
        .map(|parent| parent.to_string_lossy().to_string())
        .unwrap_or_default()
    },
  );

  let filename = FilenameTemplate::new(raw_options.filename.unwrap_or_else(|| "[name].js".to_string()));
  filename.validate()?;

  let input = raw_options.input.unwrap_or_default();

  let name = raw_options
    .name
    .as_deref()
    .or_else(|| input.iter().find_map(|item| item.name.as_deref()))
    .unwrap_or("main");
  let name = sanitize_file_name(name);

  Ok(NormalizedBundlerOptions {
    input,
    cwd,
    platform: raw_options.platform.unwrap_or_default(),
    name,
    filename,
    dir,
    file: raw_options.file,
    format: raw_options.format.unwrap_or_default(),
    pathinfo: raw_options.pathinfo.unwrap_or(false),
  })
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use onepack_common::{BundlerOptions, InputItem, OutputFormat, Platform};
  use onepack_error::BuildDiagnostic;

  use super::normalize_options;

  #[test]
  fn defaults() {
    let options = normalize_options(BundlerOptions {
      cwd: Some(PathBuf::from("/project")),
      ..Default::default()
    })
    .unwrap();

    assert_eq!(options.name, "main");
    assert_eq!(options.filename.template(), "[name].js");
    assert_eq!(options.dir, "dist");
    assert_eq!(options.out_dir(), PathBuf::from("/project/dist"));
    assert_eq!(options.format, OutputFormat::Iife);
    assert_eq!(options.platform, Platform::Browser);
    assert!(!options.pathinfo);
  }

  #[test]
  fn file_overrides_dir() {
    let options = normalize_options(BundlerOptions {
      cwd: Some(PathBuf::from("/project")),
      dir: Some("ignored".to_string()),
      file: Some("out/bundle.js".to_string()),
      ..Default::default()
    })
    .unwrap();
    assert_eq!(options.dir, "out");
  }

  #[test]
  fn sanitize_name() {
    let options = normalize_options(BundlerOptions {
      cwd: Some(PathBuf::from("/project")),
      name: Some("my app".to_string()),
      ..Default::default()
    })
    .unwrap();
    assert_eq!(options.name, "my_app");
  }

  #[test]
  fn name_from_named_entry() {
    let input = vec![
      InputItem::from("./polyfill.js"),
      InputItem { name: Some("app".to_string()), import: "./main.js".to_string() },
      InputItem { name: Some("other".to_string()), import: "./other.js".to_string() },
    ];

    let options = normalize_options(BundlerOptions {
      cwd: Some(PathBuf::from("/project")),
      input: Some(input.clone()),
      ..Default::default()
    })
    .unwrap();
    assert_eq!(options.name, "app");

    let options = normalize_options(BundlerOptions {
      cwd: Some(PathBuf::from("/project")),
      input: Some(input),
      name: Some("explicit".to_string()),
      ..Default::default()
    })
    .unwrap();
    assert_eq!(options.name, "explicit");
  }

  #[test]
  fn reject_invalid_hash_length() {
    let err = normalize_options(BundlerOptions {
      cwd: Some(PathBuf::from("/project")),
      filename: Some("[hash:40].js".to_string()),
      ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err.diagnostics().next(), Some(BuildDiagnostic::InvalidOption { .. })));
  }
}
