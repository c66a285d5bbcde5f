use std::sync::LazyLock;

use onepack_error::BuildDiagnostic;
use onepack_utils::xxhash::MAX_BASE64_HASH_LEN;
use regex::{Captures, Regex};

static HASH_PATTERN_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\[hash(?::(\d+))?\]").unwrap());

pub const DEFAULT_HASH_LEN: usize = 8;

/// An output filename such as `[name]-[hash:10].js`.
#[derive(Debug, Clone)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn has_hash_pattern(&self) -> bool {
    HASH_PATTERN_RE.is_match(&self.template)
  }

  pub fn validate(&self) -> Result<(), BuildDiagnostic> {
    if self.template.trim().is_empty() {
      return Err(BuildDiagnostic::invalid_option("`filename` must not be empty"));
    }

    for caps in HASH_PATTERN_RE.captures_iter(&self.template) {
      let Some(len) = caps.get(1) else { continue };
      match len.as_str().parse::<usize>() {
        Ok(len) if (1..=MAX_BASE64_HASH_LEN).contains(&len) => {}
        _ => {
          return Err(BuildDiagnostic::invalid_option(format!(
            "hash length in `{}` of `{}` must be between 1 and {MAX_BASE64_HASH_LEN}",
            &caps[0], self.template
          )));
        }
      }
    }

    Ok(())
  }

  /// `hash_replacer` receives the length of each `[hash:N]` token, `None` for `[hash]`.
  pub fn render(
    &self,
    name: &str,
    hash_replacer: Option<impl FnMut(Option<usize>) -> String>,
  ) -> String {
    let rendered = self.template.replace("[name]", name);
    match hash_replacer {
      Some(mut hash_replacer) => HASH_PATTERN_RE
        .replace_all(&rendered, |caps: &Captures| {
          hash_replacer(caps.get(1).and_then(|len| len.as_str().parse().ok()))
        })
        .into_owned(),
      None => rendered,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn hash_of_len(len: Option<usize>) -> String {
    "x".repeat(len.unwrap_or(DEFAULT_HASH_LEN))
  }

  #[test]
  fn render_name_and_hash() {
    let template = FilenameTemplate::new("[name]-[hash].js".to_string());
    assert!(template.has_hash_pattern());
    assert_eq!(template.render("main", Some(hash_of_len)), "main-xxxxxxxx.js");
  }

  #[test]
  fn render_hash_with_length() {
    let template = FilenameTemplate::new("[hash:3]/[name].[hash:5].js".to_string());
    assert_eq!(template.render("app", Some(hash_of_len)), "xxx/app.xxxxx.js");
  }

  #[test]
  fn render_without_hash() {
    let template = FilenameTemplate::new("[name].js".to_string());
    assert!(!template.has_hash_pattern());
    assert_eq!(template.render("main", None::<fn(Option<usize>) -> String>), "main.js");
  }

  #[test]
  fn validate_hash_length() {
    assert!(FilenameTemplate::new("[hash:22].js".to_string()).validate().is_ok());
    assert!(FilenameTemplate::new("[hash].js".to_string()).validate().is_ok());
    assert!(FilenameTemplate::new("[hash:0].js".to_string()).validate().is_err());
    assert!(FilenameTemplate::new("[hash:23].js".to_string()).validate().is_err());
    assert!(FilenameTemplate::new(" ".to_string()).validate().is_err());
  }
}
