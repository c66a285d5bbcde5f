use std::path::Path;

use onepack_common::DEFAULT_HASH_LEN;
use onepack_utils::xxhash::content_hash;

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Should generate filenames that are stable cross builds and os: the hash is taken over
  /// the rendered content only.
  pub(super) fn generate_filename(&self, content: &str) -> String {
    if let Some(file) = &self.options.file {
      return Path::new(file)
        .file_name()
        .map_or_else(|| file.clone(), |name| name.to_string_lossy().into_owned());
    }

    let template = &self.options.filename;
    let hash_replacer = template.has_hash_pattern().then(|| {
      let hash = content_hash(content.as_bytes());
      move |len: Option<usize>| {
        let len = len.unwrap_or(DEFAULT_HASH_LEN).min(hash.len());
        hash[..len].to_string()
      }
    });

    template.render(&self.options.name, hash_replacer)
  }
}
