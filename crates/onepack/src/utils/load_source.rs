use std::path::Path;

use onepack_common::ResolvedId;
use onepack_fs::FileSystem;

pub fn load_source(fs: &dyn FileSystem, resolved_id: &ResolvedId) -> std::io::Result<String> {
  if resolved_id.ignored {
    Ok(String::new())
  } else {
    fs.read_to_string(Path::new(resolved_id.id.as_str()))
  }
}
