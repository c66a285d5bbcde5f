use std::path::Path;

use onepack_common::{ImportKind, Platform, ResolvedId};
use onepack_resolver::{is_node_builtin_module, ResolveError, Resolver};

#[inline]
fn is_http_url(s: &str) -> bool {
  s.starts_with("http://") || s.starts_with("https://") || s.starts_with("//")
}

#[inline]
fn is_data_url(s: &str) -> bool {
  s.trim_start().starts_with("data:")
}

pub fn resolve_id(
  resolver: &Resolver,
  request: &str,
  importer: Option<&str>,
  import_kind: ImportKind,
  is_user_defined_entry: bool,
) -> Result<ResolvedId, ResolveError> {
  // Auto external http url or data url
  if is_http_url(request) || is_data_url(request) {
    return Ok(ResolvedId::external(request));
  }

  if matches!(resolver.platform(), Platform::Node) && is_node_builtin_module(request) {
    return Ok(ResolvedId::external(request));
  }

  let resolved =
    resolver.resolve(importer.map(Path::new), request, import_kind, is_user_defined_entry);

  match resolved {
    Ok(resolved) => Ok(ResolvedId { id: resolved.path, ignored: false, is_external: false }),
    Err(ResolveError::Ignored(path)) => Ok(ResolvedId {
      id: path.to_string_lossy().as_ref().into(),
      ignored: true,
      is_external: false,
    }),
    Err(err) => Err(err),
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use onepack_common::{ImportKind, Platform};
  use onepack_resolver::Resolver;

  use super::resolve_id;

  #[test]
  fn externals() {
    let dir = tempfile::tempdir().unwrap();
    let browser = Resolver::new(Platform::Browser, dir.path().to_path_buf());
    let node = Resolver::new(Platform::Node, dir.path().to_path_buf());

    for request in ["https://cdn.example.com/lib.js", "//cdn.example.com/lib.js", "data:text/javascript,1"] {
      let resolved = resolve_id(&browser, request, None, ImportKind::Import, false).unwrap();
      assert!(resolved.is_external);
      assert_eq!(resolved.id.as_str(), request);
    }

    assert!(resolve_id(&node, "fs", None, ImportKind::Require, false).unwrap().is_external);
    assert!(resolve_id(&node, "node:path", None, ImportKind::Require, false).unwrap().is_external);
    assert!(resolve_id(&browser, "fs", None, ImportKind::Require, false).is_err());
  }

  #[test]
  fn browser_field_false_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(
      root.join("node_modules/pkg/package.json"),
      r#"{ "name": "pkg", "main": "./index.js", "browser": { "./server.js": false } }"#,
    )
    .unwrap();
    fs::write(root.join("node_modules/pkg/index.js"), "require('./server.js');").unwrap();
    fs::write(root.join("node_modules/pkg/server.js"), "").unwrap();

    let resolver = Resolver::new(Platform::Browser, root.to_path_buf());
    let importer = fs::canonicalize(root.join("node_modules/pkg/index.js")).unwrap();
    let resolved = resolve_id(
      &resolver,
      "./server.js",
      Some(&importer.to_string_lossy()),
      ImportKind::Require,
      false,
    )
    .unwrap();
    assert!(resolved.ignored);
    assert!(!resolved.is_external);
  }
}
