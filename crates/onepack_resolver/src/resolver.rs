use std::path::{Path, PathBuf};

use arcstr::ArcStr;
use dashmap::DashMap;
use itertools::Itertools;
use sugar_path::SugarPath;

use oxc_resolver::{ResolveError, ResolveOptions as OxcResolverOptions};

use onepack_common::{ImportKind, Platform};

#[derive(Debug)]
pub struct Resolver {
  cwd: PathBuf,
  platform: Platform,
  import_resolver: oxc_resolver::Resolver,
  require_resolver: oxc_resolver::Resolver,
  resolved_cache: DashMap<(PathBuf, ArcStr, bool), ArcStr>,
}

impl Resolver {
  pub fn new(platform: Platform, cwd: PathBuf) -> Self {
    let mut default_conditions = vec!["default".to_string()];
    let mut import_conditions = vec!["import".to_string()];
    let mut require_conditions = vec!["require".to_string()];

    match platform {
      Platform::Node => {
        default_conditions.push("node".to_string());
      }
      Platform::Browser => {
        default_conditions.push("browser".to_string());
      }
      Platform::Neutral => {}
    }

    import_conditions.extend(default_conditions.clone());
    require_conditions.extend(default_conditions);

    import_conditions = import_conditions.into_iter().unique().collect();
    require_conditions = require_conditions.into_iter().unique().collect();

    let main_fields = match platform {
      Platform::Node => vec!["main".to_string(), "module".to_string()],
      Platform::Browser => vec!["browser".to_string(), "module".to_string(), "main".to_string()],
      Platform::Neutral => vec![],
    };

    let alias_fields = match platform {
      Platform::Browser => vec![vec!["browser".to_string()]],
      Platform::Node | Platform::Neutral => vec![],
    };

    let resolve_options_with_import_conditions = OxcResolverOptions {
      main_fields,
      alias_fields,
      condition_names: import_conditions,
      extensions: vec![".js".to_string(), ".mjs".to_string(), ".cjs".to_string()],
      ..Default::default()
    };

    let resolve_options_with_require_conditions = OxcResolverOptions {
      condition_names: require_conditions,
      ..resolve_options_with_import_conditions.clone()
    };

    let import_resolver = oxc_resolver::Resolver::new(resolve_options_with_import_conditions);
    let require_resolver =
      import_resolver.clone_with_options(resolve_options_with_require_conditions);

    Self { cwd, platform, import_resolver, require_resolver, resolved_cache: DashMap::default() }
  }

  pub fn platform(&self) -> Platform {
    self.platform
  }
}

#[derive(Debug, Clone)]
pub struct ResolveReturn {
  /// Absolute and symlink-free.
  pub path: ArcStr,
}

impl Resolver {
  /// Resolves `specifier` relative to the directory of `importer`, or `cwd` for entries.
  pub fn resolve(
    &self,
    importer: Option<&Path>,
    specifier: &str,
    import_kind: ImportKind,
    is_user_defined_entry: bool,
  ) -> Result<ResolveReturn, ResolveError> {
    let resolver =
      if import_kind.is_require() { &self.require_resolver } else { &self.import_resolver };

    let dir = importer
      .and_then(|importer| importer.parent())
      .filter(|inner| inner.components().next().is_some())
      .unwrap_or(self.cwd.as_path());

    // Entries may take the `<CWD>` fallback below, so only dependencies are cached.
    let cache_key = (!is_user_defined_entry)
      .then(|| (dir.to_path_buf(), ArcStr::from(specifier), import_kind.is_require()));
    if let Some(path) = cache_key.as_ref().and_then(|key| self.resolved_cache.get(key)) {
      return Ok(ResolveReturn { path: path.value().clone() });
    }

    let mut resolution = resolver.resolve(dir, specifier);

    // Handle `{ input: 'main' }` -> `<CWD>/main.{js,mjs,cjs}`
    if resolution.is_err() && is_user_defined_entry {
      let is_specifier_path_like = specifier.starts_with('.') || specifier.starts_with('/');

      if !is_specifier_path_like {
        let normalized_specifier = self.cwd.join(specifier).normalize();
        let result = resolver.resolve(dir, &normalized_specifier.to_string_lossy());
        if result.is_ok() {
          resolution = result;
        }
      }
    }

    resolution.map(|info| {
      let path = ArcStr::from(info.full_path().to_string_lossy().as_ref());
      tracing::debug!(
        specifier,
        kind = %import_kind,
        dir = %dir.display(),
        resolved = %path,
        "resolved"
      );
      if let Some(cache_key) = cache_key {
        self.resolved_cache.insert(cache_key, path.clone());
      }
      ResolveReturn { path }
    })
  }
}

#[cfg(test)]
mod tests {
  use std::{fs, path::Path};

  use onepack_common::{ImportKind, Platform};

  use super::Resolver;

  fn write(root: &Path, path: &str, content: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
  }

  fn canonical(root: &Path, path: &str) -> String {
    fs::canonicalize(root.join(path)).unwrap().to_string_lossy().into_owned()
  }

  #[test]
  fn resolve_relative_with_extension_probing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/main.js", "");
    write(root, "src/show.js", "");
    write(root, "src/lib/index.js", "");

    let resolver = Resolver::new(Platform::Browser, root.to_path_buf());
    let importer = root.join("src/main.js");

    let show = resolver.resolve(Some(&importer), "./show", ImportKind::Require, false).unwrap();
    assert_eq!(show.path.as_str(), canonical(root, "src/show.js"));

    let lib = resolver.resolve(Some(&importer), "./lib", ImportKind::Import, false).unwrap();
    assert_eq!(lib.path.as_str(), canonical(root, "src/lib/index.js"));

    // Same target through a different spelling is the same path.
    let again = resolver.resolve(Some(&importer), "../src/show.js", ImportKind::Import, false).unwrap();
    assert_eq!(again.path, show.path);
  }

  #[test]
  fn resolve_entries_against_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "main.js", "");

    let resolver = Resolver::new(Platform::Browser, root.to_path_buf());
    let entry = resolver.resolve(None, "./main.js", ImportKind::Import, true).unwrap();
    assert_eq!(entry.path.as_str(), canonical(root, "main.js"));

    // Bare entries fall back to `<cwd>/<entry>`.
    let bare = resolver.resolve(None, "main", ImportKind::Import, true).unwrap();
    assert_eq!(bare.path, entry.path);
    assert!(resolver.resolve(None, "main", ImportKind::Import, false).is_err());
  }

  #[test]
  fn resolve_packages_by_platform() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "main.js", "");
    write(
      root,
      "node_modules/pkg/package.json",
      r#"{ "name": "pkg", "main": "./node.js", "browser": "./browser.js" }"#,
    );
    write(root, "node_modules/pkg/node.js", "");
    write(root, "node_modules/pkg/browser.js", "");

    let importer = root.join("main.js");
    let browser = Resolver::new(Platform::Browser, root.to_path_buf());
    let resolved = browser.resolve(Some(&importer), "pkg", ImportKind::Require, false).unwrap();
    assert_eq!(resolved.path.as_str(), canonical(root, "node_modules/pkg/browser.js"));

    let node = Resolver::new(Platform::Node, root.to_path_buf());
    let resolved = node.resolve(Some(&importer), "pkg", ImportKind::Require, false).unwrap();
    assert_eq!(resolved.path.as_str(), canonical(root, "node_modules/pkg/node.js"));
  }

  #[test]
  fn fail_on_missing_module() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = Resolver::new(Platform::Browser, dir.path().to_path_buf());
    assert!(resolver.resolve(None, "./missing.js", ImportKind::Import, true).is_err());
  }
}
