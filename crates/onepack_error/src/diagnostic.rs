use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BuildDiagnostic {
  /// A dependency reference could not be located from its importer.
  #[error("Could not resolve '{specifier}' from {location}: {reason}")]
  UnresolvedReference {
    /// Stable id of the importer.
    importer: String,
    specifier: String,
    /// `importer:line:column` of the reference.
    location: String,
    reason: String,
  },

  #[error("Could not resolve entry module '{specifier}': {reason}")]
  MissingEntry { specifier: String, reason: String },

  /// Non-fatal. The cycle was broken at its first discovered module.
  #[error("Circular dependency: {}.", paths.join(" -> "))]
  CircularDependency { paths: Vec<String> },

  #[error("Failed to write '{}': {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to load '{id}': {source}")]
  Load {
    id: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to parse '{id}': {message}")]
  Parse { id: String, message: String },

  /// A module task died without reporting back, so its module is missing from the graph.
  #[error("A module task panicked: {message}")]
  TaskPanicked { message: String },

  #[error("Invalid option: {message}")]
  InvalidOption { message: String },

  /// Non-fatal. Sources are emitted untouched, so `import`/`export` stays in the wrapper.
  #[error(
    "Module '{id}' uses ES module syntax, which the iife format emits untouched. Use the concat format or CommonJS `require`."
  )]
  ModuleSyntaxInIife { id: String },
}

impl BuildDiagnostic {
  pub fn invalid_option(message: impl Into<String>) -> Self {
    Self::InvalidOption { message: message.into() }
  }

  pub fn is_warning(&self) -> bool {
    matches!(self, Self::CircularDependency { .. } | Self::ModuleSyntaxInIife { .. })
  }
}

#[test]
fn test_display() {
  let cycle = BuildDiagnostic::CircularDependency {
    paths: vec!["a.js".to_string(), "b.js".to_string(), "a.js".to_string()],
  };
  assert_eq!(cycle.to_string(), "Circular dependency: a.js -> b.js -> a.js.");
  assert!(cycle.is_warning());

  let unresolved = BuildDiagnostic::UnresolvedReference {
    importer: "src/main.js".to_string(),
    specifier: "./missing".to_string(),
    location: "src/main.js:2:9".to_string(),
    reason: "Cannot find module './missing'".to_string(),
  };
  assert_eq!(
    unresolved.to_string(),
    "Could not resolve './missing' from src/main.js:2:9: Cannot find module './missing'"
  );
  assert!(!unresolved.is_warning());
}
