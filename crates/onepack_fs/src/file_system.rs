use std::{io, path::Path};

/// The file system operations a build needs: reading module sources and writing the bundle.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
