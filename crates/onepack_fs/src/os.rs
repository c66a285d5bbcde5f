use std::{io, path::Path};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    std::fs::write(path, content)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }
}

#[test]
fn test_write_then_read() {
  let dir = tempfile::tempdir().unwrap();
  let fs = OsFileSystem;
  let nested = dir.path().join("dist/js");

  fs.create_dir_all(&nested).unwrap();
  fs.write(&nested.join("main.js"), b"console.log(1)").unwrap();

  assert_eq!(fs.read_to_string(&nested.join("main.js")).unwrap(), "console.log(1)");
  assert!(fs.read_to_string(&nested.join("missing.js")).is_err());
}
