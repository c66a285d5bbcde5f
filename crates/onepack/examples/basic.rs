use std::path::PathBuf;

use sugar_path::SugarPath;

use onepack::{Bundler, BundlerOptions};

#[tokio::main]
async fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let mut bundler = Bundler::new(BundlerOptions {
    input: Some(vec!["./main.js".into()]),
    cwd: Some(root.normalize()),
    filename: Some("[hash].js".to_string()),
    pathinfo: Some(true),
    ..Default::default()
  })
  .expect("valid options");

  if let Err(errors) = bundler.write().await {
    for error in &*errors {
      eprintln!("{error}");
    }
  }
}
