use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Platform {
  Node,
  Browser,
  Neutral,
}

impl From<Platform> for onepack::Platform {
  fn from(value: Platform) -> Self {
    match value {
      Platform::Node => onepack::Platform::Node,
      Platform::Browser => onepack::Platform::Browser,
      Platform::Neutral => onepack::Platform::Neutral,
    }
  }
}
