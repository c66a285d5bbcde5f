use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
  Iife,
  Concat,
}

impl From<OutputFormat> for onepack::OutputFormat {
  fn from(value: OutputFormat) -> Self {
    match value {
      OutputFormat::Iife => onepack::OutputFormat::Iife,
      OutputFormat::Concat => onepack::OutputFormat::Concat,
    }
  }
}
