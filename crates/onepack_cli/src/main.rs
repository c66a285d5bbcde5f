mod args;
mod types;

use std::{process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use onepack::{Bundler, BundlerOptions, ConfigFile, InputItem, OutputAsset};

#[derive(Parser)]
#[command(name = "onepack", version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

impl Commands {
  fn into_bundler_options(self) -> anyhow::Result<BundlerOptions> {
    let mut options = match &self.input.config {
      Some(path) => ConfigFile::load(path)?,
      None => BundlerOptions::default(),
    };

    if !self.input.input.is_empty() {
      options.input = Some(self.input.input.into_iter().map(InputItem::from).collect());
    }
    if self.input.cwd.is_some() {
      options.cwd = self.input.cwd;
    }
    if let Some(platform) = self.input.platform {
      options.platform = Some(platform.into());
    }

    let OutputArgs { dir, file, filename, name, format, pathinfo } = self.output;
    options.dir = dir.or(options.dir);
    options.file = file.or(options.file);
    options.filename = filename.or(options.filename);
    options.name = name.or(options.name);
    options.format = format.map(Into::into).or(options.format);
    if pathinfo {
      options.pathinfo = Some(true);
    }

    Ok(options)
  }
}

fn init_tracing(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_output_assets(dir: &str, outputs: Vec<OutputAsset>) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.content.len() as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if output.filename.len() > left {
      left = output.filename.len()
    }

    assets.push((output.filename, size));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size) in assets {
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{:right$}{} kB",
      dim.paint(format!("{}/", if dir.is_empty() { "." } else { dir })),
      color.paint(filename),
      "",
      dim.paint("bundle │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    )
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  let args = Commands::parse();
  init_tracing(args.enhance.verbose);
  let silent = args.enhance.silent;

  let options = match args.into_bundler_options() {
    Ok(options) => options,
    Err(err) => {
      eprintln!("{} {:#}", Colour::Red.paint("Error:"), err);
      return ExitCode::FAILURE;
    }
  };

  let start = Instant::now();
  let result = match Bundler::new(options) {
    Ok(mut bundler) => bundler.write().await.map(|output| (bundler.options().dir.clone(), output)),
    Err(errors) => Err(errors),
  };

  match result {
    Ok((dir, output)) => {
      if !silent {
        // Print warnings
        for warning in output.warnings {
          eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }

        // Print output assets
        if !output.assets.is_empty() {
          print_output_assets(&dir, output.assets);
        }

        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
