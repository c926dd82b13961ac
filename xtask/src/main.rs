//! A task runner using the [xtask spec][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{anyhow, bail, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, pushd};

enum Task {
  Ci,
  Test,
}

impl std::str::FromStr for Task {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "ci" => Ok(Self::Ci),
      "test" => Ok(Self::Test),
      _ => Err(anyhow!("unknown task: {s}")),
    }
  }
}

fn show_help() {
  print!("{}", include_str!("help.txt"));
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let Some(task) = args.subcommand()? else {
    show_help();
    return Ok(());
  };
  let task: Task = task.parse()?;
  let rest = args.finish();
  if !rest.is_empty() {
    bail!("unused arguments: {rest:?}");
  }
  let root =
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().ok_or_else(|| anyhow!("no workspace root"))?;
  let _d = pushd(root)?;
  match task {
    Task::Ci => {
      cmd!("cargo test -p gotify --no-run").run()?;
      cmd!("cargo fmt -- --check").run()?;
      cmd!("cargo clippy -p gotify").run()?;
      cmd!("cargo test -p gotify").run()?;
    }
    Task::Test => cmd!("cargo test -p gotify").run()?,
  }
  Ok(())
}

fn main() {
  if let Err(e) = run() {
    eprintln!("{e}");
    std::process::exit(1);
  }
}
