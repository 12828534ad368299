use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use buildhelper_lib::consts::DEFAULT_CONFIG_FILE;

mod cmd;
mod output;

/// buildhelper - incremental builds for small C++ projects
#[derive(Parser)]
#[command(name = "buildhelper")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Show the configuration before running and enable debug logs
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to the configuration file
  #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
  config: PathBuf,

  /// Configuration file to build, overriding --config
  #[arg(value_name = "CONFIG_FILE")]
  config_file: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

/// Configuration file given after a command name.
#[derive(Args, Default)]
struct ConfigFileArg {
  /// Configuration file, overriding --config
  #[arg(value_name = "CONFIG_FILE")]
  config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
  /// Create a default configuration file and BUILD_GUIDE.md
  Init(ConfigFileArg),

  /// Compile changed sources and link (default)
  Build(ConfigFileArg),

  /// Remove the build directory
  Clean(ConfigFileArg),

  /// Clean, then build
  Rebuild(ConfigFileArg),
}

impl Commands {
  fn config_file(&self) -> Option<&Path> {
    match self {
      Self::Init(arg) | Self::Build(arg) | Self::Clean(arg) | Self::Rebuild(arg) => arg.config_file.as_deref(),
    }
  }
}

impl Cli {
  /// A positional path after the command wins over one before it, and
  /// either wins over `--config`.
  fn config_path(&self, command: &Commands) -> PathBuf {
    command
      .config_file()
      .or(self.config_file.as_deref())
      .unwrap_or(&self.config)
      .to_path_buf()
  }
}

fn main() -> ExitCode {
  let mut cli = Cli::parse();
  init_tracing(cli.verbose);

  let command = cli
    .command
    .take()
    .unwrap_or_else(|| Commands::Build(ConfigFileArg::default()));
  let config = cli.config_path(&command);

  let result = match command {
    Commands::Init(_) => cmd::cmd_init(&config),
    Commands::Build(_) => cmd::cmd_build(&config, cli.verbose),
    Commands::Clean(_) => cmd::cmd_clean(&config, cli.verbose),
    Commands::Rebuild(_) => cmd::cmd_rebuild(&config, cli.verbose),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      output::print_error(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}

/// Log to stderr without timestamps. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false)
    .without_time()
    .init();
}
