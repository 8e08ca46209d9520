use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use buildmx_lib::matrix::{BuildConfig, TargetArch};

use crate::output::OutputFormat;

mod cmd;
mod output;

/// bmx - CMake/Ninja build-matrix driver
#[derive(Parser)]
#[command(name = "bmx")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Configure and build every requested cell
  Build {
    /// Compile the project's test suites as well
    #[arg(long)]
    run_tests: bool,

    /// Build configuration to include (repeatable; default: all)
    #[arg(long = "configuration", value_enum)]
    configurations: Vec<ConfigArg>,

    /// Target architecture to include (repeatable; default: all)
    #[arg(long = "arch", value_enum)]
    arches: Vec<ArchArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Show the cells a build would process, without running CMake
  Plan {
    /// Compile the project's test suites as well
    #[arg(long)]
    run_tests: bool,

    /// Build configuration to include (repeatable; default: all)
    #[arg(long = "configuration", value_enum)]
    configurations: Vec<ConfigArg>,

    /// Target architecture to include (repeatable; default: all)
    #[arg(long = "arch", value_enum)]
    arches: Vec<ArchArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Show host platform and tool information
  Info,
}

/// Target architecture as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArchArg {
  #[value(name = "x64")]
  X64,
  #[value(name = "x86")]
  X86,
}

impl From<ArchArg> for TargetArch {
  fn from(arg: ArchArg) -> Self {
    match arg {
      ArchArg::X64 => TargetArch::X64,
      ArchArg::X86 => TargetArch::X86,
    }
  }
}

/// Build configuration as accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigArg {
  #[value(name = "Debug")]
  Debug,
  #[value(name = "RelWithDebInfo")]
  RelWithDebInfo,
}

impl From<ConfigArg> for BuildConfig {
  fn from(arg: ConfigArg) -> Self {
    match arg {
      ConfigArg::Debug => BuildConfig::Debug,
      ConfigArg::RelWithDebInfo => BuildConfig::RelWithDebInfo,
    }
  }
}

fn arches(args: &[ArchArg]) -> Vec<TargetArch> {
  args.iter().map(|a| TargetArch::from(*a)).collect()
}

fn configurations(args: &[ConfigArg]) -> Vec<BuildConfig> {
  args.iter().map(|c| BuildConfig::from(*c)).collect()
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  match cli.command {
    Commands::Build {
      run_tests,
      configurations: configs,
      arches: archs,
      format,
    } => cmd::cmd_build(&arches(&archs), &configurations(&configs), run_tests, format),
    Commands::Plan {
      run_tests,
      configurations: configs,
      arches: archs,
      format,
    } => cmd::cmd_plan(&arches(&archs), &configurations(&configs), run_tests, format),
    Commands::Info => cmd::cmd_info(),
  }
}
