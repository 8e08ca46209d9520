//! CMake step invocation.
//!
//! Two external calls per cell: a configure step that generates Ninja build
//! files, and a build step that runs them. Both inherit the terminal so
//! CMake and compiler output stream straight through to the user.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tokio::process::Command;
use tracing::{debug, info};

use crate::layout::CellLayout;
use crate::matrix::{BuildCell, TargetArch};
use crate::platform::Host;

use super::types::{BuildOptions, DriverError, Step};

/// Argument list for the configure step of one cell.
///
/// The output-directory overrides point CMake's runtime and library outputs
/// at the cell's absolute output directory; the trailing path walks from the
/// build tree (`build/<cell>`) back up to the project root.
pub(crate) fn configure_args(cell: &BuildCell, layout: &CellLayout, host: &Host, options: &BuildOptions) -> Vec<String> {
  let tests = if options.run_tests { "ON" } else { "OFF" };

  let mut args = vec![
    format!("-DCMAKE_RUNTIME_OUTPUT_DIRECTORY={}", layout.out_dir.display()),
    format!("-DCMAKE_LIBRARY_OUTPUT_DIRECTORY={}", layout.out_dir.display()),
    format!("-DCMAKE_BUILD_TYPE={}", cell.configuration),
    format!("-DBUILD_TESTS={}", tests),
  ];

  if host.is_linux64() && cell.arch == TargetArch::X86 {
    // 32-bit target on a 64-bit Linux host needs explicit codegen flags.
    args.push("-DCMAKE_CXX_FLAGS=-m32".to_string());
    args.push("-DCMAKE_C_FLAGS=-m32".to_string());
  }

  args.push("-GNinja".to_string());
  args.push(source_path());

  args
}

/// Relative path from the cell's build tree back to the project root.
fn source_path() -> String {
  let path: PathBuf = ["..", ".."].iter().collect();
  path.display().to_string()
}

/// Run the configure step for a cell. Non-zero exit aborts the run.
pub(crate) async fn configure(
  cell: &BuildCell,
  layout: &CellLayout,
  host: &Host,
  options: &BuildOptions,
  env: Option<&BTreeMap<String, String>>,
) -> Result<(), DriverError> {
  let args = configure_args(cell, layout, host, options);
  run_step(Step::Configure, cell, layout, options, &args, env).await
}

/// Run the build step for a cell. Non-zero exit aborts the run.
pub(crate) async fn build(
  cell: &BuildCell,
  layout: &CellLayout,
  options: &BuildOptions,
  env: Option<&BTreeMap<String, String>>,
) -> Result<(), DriverError> {
  let args = ["--build".to_string(), ".".to_string()];
  run_step(Step::Build, cell, layout, options, &args, env).await
}

async fn run_step(
  step: Step,
  cell: &BuildCell,
  layout: &CellLayout,
  options: &BuildOptions,
  args: &[String],
  env: Option<&BTreeMap<String, String>>,
) -> Result<(), DriverError> {
  let program = options.cmake_program();
  info!(cell = %cell, step = %step, program, "running step");
  debug!(args = ?args, cwd = %layout.build_dir.display(), "step command line");

  let mut command = Command::new(program);
  command.args(args).current_dir(&layout.build_dir);

  // A captured toolchain environment replaces the inherited one wholesale;
  // without one the child sees the driver's own environment.
  if let Some(env) = env {
    command.env_clear().envs(env);
  }

  let status = command.status().await?;

  if !status.success() {
    return Err(DriverError::StepFailed {
      step,
      cell: *cell,
      code: status.code(),
    });
  }

  Ok(())
}
