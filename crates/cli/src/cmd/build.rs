//! Implementation of the `bmx build` command.
//!
//! Expands the requested architectures and configurations into build cells
//! and drives the configure/build loop over them, stopping at the first
//! failure.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use buildmx_lib::driver::{self, BuildOptions, DriverError};
use buildmx_lib::matrix::{self, BuildConfig, TargetArch};
use buildmx_lib::platform::Host;

use crate::output::{self, OutputFormat};

/// Execute the build command.
///
/// Empty selections default to the full architecture and configuration
/// sets. Exits with code 1 when any cell's configure or build step fails;
/// later cells are left unattempted.
pub fn cmd_build(arches: &[TargetArch], configurations: &[BuildConfig], run_tests: bool, format: OutputFormat) -> Result<()> {
  let host = Host::current();
  let cells = matrix::expand(arches, configurations);
  let options = BuildOptions::from_env(run_tests);
  info!(cmake = options.cmake_program(), cells = cells.len(), "starting matrix");

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let report = match rt.block_on(driver::run(&host, &cells, &options)) {
    Ok(report) => report,
    Err(DriverError::StepFailed { step, cell, code }) => {
      let code_text = code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string());
      output::print_error(&format!("{} {} step failed (exit code {}), bailing", cell, step, code_text));
      std::process::exit(1);
    }
    Err(err) => return Err(err).context("Build failed"),
  };

  if format.is_json() {
    return output::print_json(&report);
  }

  println!();
  output::print_success("All cells built");
  output::print_stat("Cells", &report.cells.len().to_string());
  for cell in &report.cells {
    println!(
      "  {}/{} {} ({})",
      cell.arch,
      cell.configuration,
      cell.dir_name,
      output::format_duration(Duration::from_millis(cell.duration_ms))
    );
  }

  Ok(())
}
