//! Implementation of the `bmx plan` command.
//!
//! Dry enumeration of the build matrix: prints each cell and its directory
//! name in the exact order a build would process them, without invoking
//! CMake or touching the filesystem.

use anyhow::Result;
use serde::Serialize;

use buildmx_lib::consts::BUILD_ROOT;
use buildmx_lib::layout;
use buildmx_lib::matrix::{self, BuildConfig, TargetArch};
use buildmx_lib::platform::Host;

use crate::output::{self, OutputFormat, symbols};

#[derive(Serialize)]
struct PlanCell {
  arch: TargetArch,
  configuration: BuildConfig,
  dir_name: String,
}

#[derive(Serialize)]
struct PlanOutput {
  run_tests: bool,
  cells: Vec<PlanCell>,
}

pub fn cmd_plan(arches: &[TargetArch], configurations: &[BuildConfig], run_tests: bool, format: OutputFormat) -> Result<()> {
  let host = Host::current();
  let cells = matrix::expand(arches, configurations);

  let plan = PlanOutput {
    run_tests,
    cells: cells
      .iter()
      .map(|cell| PlanCell {
        arch: cell.arch,
        configuration: cell.configuration,
        dir_name: layout::dir_name(&host, cell),
      })
      .collect(),
  };

  if format.is_json() {
    return output::print_json(&plan);
  }

  println!("Plan: {} cell(s)", plan.cells.len());
  for cell in &plan.cells {
    println!(
      "  {}/{} {} {}/{}",
      cell.arch,
      cell.configuration,
      symbols::ARROW,
      BUILD_ROOT,
      cell.dir_name
    );
  }
  println!("Tests: {}", if run_tests { "ON" } else { "OFF" });

  Ok(())
}
