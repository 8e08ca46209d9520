//! Matrix execution.
//!
//! This module drives the full run:
//!
//! 1. For each cell, in order:
//!    a. Capture the toolchain environment (Windows family only)
//!    b. Prepare the cell's build and output directories
//!    c. Run the configure step
//!    d. Run the build step
//! 2. Stop at the first failing step; later cells are never attempted.
//!
//! Cells run strictly one at a time; each step is awaited to completion
//! before the next begins.

mod cmake;
mod types;

use std::time::Instant;

use tracing::info;

use crate::layout::{self, CellLayout};
use crate::matrix::BuildCell;
use crate::platform::Host;
use crate::toolchain;

pub use types::{BuildOptions, CellReport, DriverError, RunReport, Step};

/// Run the configure/build loop over `cells`, failing fast.
///
/// Returns a report covering every cell when all of them succeed. The first
/// non-zero step exit aborts the run with [`DriverError::StepFailed`].
pub async fn run(host: &Host, cells: &[BuildCell], options: &BuildOptions) -> Result<RunReport, DriverError> {
  let mut report = RunReport::default();

  for cell in cells {
    let started = Instant::now();
    info!(cell = %cell, "building cell");

    let env = toolchain::capture_env(host, cell.arch, options.vcvars.as_ref()).await?;
    let layout = CellLayout::prepare(&options.root, host, cell)?;

    cmake::configure(cell, &layout, host, options, env.as_ref()).await?;
    cmake::build(cell, &layout, options, env.as_ref()).await?;

    report.cells.push(CellReport {
      arch: cell.arch,
      configuration: cell.configuration,
      dir_name: layout::dir_name(host, cell),
      duration_ms: started.elapsed().as_millis() as u64,
    });
  }

  Ok(report)
}
