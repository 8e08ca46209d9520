//! Types for matrix execution.
//!
//! This module defines the error type, options, and report types for
//! running the configure/build loop over a set of build cells.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::consts::{DEFAULT_CMAKE, ENV_CMAKE, ENV_VCVARS};
use crate::matrix::{BuildCell, BuildConfig, TargetArch};

/// Which external step a cell was executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  /// Generates the Ninja build files for a cell.
  Configure,
  /// Compiles and links using previously generated build files.
  Build,
}

impl fmt::Display for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Step::Configure => write!(f, "configure"),
      Step::Build => write!(f, "build"),
    }
  }
}

/// Errors that can occur while driving the matrix.
#[derive(Debug, Error)]
pub enum DriverError {
  /// An external step returned a non-zero exit code. This aborts the whole
  /// run; later cells are never attempted.
  #[error("{step} step failed for {cell} (exit code {code:?})")]
  StepFailed {
    step: Step,
    cell: BuildCell,
    code: Option<i32>,
  },

  /// I/O error while preparing directories, capturing the toolchain
  /// environment, or spawning a step.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Options for a matrix run.
#[derive(Debug, Clone)]
pub struct BuildOptions {
  /// Compile the project's test suites (`-DBUILD_TESTS=ON`).
  pub run_tests: bool,

  /// Project root; `build/` and `bin/` live directly below it and the CMake
  /// source path is resolved relative to it.
  pub root: PathBuf,

  /// CMake executable override. `None` resolves `cmake` from `PATH`.
  pub cmake: Option<String>,

  /// vcvarsall script override for the Windows family.
  pub vcvars: Option<PathBuf>,
}

impl BuildOptions {
  /// Build options from CLI flags plus `BUILDMX_*` environment overrides.
  pub fn from_env(run_tests: bool) -> Self {
    Self {
      run_tests,
      root: PathBuf::from("."),
      cmake: std::env::var(ENV_CMAKE).ok(),
      vcvars: std::env::var_os(ENV_VCVARS).map(PathBuf::from),
    }
  }

  /// The CMake executable this run will invoke.
  pub fn cmake_program(&self) -> &str {
    self.cmake.as_deref().unwrap_or(DEFAULT_CMAKE)
  }
}

impl Default for BuildOptions {
  fn default() -> Self {
    Self {
      run_tests: false,
      root: PathBuf::from("."),
      cmake: None,
      vcvars: None,
    }
  }
}

/// Outcome of one successfully built cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
  pub arch: TargetArch,
  pub configuration: BuildConfig,

  /// Directory name shared by the cell's build and output trees.
  pub dir_name: String,

  /// Wall-clock time for configure plus build.
  pub duration_ms: u64,
}

/// Result of a full matrix run. Only produced when every cell succeeded;
/// a failure aborts the run with a [`DriverError`] instead.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
  pub cells: Vec<CellReport>,
}
