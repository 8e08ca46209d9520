//! Per-cell directory naming and creation.
//!
//! Each build cell owns two directories under the project root: an
//! intermediate build tree under `build/` and a binary output directory
//! under `bin/`. The name encodes OS-family prefix, architecture, and
//! configuration, so no two cells ever share a directory. Directories are
//! created lazily and never cleaned up.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{BUILD_ROOT, OUTPUT_ROOT};
use crate::matrix::BuildCell;
use crate::platform::Host;

/// Directory name for a cell, e.g. `linx64-Debug` or `winx86-RelWithDebInfo`.
pub fn dir_name(host: &Host, cell: &BuildCell) -> String {
  format!("{}{}-{}", host.family.prefix(), cell.arch, cell.configuration)
}

/// Resolved directories for one build cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLayout {
  /// Intermediate build tree; CMake runs with this as its working directory.
  pub build_dir: PathBuf,

  /// Binary output directory, absolute.
  ///
  /// Ninja resolves the output-directory variables relative to the build
  /// tree, so a relative path here would end up as `build/<cell>/bin`.
  pub out_dir: PathBuf,
}

impl CellLayout {
  /// Compute the cell's directories under `root` and create them if absent.
  pub fn prepare(root: &Path, host: &Host, cell: &BuildCell) -> io::Result<Self> {
    let name = dir_name(host, cell);

    let build_dir = root.join(BUILD_ROOT).join(&name);
    if !build_dir.is_dir() {
      fs::create_dir_all(&build_dir)?;
    }

    let out_dir = root.join(OUTPUT_ROOT).join(&name);
    if !out_dir.is_dir() {
      fs::create_dir_all(&out_dir)?;
    }
    let out_dir = dunce::canonicalize(&out_dir)?;

    debug!(build_dir = %build_dir.display(), out_dir = %out_dir.display(), "prepared cell directories");

    Ok(Self { build_dir, out_dir })
  }
}
