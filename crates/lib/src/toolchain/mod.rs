//! Toolchain environment capture.
//!
//! On the Windows family every cell needs the MSVC environment for its
//! architecture, obtained by sourcing the Visual Studio vcvarsall script and
//! dumping the resulting shell state. Other families build with the driver's
//! own inherited environment.

pub mod envdump;

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::consts::{DEFAULT_VCVARS, ENV_VCVARS};
use crate::matrix::TargetArch;
use crate::platform::{Host, OsFamily};

pub use envdump::parse_env_dump;

/// Location of the vcvarsall script.
///
/// Resolution order: explicit override, `BUILDMX_VCVARS`, then the stock
/// Visual Studio 2019 Community install path.
pub fn vcvars_path(override_path: Option<&PathBuf>) -> PathBuf {
  if let Some(path) = override_path {
    return path.clone();
  }
  std::env::var_os(ENV_VCVARS)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_VCVARS))
}

/// Capture the toolchain environment for one cell.
///
/// Returns `Some(mapping)` on the Windows family and `None` elsewhere;
/// `None` means the subprocesses inherit the driver's environment
/// unmodified.
///
/// A missing or broken script is not treated as an error here: `cmd.exe`
/// still runs the trailing `set`, the dump is parsed as-is, and any real
/// problem surfaces as a configure-step failure. A warning is logged when
/// the script path does not exist so the eventual failure is explainable.
pub async fn capture_env(
  host: &Host,
  arch: TargetArch,
  vcvars_override: Option<&PathBuf>,
) -> io::Result<Option<BTreeMap<String, String>>> {
  if host.family != OsFamily::Windows {
    return Ok(None);
  }

  let script = vcvars_path(vcvars_override);
  if !script.exists() {
    warn!(script = %script.display(), "vcvarsall script not found, environment will be incomplete");
  }

  // `&` chains unconditionally, so `set` dumps whatever state the script
  // left behind.
  let command_line = format!(r#""{}" {} & set"#, script.display(), arch);
  debug!(command = %command_line, "sourcing developer environment");

  let output = Command::new("cmd.exe").args(["/C", &command_line]).output().await?;

  let dump = String::from_utf8_lossy(&output.stdout);
  let vars = parse_env_dump(&dump);
  debug!(count = vars.len(), "captured environment variables");

  Ok(Some(vars))
}
