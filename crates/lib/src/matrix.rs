//! Target architectures, build configurations, and matrix expansion.
//!
//! A build cell is one (architecture, configuration) pair; the driver
//! processes the cartesian product of the requested architectures and
//! configurations, architecture-major, in the order they were requested.

use std::fmt;

use serde::Serialize;

/// Target CPU architecture passed through to the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetArch {
  #[serde(rename = "x64")]
  X64,
  #[serde(rename = "x86")]
  X86,
}

impl TargetArch {
  /// Every supported architecture, in default build order
  pub const ALL: [TargetArch; 2] = [TargetArch::X64, TargetArch::X86];

  /// Returns the identifier used in directory names and as the vcvarsall
  /// argument
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::X86 => "x86",
    }
  }
}

impl fmt::Display for TargetArch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// CMake build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BuildConfig {
  #[serde(rename = "Debug")]
  Debug,
  #[serde(rename = "RelWithDebInfo")]
  RelWithDebInfo,
}

impl BuildConfig {
  /// Every supported configuration, in default build order
  pub const ALL: [BuildConfig; 2] = [BuildConfig::Debug, BuildConfig::RelWithDebInfo];

  /// Returns the identifier used in directory names and as
  /// `CMAKE_BUILD_TYPE`
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::RelWithDebInfo => "RelWithDebInfo",
    }
  }
}

impl fmt::Display for BuildConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// One (architecture, configuration) pair processed as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BuildCell {
  pub arch: TargetArch,
  pub configuration: BuildConfig,
}

impl BuildCell {
  pub fn new(arch: TargetArch, configuration: BuildConfig) -> Self {
    Self { arch, configuration }
  }
}

impl fmt::Display for BuildCell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.arch, self.configuration)
  }
}

/// Expand the requested architectures and configurations into build cells.
///
/// The product is architecture-major: all configurations of the first
/// architecture come before any configuration of the second. Input order is
/// preserved in both dimensions. An empty selection means "all of them".
pub fn expand(arches: &[TargetArch], configurations: &[BuildConfig]) -> Vec<BuildCell> {
  let arches = if arches.is_empty() { &TargetArch::ALL[..] } else { arches };
  let configurations = if configurations.is_empty() {
    &BuildConfig::ALL[..]
  } else {
    configurations
  };

  let mut cells = Vec::with_capacity(arches.len() * configurations.len());
  for arch in arches {
    for configuration in configurations {
      cells.push(BuildCell::new(*arch, *configuration));
    }
  }
  cells
}
