use std::fmt;

/// Operating-system family as far as the build layout is concerned.
///
/// Anything that is not Windows is treated as the Linux family; the
/// distinction only drives directory naming, toolchain-environment capture,
/// and the 32-bit cross-compilation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
  Windows,
  Linux,
}

impl OsFamily {
  /// Detect the family of the current operating system at runtime
  pub fn current() -> Self {
    match std::env::consts::OS {
      "windows" => Self::Windows,
      _ => Self::Linux,
    }
  }

  /// Returns the short prefix used in build directory names
  pub fn prefix(&self) -> &'static str {
    match self {
      Self::Windows => "win",
      Self::Linux => "lin",
    }
  }
}

impl fmt::Display for OsFamily {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.prefix())
  }
}
