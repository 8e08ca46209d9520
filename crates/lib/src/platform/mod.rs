pub mod family;

use std::fmt;

pub use family::OsFamily;

/// Native pointer width of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerWidth {
  Bits32,
  Bits64,
}

impl PointerWidth {
  /// Detect the pointer width of the running process
  pub fn current() -> Self {
    if cfg!(target_pointer_width = "64") {
      Self::Bits64
    } else {
      Self::Bits32
    }
  }

  /// Returns the width in bits
  pub fn bits(&self) -> u32 {
    match self {
      Self::Bits32 => 32,
      Self::Bits64 => 64,
    }
  }
}

/// Host descriptor: everything the driver needs to know about the machine
/// it is running on, computed once at process start and threaded explicitly
/// through directory naming, flag selection, and environment capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Host {
  pub family: OsFamily,
  pub pointer_width: PointerWidth,
}

impl Host {
  /// Create a host descriptor from explicit parts
  pub fn new(family: OsFamily, pointer_width: PointerWidth) -> Self {
    Self { family, pointer_width }
  }

  /// Detect the current host at runtime
  pub fn current() -> Self {
    Self {
      family: OsFamily::current(),
      pointer_width: PointerWidth::current(),
    }
  }

  /// True on a 64-bit Linux-family host, where building the 32-bit target
  /// needs explicit `-m32` compiler flags
  pub fn is_linux64(&self) -> bool {
    self.family == OsFamily::Linux && self.pointer_width == PointerWidth::Bits64
  }
}

impl fmt::Display for Host {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.family.prefix(), self.pointer_width.bits())
  }
}
