//! Application-wide constants.

/// Application name, used for user-facing messages.
pub const APP_NAME: &str = "buildmx";

/// Root directory for per-cell intermediate build trees, relative to the
/// project root.
pub const BUILD_ROOT: &str = "build";

/// Root directory for per-cell binary outputs, relative to the project root.
pub const OUTPUT_ROOT: &str = "bin";

/// CMake executable resolved from `PATH` when no override is given.
pub const DEFAULT_CMAKE: &str = "cmake";

/// Environment variable overriding the CMake executable to invoke.
pub const ENV_CMAKE: &str = "BUILDMX_CMAKE";

/// Environment variable overriding the vcvarsall script location.
pub const ENV_VCVARS: &str = "BUILDMX_VCVARS";

/// Default location of the Visual Studio developer-environment script.
pub const DEFAULT_VCVARS: &str =
  r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Community\VC\Auxiliary\Build\vcvarsall.bat";
