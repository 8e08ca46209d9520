//! Implementation of the `bmx info` command.

use anyhow::Result;

use buildmx_lib::consts::APP_NAME;
use buildmx_lib::driver::BuildOptions;
use buildmx_lib::platform::{Host, OsFamily};
use buildmx_lib::toolchain;

use crate::output;

pub fn cmd_info() -> Result<()> {
  let host = Host::current();
  let options = BuildOptions::from_env(false);

  println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
  println!();
  output::print_stat("Host", &host.to_string());
  output::print_stat("Family", host.family.prefix());
  output::print_stat("Pointer width", &host.pointer_width.bits().to_string());
  output::print_stat("CMake", options.cmake_program());
  if host.family == OsFamily::Windows {
    let vcvars = toolchain::vcvars_path(options.vcvars.as_ref());
    output::print_stat("vcvarsall", &vcvars.display().to_string());
  }

  Ok(())
}
