//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory acting as the project root,
/// so the `build/` and `bin/` trees the driver creates never collide.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Path of the invocation log written by stub executables.
  pub fn log_path(&self) -> PathBuf {
    self.temp.path().join("invocations.log")
  }

  /// Lines of the invocation log, one per stub call.
  pub fn invocations(&self) -> Vec<String> {
    let log = self.log_path();
    if !log.exists() {
      return Vec::new();
    }
    std::fs::read_to_string(log)
      .unwrap()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Get a Command for the bmx binary rooted in this environment.
  pub fn bmx_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("bmx");
    cmd.current_dir(self.temp.path());
    cmd
  }

  /// Write an executable stub standing in for cmake and return its path.
  ///
  /// Every invocation appends its arguments to the invocation log; `body`
  /// decides the exit code.
  #[cfg(unix)]
  pub fn write_stub(&self, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.temp.path().join("cmake-stub");
    let script = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n{}\n", self.log_path().display(), body);
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Get a bmx Command wired to a stub cmake with the given body.
  #[cfg(unix)]
  pub fn bmx_with_stub(&self, body: &str) -> Command {
    let stub = self.write_stub(body);
    let mut cmd = self.bmx_cmd();
    cmd.env(buildmx_lib::consts::ENV_CMAKE, stub);
    cmd
  }
}
