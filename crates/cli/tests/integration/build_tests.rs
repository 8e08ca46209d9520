//! Integration tests for `bmx build`, using a stub cmake executable.
//!
//! The stub records every invocation to a log file, which lets these tests
//! assert how many steps actually ran and with which arguments.

use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn full_matrix_build_succeeds() {
  let env = TestEnv::new();

  env
    .bmx_with_stub("exit 0")
    .arg("build")
    .assert()
    .success()
    .stdout(predicate::str::contains("All cells built"))
    .stdout(predicate::str::contains("Cells: 4"));

  // Two steps per cell, four cells.
  assert_eq!(env.invocations().len(), 8);

  // Both directory trees exist for the first and last cell.
  assert!(env.temp.path().join("build/linx64-Debug").is_dir());
  assert!(env.temp.path().join("bin/linx86-RelWithDebInfo").is_dir());
}

#[test]
fn success_message_is_emitted_exactly_once() {
  let env = TestEnv::new();

  let output = env.bmx_with_stub("exit 0").arg("build").output().unwrap();
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert_eq!(stdout.matches("All cells built").count(), 1);
}

#[test]
fn configure_failure_exits_one_and_stops() {
  let env = TestEnv::new();

  env
    .bmx_with_stub("exit 1")
    .arg("build")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("x64/Debug configure step failed"));

  // Only the first cell's configure ran; its build step and every later
  // cell were skipped.
  assert_eq!(env.invocations().len(), 1);
}

#[test]
fn build_step_failure_exits_one_and_stops() {
  let env = TestEnv::new();

  env
    .bmx_with_stub("case \"$1\" in --build) exit 1 ;; esac\nexit 0")
    .arg("build")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("x64/Debug build step failed"));

  assert_eq!(env.invocations().len(), 2);
}

#[test]
fn failure_mid_matrix_names_the_failing_cell() {
  let env = TestEnv::new();

  // Fail the configure step of RelWithDebInfo cells only.
  env
    .bmx_with_stub("case \"$*\" in *RelWithDebInfo*) exit 1 ;; esac\nexit 0")
    .arg("build")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("x64/RelWithDebInfo configure step failed"));

  // Cell one completed (configure + build), cell two failed its configure.
  assert_eq!(env.invocations().len(), 3);
}

#[test]
fn run_tests_flag_reaches_the_configure_step() {
  let env = TestEnv::new();

  env.bmx_with_stub("exit 0").args(["build", "--run-tests"]).assert().success();

  let calls = env.invocations();
  assert!(calls[0].contains("-DBUILD_TESTS=ON"));
}

#[test]
fn tests_default_to_off() {
  let env = TestEnv::new();

  env.bmx_with_stub("exit 0").arg("build").assert().success();

  let calls = env.invocations();
  assert!(calls[0].contains("-DBUILD_TESTS=OFF"));
}

#[test]
fn arch_selection_limits_the_matrix() {
  let env = TestEnv::new();

  env
    .bmx_with_stub("exit 0")
    .args(["build", "--arch", "x64"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Cells: 2"));

  assert_eq!(env.invocations().len(), 4);
  assert!(!env.temp.path().join("build/linx86-Debug").exists());
}

#[test]
fn single_cell_selection() {
  let env = TestEnv::new();

  env
    .bmx_with_stub("exit 0")
    .args(["build", "--arch", "x86", "--configuration", "RelWithDebInfo"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Cells: 1"));

  let calls = env.invocations();
  assert_eq!(calls.len(), 2);
  assert!(calls[0].contains("-DCMAKE_BUILD_TYPE=RelWithDebInfo"));
}

#[test]
fn configure_args_follow_the_expected_shape() {
  let env = TestEnv::new();

  env.bmx_with_stub("exit 0").args(["build", "--arch", "x64", "--configuration", "Debug"]).assert().success();

  let calls = env.invocations();
  let configure = &calls[0];
  assert!(configure.contains("-DCMAKE_RUNTIME_OUTPUT_DIRECTORY="));
  assert!(configure.contains("-DCMAKE_LIBRARY_OUTPUT_DIRECTORY="));
  assert!(configure.contains("-GNinja"));
  assert!(configure.ends_with("../.."));
  assert_eq!(calls[1], "--build .");
}

#[test]
fn json_format_reports_every_cell() {
  let env = TestEnv::new();

  let output = env.bmx_with_stub("exit 0").args(["build", "--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let cells = report["cells"].as_array().unwrap();
  assert_eq!(cells.len(), 4);
  assert_eq!(cells[0]["arch"], "x64");
  assert_eq!(cells[0]["configuration"], "Debug");
  assert_eq!(cells[0]["dir_name"], "linx64-Debug");
}
