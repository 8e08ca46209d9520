//! Integration tests for `bmx plan`.

use predicates::prelude::*;

use buildmx_lib::platform::OsFamily;

use crate::common::TestEnv;

/// Directory-name prefix for the host running the tests.
fn prefix() -> &'static str {
  OsFamily::current().prefix()
}

#[test]
fn plan_lists_the_full_matrix_in_execution_order() {
  let env = TestEnv::new();

  let output = env.bmx_cmd().arg("plan").output().unwrap();
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  let p = prefix();
  let names = [
    format!("{p}x64-Debug"),
    format!("{p}x64-RelWithDebInfo"),
    format!("{p}x86-Debug"),
    format!("{p}x86-RelWithDebInfo"),
  ];

  let positions: Vec<usize> = names
    .iter()
    .map(|name| stdout.find(name.as_str()).unwrap_or_else(|| panic!("{name} missing from plan")))
    .collect();
  assert!(positions.windows(2).all(|w| w[0] < w[1]), "cells out of order: {stdout}");
}

#[test]
fn plan_defaults_to_tests_off() {
  let env = TestEnv::new();

  env
    .bmx_cmd()
    .arg("plan")
    .assert()
    .success()
    .stdout(predicate::str::contains("Tests: OFF"));
}

#[test]
fn plan_run_tests_flag() {
  let env = TestEnv::new();

  env
    .bmx_cmd()
    .args(["plan", "--run-tests"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Tests: ON"));
}

#[test]
fn plan_respects_selection_order() {
  let env = TestEnv::new();

  let output = env
    .bmx_cmd()
    .args(["plan", "--arch", "x86", "--arch", "x64", "--configuration", "Debug"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Plan: 2 cell(s)"));
  let x86 = stdout.find(&format!("{}x86-Debug", prefix())).unwrap();
  let x64 = stdout.find(&format!("{}x64-Debug", prefix())).unwrap();
  assert!(x86 < x64);
}

#[test]
fn plan_does_not_touch_the_filesystem() {
  let env = TestEnv::new();

  env.bmx_cmd().arg("plan").assert().success();

  assert!(!env.temp.path().join("build").exists());
  assert!(!env.temp.path().join("bin").exists());
}

#[test]
fn plan_json_describes_cells() {
  let env = TestEnv::new();

  let output = env.bmx_cmd().args(["plan", "--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(plan["run_tests"], false);
  let cells = plan["cells"].as_array().unwrap();
  assert_eq!(cells.len(), 4);
  assert_eq!(cells[0]["arch"], "x64");
  assert_eq!(cells[0]["dir_name"], format!("{}x64-Debug", prefix()));
}
