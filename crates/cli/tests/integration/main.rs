//! Integration tests for the bmx CLI.

mod common;

#[cfg(unix)]
mod build_tests;
mod plan_tests;
