//! buildmx-lib: Core types and logic for buildmx
//!
//! This crate provides the building blocks of the build-matrix driver:
//! - `matrix`: target architectures, build configurations, and cell expansion
//! - `layout`: per-cell intermediate and output directory naming
//! - `toolchain`: Windows developer-environment capture
//! - `driver`: the sequential configure/build loop over the matrix

pub mod consts;
pub mod driver;
pub mod layout;
pub mod matrix;
pub mod platform;
pub mod toolchain;
