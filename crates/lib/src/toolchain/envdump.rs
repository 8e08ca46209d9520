//! Parsing of `set`-style environment dumps.
//!
//! The developer-environment script is sourced by running
//! `"vcvarsall.bat" <arch> & set` inside `cmd.exe` and reading back the
//! `set` output. The dump format is one `NAME=value` pair per line; the
//! script's own banner lines carry no `=` and are skipped.

use std::collections::BTreeMap;

/// Parse a `set` dump into an environment mapping.
///
/// Lines without an `=` are ignored. Each remaining line is trimmed and
/// split on the first `=` only, so values containing `=` survive intact.
pub fn parse_env_dump(dump: &str) -> BTreeMap<String, String> {
  let mut vars = BTreeMap::new();
  for line in dump.lines() {
    if !line.contains('=') {
      continue;
    }
    let line = line.trim();
    if let Some((key, value)) = line.split_once('=') {
      vars.insert(key.to_string(), value.to_string());
    }
  }
  vars
}
