//! Checking for bare identifiers.

use regex::Regex;
use std::sync::LazyLock;

static IDENT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").expect("identifier pattern is valid"));

pub(crate) fn is_ident(s: &str) -> bool {
  IDENT.is_match(s)
}
