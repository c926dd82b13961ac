//! Splitting filtered input into word chunks.

/// Splits at `_`, `.` and spaces, and before every ASCII uppercase letter. Empty chunks are
/// dropped.
pub(crate) fn split(s: &str) -> Vec<&str> {
  let mut ret = Vec::new();
  let mut start = 0;
  for (idx, c) in s.char_indices() {
    if matches!(c, '_' | '.' | ' ') {
      ret.push(&s[start..idx]);
      start = idx + 1;
    } else if c.is_ascii_uppercase() {
      ret.push(&s[start..idx]);
      start = idx;
    }
  }
  ret.push(&s[start..]);
  ret.retain(|chunk| !chunk.is_empty());
  log::trace!("split {s:?} into {ret:?}");
  ret
}
