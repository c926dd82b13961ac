//! Titling a single chunk.

use crate::cursor::Cursor;
use crate::dict::Dictionary;

/// Resolves `chunk` against `dict`.
///
/// The whole remaining text is looked up lowercased first. Failing that, the leading
/// non-digit run (the head) is looked up exactly as written, the digit run after it (the
/// tail) is kept verbatim, and whatever follows is titled the same way.
///
/// Only a chunk that is empty from the start is looked up under the empty key.
pub(crate) fn title(dict: &Dictionary, chunk: &str) -> String {
  let mut ret = String::with_capacity(chunk.len());
  let mut rest = chunk;
  loop {
    if let Some(val) = dict.get(&rest.to_lowercase()) {
      ret.push_str(val);
      break;
    }
    if rest.is_empty() {
      break;
    }
    let mut st = Cursor::new(rest);
    let m = st.mark();
    st.bump_while(|b| !b.is_ascii_digit());
    let head = st.since(m);
    let m = st.mark();
    st.bump_while(|b| b.is_ascii_digit());
    let tail = st.since(m);
    match dict.get(head) {
      Some(val) if !head.is_empty() => ret.push_str(val),
      _ => push_capitalized(&mut ret, head),
    }
    ret.push_str(tail);
    let next = st.rest();
    if next.is_empty() {
      break;
    }
    if next.len() >= rest.len() {
      log::error!("no progress titling {rest:?}");
      debug_assert!(next.len() < rest.len(), "no progress titling {rest:?}");
      break;
    }
    rest = next;
  }
  ret
}

fn push_capitalized(buf: &mut String, s: &str) {
  let mut cs = s.chars();
  if let Some(c) = cs.next() {
    buf.push(c.to_ascii_uppercase());
    buf.push_str(cs.as_str());
  }
}

/// Lowercases the first char of `s`, leaving the rest alone.
pub(crate) fn lower_first(s: &str) -> String {
  let mut cs = s.chars();
  match cs.next() {
    None => String::new(),
    Some(c) => {
      let mut ret = String::with_capacity(s.len());
      ret.push(c.to_ascii_lowercase());
      ret.push_str(cs.as_str());
      ret
    }
  }
}
