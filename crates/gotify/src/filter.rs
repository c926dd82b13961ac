//! Reducing raw input to identifier bytes.

fn is_head(b: u8) -> bool {
  b.is_ascii_alphabetic() || b == b'_'
}

fn is_tail(b: u8) -> bool {
  is_head(b) || b.is_ascii_digit() || b == b' '
}

/// Keeps everything from the first letter or underscore onwards that is a letter, digit,
/// underscore or space, after turning `.` into `_`. Rejected bytes are skipped, not treated
/// as the end of the input.
///
/// Returns the empty string if there is no letter or underscore at all.
pub(crate) fn filter(raw: &str) -> String {
  let raw = raw.replace('.', "_");
  let bytes = raw.as_bytes();
  let Some(start) = bytes.iter().position(|&b| is_head(b)) else {
    return String::new();
  };
  let mut ret = String::with_capacity(bytes.len() - start);
  let mut iter = bytes[start..].iter().copied();
  ret.extend(iter.next().map(char::from));
  ret.extend(iter.filter(|&b| is_tail(b)).map(char::from));
  ret
}
