//! Scanning a chunk byte by byte.

use drop_bomb::DebugDropBomb;

/// A position in a string being scanned.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
  s: &'a str,
  idx: usize,
}

impl<'a> Cursor<'a> {
  pub(crate) fn new(s: &'a str) -> Cursor<'a> {
    Cursor { s, idx: 0 }
  }

  fn cur(&self) -> Option<u8> {
    self.s.as_bytes().get(self.idx).copied()
  }

  /// Advances while `cond` holds for the current byte.
  ///
  /// The titler only stops next to an ASCII digit, so the index stays on a char boundary.
  pub(crate) fn bump_while<F>(&mut self, mut cond: F)
  where
    F: FnMut(u8) -> bool,
  {
    while let Some(b) = self.cur() {
      if !cond(b) {
        break;
      }
      self.idx += 1;
    }
  }

  pub(crate) fn mark(&self) -> Marker {
    Marker { bomb: DebugDropBomb::new("must be passed to `Cursor::since`"), idx: self.idx }
  }

  /// Returns the (possibly empty) text since the marker.
  pub(crate) fn since(&self, mut m: Marker) -> &'a str {
    m.bomb.defuse();
    self.s.get(m.idx..self.idx).unwrap_or_default()
  }

  /// Returns the text not yet scanned.
  pub(crate) fn rest(&self) -> &'a str {
    self.s.get(self.idx..).unwrap_or_default()
  }
}

/// A marker for a position in the cursor.
#[derive(Debug)]
pub(crate) struct Marker {
  bomb: DebugDropBomb,
  idx: usize,
}
