//! The translation dictionary.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// A mapping from word chunks to their canonical spelling, like `uid` to `UID`.
///
/// Keys are matched as given. Whole chunks are lowercased before lookup, so keys should
/// usually be lowercase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dictionary(FxHashMap<SmolStr, SmolStr>);

impl Dictionary {
  /// Returns a new empty dictionary.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the translation for `key`.
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&str> {
    self.0.get(key).map(SmolStr::as_str)
  }

  /// Returns the number of entries.
  #[must_use]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns whether there are no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns an iterator over the entries, in no particular order.
  pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub(crate) fn insert(&mut self, key: &str, val: &str) {
    self.0.insert(SmolStr::new(key), SmolStr::new(val));
  }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
  K: Into<SmolStr>,
  V: Into<SmolStr>,
{
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
  {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

impl IntoIterator for Dictionary {
  type Item = (SmolStr, SmolStr);

  type IntoIter = std::collections::hash_map::IntoIter<SmolStr, SmolStr>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}
