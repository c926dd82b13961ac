//! Turning free-form names into identifiers for a target language.
//!
//! A name is reduced to identifier bytes, then split into word chunks at `_`, `.`, spaces
//! and every uppercase letter:
//!
//! - `abc_def` becomes `abc`, `def`
//! - `AbcDef` becomes `Abc`, `Def`
//! - `userId` becomes `user`, `Id`
//!
//! Each chunk is then looked up in a [`Dictionary`] (which always maps `id` to `ID`) and
//! either replaced by its translation or capitalized, and the chunks are joined back
//! together. See [`Gotifier`] for the available forms.

mod cursor;
mod dict;
mod filter;
mod ident;
mod split;
mod title;

#[cfg(test)]
mod tests;

pub use dict::Dictionary;
pub use smol_str::SmolStr;

/// The dictionary key consulted when a name has no identifier characters at all.
///
/// Seed it with something like `UnrecognizedSequence` to get a non-empty public and private
/// form for such names.
pub const UNRECOGNIZED: &str = "";

/// A form to convert a name into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
  /// See [`Gotifier::public`].
  Public,
  /// See [`Gotifier::private`].
  Private,
  /// See [`Gotifier::package`].
  Package,
  /// See [`Gotifier::goimports`].
  Goimports,
}

/// Converts names with a fixed dictionary.
#[derive(Debug, Clone)]
pub struct Gotifier {
  dict: Dictionary,
}

impl Default for Gotifier {
  fn default() -> Self {
    Self::new(Dictionary::new())
  }
}

impl Gotifier {
  /// Returns a new converter with the given translations. The entry for `id` is always set
  /// to `ID`, replacing any given one.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::new([("uid", "UID"), ("id", "Identifier")]);
  /// assert_eq!(g.dictionary().get("uid"), Some("UID"));
  /// assert_eq!(g.dictionary().get("id"), Some("ID"));
  /// ```
  #[must_use]
  pub fn new<I, K, V>(dict: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<SmolStr>,
    V: Into<SmolStr>,
  {
    let mut dict: Dictionary = dict.into_iter().collect();
    dict.insert("id", "ID");
    Self { dict }
  }

  /// Returns the dictionary.
  #[must_use]
  pub fn dictionary(&self) -> &Dictionary {
    &self.dict
  }

  /// Returns the word chunks of `name`.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::default();
  /// assert_eq!(g.chunks("St.Loop"), ["St", "Loop"]);
  /// assert_eq!(g.chunks("ownerUid"), ["owner", "Uid"]);
  /// ```
  #[must_use]
  pub fn chunks(&self, name: &str) -> Vec<String> {
    split::split(&filter::filter(name)).into_iter().map(str::to_owned).collect()
  }

  /// Returns the translation of a single chunk, keeping embedded digits.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::default();
  /// assert_eq!(g.title("Id"), "ID");
  /// assert_eq!(g.title("v2beta1"), "V2Beta1");
  /// ```
  #[must_use]
  pub fn title(&self, chunk: &str) -> String {
    title::title(&self.dict, chunk)
  }

  /// Returns a public identifier: every chunk translated or capitalized.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::new([("uid", "UID")]);
  /// assert_eq!(g.public("data_tape_loader"), "DataTapeLoader");
  /// assert_eq!(g.public("ownerUid"), "OwnerUID");
  /// ```
  #[must_use]
  pub fn public(&self, name: &str) -> String {
    let filtered = filter::filter(name);
    let chunks = split::split(&filtered);
    let ret = if chunks.is_empty() {
      self.unrecognized(name)
    } else {
      chunks.iter().map(|chunk| self.title(chunk)).collect()
    };
    log::trace!("public {name:?} is {ret:?}");
    ret
  }

  /// Returns a private identifier: like [`Self::public`], except the first chunk is only
  /// lowercased.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::default();
  /// assert_eq!(g.private("Donald_duck"), "donaldDuck");
  /// assert_eq!(g.private("userId"), "userID");
  /// ```
  #[must_use]
  pub fn private(&self, name: &str) -> String {
    let filtered = filter::filter(name);
    let chunks = split::split(&filtered);
    let ret = match chunks.split_first() {
      None => title::lower_first(&self.unrecognized(name)),
      Some((first, rest)) => {
        let mut ret = first.to_lowercase();
        for chunk in rest {
          ret.push_str(&self.title(chunk));
        }
        ret
      }
    };
    log::trace!("private {name:?} is {ret:?}");
    ret
  }

  /// Returns a package name: `_` and `.` removed, everything lowercased.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::default();
  /// assert_eq!(g.package("St.Loop"), "stloop");
  /// ```
  #[must_use]
  #[allow(clippy::unused_self)]
  pub fn package(&self, name: &str) -> String {
    name.chars().filter(|&c| !matches!(c, '_' | '.')).flat_map(char::to_lowercase).collect()
  }

  /// Returns a directory name with every `_` replaced by `-`.
  #[must_use]
  #[allow(clippy::unused_self)]
  pub fn goimports(&self, name: &str) -> String {
    name.replace('_', "-")
  }

  /// Returns whether `name` is already a bare identifier: a letter or `_` followed by
  /// letters, digits and `_`.
  ///
  /// ```
  /// # use gotify::Gotifier;
  /// let g = Gotifier::default();
  /// assert!(g.is_ident("_user2"));
  /// assert!(!g.is_ident("2user"));
  /// ```
  #[must_use]
  #[allow(clippy::unused_self)]
  pub fn is_ident(&self, name: &str) -> bool {
    ident::is_ident(name)
  }

  /// Converts `name` into the given form.
  #[must_use]
  pub fn convert(&self, name: &str, case: Case) -> String {
    match case {
      Case::Public => self.public(name),
      Case::Private => self.private(name),
      Case::Package => self.package(name),
      Case::Goimports => self.goimports(name),
    }
  }

  fn unrecognized(&self, name: &str) -> String {
    log::debug!("no identifier characters in {name:?}");
    self.title(UNRECOGNIZED)
  }
}
