use crate::{Case, Gotifier, UNRECOGNIZED};

fn gotifier() -> Gotifier {
  Gotifier::new([("uid", "UID"), (UNRECOGNIZED, "UnrecognizedSequence")])
}

fn check(g: &Gotifier, name: &str, public: &str, private: &str, package: &str) {
  assert_eq!(g.public(name), public, "public of {name:?}");
  assert_eq!(g.private(name), private, "private of {name:?}");
  assert_eq!(g.package(name), package, "package of {name:?}");
}

fn check_chunks(name: &str, chunks: &[&str]) {
  assert_eq!(Gotifier::default().chunks(name), chunks, "chunks of {name:?}");
}

#[test]
fn snake() {
  check(&gotifier(), "data_tape_loader", "DataTapeLoader", "dataTapeLoader", "datatapeloader");
}

#[test]
fn capitalized_snake() {
  check(&gotifier(), "Donald_duck", "DonaldDuck", "donaldDuck", "donaldduck");
}

#[test]
fn camel_id() {
  check(&Gotifier::default(), "userId", "UserID", "userID", "userid");
}

#[test]
fn snake_id() {
  check(&gotifier(), "user_id", "UserID", "userID", "userid");
}

#[test]
fn dotted() {
  check(&gotifier(), "St.Loop", "StLoop", "stLoop", "stloop");
}

#[test]
fn dictionary_word() {
  check(&gotifier(), "ownerUid", "OwnerUID", "ownerUID", "owneruid");
}

#[test]
fn unrecognized() {
  check(&gotifier(), "ï»¿", "UnrecognizedSequence", "unrecognizedSequence", "ï»¿");
}

#[test]
fn unrecognized_without_fallback() {
  let g = Gotifier::default();
  for name in ["", "ï»¿", "!!!", "123", "-- 42 --"] {
    check(&g, name, "", "", &g.package(name));
  }
}

#[test]
fn unrecognized_symbols() {
  let g = gotifier();
  for name in ["", "...", "$%^", "#0"] {
    assert_eq!(g.public(name), "UnrecognizedSequence", "public of {name:?}");
    assert_eq!(g.private(name), "unrecognizedSequence", "private of {name:?}");
  }
}

#[test]
fn fallback_does_not_leak_into_chunks() {
  let g = gotifier();
  assert_eq!(g.public("a_2b"), "A2B");
  assert_eq!(g.title("owner2"), "Owner2");
}

#[test]
fn id_always_id() {
  let g = Gotifier::new([("id", "Identifier")]);
  assert_eq!(g.dictionary().get("id"), Some("ID"));
  assert_eq!(g.title("id"), "ID");
  assert_eq!(g.public("user_id"), "UserID");
}

#[test]
fn default_dictionary() {
  let g = Gotifier::default();
  assert_eq!(g.dictionary().len(), 1);
  assert_eq!(g.dictionary().entries().collect::<Vec<_>>(), [("id", "ID")]);
}

#[test]
fn whole_chunk_any_case() {
  let g = gotifier();
  for chunk in ["uid", "Uid", "uId", "UID"] {
    assert_eq!(g.title(chunk), "UID", "title of {chunk:?}");
  }
}

#[test]
fn whole_chunk_ignores_digits() {
  let g = Gotifier::new([("abc1", "ABC-one")]);
  assert_eq!(g.title("Abc1"), "ABC-one");
}

#[test]
fn head_exact_case() {
  let g = Gotifier::new([("Api", "API")]);
  assert_eq!(g.title("api"), "Api");
  assert_eq!(g.title("Api"), "API");
  assert_eq!(g.title("Api2"), "API2");
  assert_eq!(g.title("api2"), "Api2");
  // the head before a digit is looked up as written
  assert_eq!(g.title("id2"), "ID2");
  assert_eq!(g.title("Id2"), "Id2");
}

#[test]
fn digits() {
  let g = Gotifier::default();
  assert_eq!(g.title("v2beta1"), "V2Beta1");
  assert_eq!(g.title("2fa"), "2Fa");
  assert_eq!(g.title("42"), "42");
  check(&g, "owner2Id", "Owner2ID", "owner2ID", "owner2id");
  check(&g, "user_id2", "UserID2", "userID2", "userid2");
}

#[test]
fn title_non_ascii() {
  let g = Gotifier::default();
  assert_eq!(g.title("éclair"), "éclair");
  assert_eq!(g.title("über2x"), "über2X");
}

#[test]
fn uppercase_run() {
  check(&Gotifier::default(), "HTTPServer", "HTTPServer", "hTTPServer", "httpserver");
}

#[test]
fn filter_skips_rejected() {
  check(&Gotifier::default(), "a-b c!d", "AbCd", "abCd", "a-b c!d");
  check(&Gotifier::default(), "héllo wörld", "HlloWrld", "hlloWrld", "héllo wörld");
}

#[test]
fn chunks() {
  check_chunks("St.Loop", &["St", "Loop"]);
  check_chunks("ownerUid", &["owner", "Uid"]);
  check_chunks("HTTPServer", &["H", "T", "T", "P", "Server"]);
  check_chunks("__a__b", &["a", "b"]);
  check_chunks("2fa", &["fa"]);
  check_chunks("user name", &["user", "name"]);
  check_chunks("ab12Cd", &["ab12", "Cd"]);
  check_chunks("", &[]);
}

#[test]
fn chunk_boundaries_are_uppercase() {
  let name = "parseHttpRequestLine";
  let chunks = Gotifier::default().chunks(name);
  assert_eq!(chunks[0], "parse");
  for chunk in &chunks[1..] {
    assert!(chunk.starts_with(|c: char| c.is_ascii_uppercase()), "{chunk:?}");
  }
}

#[test]
fn package_idempotent() {
  let g = Gotifier::default();
  for name in ["FooBar", "foo bar", "ÄBC", "x-Y-z"] {
    let once = g.package(name);
    assert_eq!(g.package(&once), once);
  }
}

#[test]
fn goimports() {
  let g = Gotifier::default();
  assert_eq!(g.goimports("data_tape_loader"), "data-tape-loader");
  assert_eq!(g.goimports("a.b_c"), "a.b-c");
  assert_eq!(g.goimports(""), "");
}

#[test]
fn is_ident() {
  let g = Gotifier::default();
  for name in ["a", "_", "_a1", "userID", "A_B_9"] {
    assert!(g.is_ident(name), "{name:?}");
  }
  for name in ["", "1a", "a-b", "a b", "a.b", "a\n", "é"] {
    assert!(!g.is_ident(name), "{name:?}");
  }
}

#[test]
fn convert() {
  let g = gotifier();
  assert_eq!(g.convert("owner_uid", Case::Public), "OwnerUID");
  assert_eq!(g.convert("owner_uid", Case::Private), "ownerUID");
  assert_eq!(g.convert("owner_uid", Case::Package), "owneruid");
  assert_eq!(g.convert("owner_uid", Case::Goimports), "owner-uid");
}
