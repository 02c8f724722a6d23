use super::*;

// Literal `charset=`, skip anything that cannot start a charset name, then
// take the longest legal run of name characters.
static CHARSET_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"charset=[^A-Za-z0-9-]*([A-Za-z0-9-]+)").unwrap()
});

/// Best-effort statistical charset detection over raw page bytes.
pub trait CharsetGuesser {
  fn guess(&self, bytes: &[u8]) -> Option<String>;
}

/// Guesser backed by `chardetng`'s encoding detector.
#[derive(Debug, Default)]
pub struct ChardetngGuesser;

impl CharsetGuesser for ChardetngGuesser {
  fn guess(&self, bytes: &[u8]) -> Option<String> {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);

    Some(detector.guess(None, true).name().to_string())
  }
}

/// Guesser that always declines, for pipelines without statistical
/// detection.
#[derive(Debug, Default)]
pub struct NoGuesser;

impl CharsetGuesser for NoGuesser {
  fn guess(&self, _bytes: &[u8]) -> Option<String> {
    None
  }
}

/// Resolve the charset of a raw page: the declared `charset=` token wins,
/// then the guesser, then UTF-8. Aliases are folded afterwards.
pub fn resolve_charset(bytes: &[u8], guesser: &dyn CharsetGuesser) -> String {
  let declared = CHARSET_TOKEN
    .captures(bytes)
    .and_then(|captures| captures.get(1))
    .map(|token| String::from_utf8_lossy(token.as_bytes()).to_lowercase());

  let charset = match declared {
    Some(token) => token,
    None => match guesser.guess(bytes) {
      Some(guess) => guess.to_lowercase(),
      None => String::new(),
    },
  };

  let resolved = normalize_alias(&charset);
  debug!(declared = charset.as_str(), resolved = resolved.as_str(), "charset");

  resolved
}

/// Aliases the decoder handles badly or not at all: pages declaring
/// `gb2312` routinely use the `gbk` superset, and `big5` pages lean on the
/// HKSCS extensions.
pub(crate) fn normalize_alias(charset: &str) -> String {
  match charset {
    "gb2312" => "gbk".to_string(),
    "big5" => "big5-hkscs".to_string(),
    "" => "utf-8".to_string(),
    other => other.to_string(),
  }
}

/// Decode page bytes with the resolved charset label. Malformed sequences
/// are replaced, never fatal; an unknown label falls back to UTF-8.
pub fn decode_page(bytes: &[u8], charset: &str) -> String {
  let encoding = Encoding::for_label(charset.as_bytes()).unwrap_or(UTF_8);
  let (text, _, _) = encoding.decode(bytes);

  text.into_owned()
}
