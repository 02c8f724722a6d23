use super::*;

/// Tags treated as block boundaries when flattening markup to text.
const BLOCK_TAGS: &[&str] = &[
  "p", "div", "br", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr",
];

/// Tags whose content never belongs to the article body.
const SKIP_TAGS: &[&str] = &["script", "style", "head"];

/// Boundary to the main-content extraction collaborator: given markup and
/// a text-density ratio hint, return a best-guess content region's text.
pub trait ContentExtractor {
  fn extract(&self, html: &str, ratio: f64, strict: bool) -> Option<String>;
}

/// Drive the extractor, relaxing the density ratio on boilerplate-heavy
/// pages until some text comes back.
pub fn main_text(extractor: &dyn ContentExtractor, html: &str) -> String {
  let mut text = extractor.extract(html, 0.5, true).unwrap_or_default();

  let mut ratio = 0.5;
  while text.chars().count() <= 1 && ratio > 0.0 {
    debug!(ratio, "retrying extraction with a relaxed ratio");
    text = extractor.extract(html, ratio, false).unwrap_or_default();
    ratio -= 0.1;
  }

  text
}

/// Stand-in extractor that flattens markup to newline-delimited text,
/// skipping script/style/head content. A density-based extractor can
/// replace it behind [`ContentExtractor`].
#[derive(Debug, Default)]
pub struct TagStripExtractor;

impl ContentExtractor for TagStripExtractor {
  fn extract(&self, html: &str, _ratio: f64, _strict: bool) -> Option<String> {
    let mut out = String::with_capacity(html.len() / 4);
    let mut rest = html;
    let mut skipping: Option<&'static str> = None;

    while let Some(open) = rest.find('<') {
      if skipping.is_none() {
        out.push_str(&rest[..open]);
      }

      let tail = &rest[open..];
      let close = match tail.find('>') {
        Some(close) => close,
        None => {
          // Unterminated tag: drop the remainder.
          rest = "";
          break;
        }
      };

      let tag = &tail[1..close];
      let (name, is_closing) = tag_name(tag);

      match skipping {
        Some(skip) => {
          if is_closing && name.eq_ignore_ascii_case(skip) {
            skipping = None;
          }
        }
        None => {
          if let Some(skip) = SKIP_TAGS
            .iter()
            .copied()
            .find(|skip| name.eq_ignore_ascii_case(skip))
          {
            if !is_closing {
              skipping = Some(skip);
            }
          } else if BLOCK_TAGS
            .iter()
            .any(|block| name.eq_ignore_ascii_case(block))
          {
            out.push('\n');
          }
        }
      }

      rest = &tail[close + 1..];
    }

    if skipping.is_none() {
      out.push_str(rest);
    }

    let lines: Vec<&str> = out
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .collect();

    Some(lines.join("\n"))
  }
}

fn tag_name(tag: &str) -> (&str, bool) {
  let (tag, is_closing) = match tag.strip_prefix('/') {
    Some(rest) => (rest, true),
    None => (tag, false),
  };

  let end = tag
    .find(|ch: char| !ch.is_ascii_alphanumeric())
    .unwrap_or(tag.len());

  (&tag[..end], is_closing)
}
