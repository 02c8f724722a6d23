use super::*;

/// Characters that end an author-name run following a marker.
const RUN_TERMINATORS: &[char] = &['\n', '\r', '<', '>'];

/// Text content of the first `<title>` tag, scanned without parsing.
///
/// Returns `None` whenever the opening tag, its closing `>`, or the
/// `</title>` tag cannot be located, or when the closing tag sits before
/// the computed content start (unusual tag structure).
pub(crate) fn title_tag_text(html: &str) -> Option<&str> {
  let open = html.find("<title")?;
  let close = html.find("</title>")?;
  let start = html[open..].find('>').map(|offset| open + offset + 1)?;

  if start <= close {
    Some(&html[start..close])
  } else {
    None
  }
}

/// Maximal prefix of `text` free of tag delimiters and line breaks. The
/// end of input terminates the run.
pub(crate) fn run_until_terminator(text: &str) -> &str {
  match text.find(RUN_TERMINATORS) {
    Some(end) => &text[..end],
    None => text,
  }
}
