use super::*;

/// Sentence-terminating marks that disqualify a short line from being a
/// sub-headline, ASCII and full-width.
const TERMINATORS: &[char] = &[',', '.', ':', ')', '，', '。', '：', '）'];

/// Scan cleaned body text for sub-headlines: lines markedly shorter than
/// their two neighbours on each side.
///
/// The scan strides by two lines because true sub-headlines are scattered,
/// never adjacent. A flagged line survives the exclude phase only if it is
/// short enough to be a label and does not end in sentence punctuation.
pub fn detect_subheads(plain_text: &str, options: &Options) -> Vec<String> {
  let cleaned = clean_text(plain_text, CLEANER_BOOK);
  let lines: Vec<&str> = cleaned.split('\n').collect();
  let lengths: Vec<usize> =
    lines.iter().map(|line| line.chars().count()).collect();

  let mut candidates = Vec::new();

  let mut i = 2;
  while i + 2 < lines.len() {
    let neighborhood =
      lengths[i - 2] + lengths[i - 1] + lengths[i + 1] + lengths[i + 2];
    let average = (neighborhood / 4) as f64;

    if (lengths[i] as f64) < options.subhead_ratio * average {
      candidates.push((lines[i], lengths[i]));
    }

    i += 2;
  }

  candidates
    .into_iter()
    .filter(|(line, length)| {
      *length <= options.subhead_max_len && !line.ends_with(TERMINATORS)
    })
    .map(|(line, _)| line.to_string())
    .collect()
}
