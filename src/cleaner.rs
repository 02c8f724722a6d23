use super::*;

/// Ordered find/replace pairs applied before the whitespace pass. Order is
/// load-bearing: later pairs may re-match text produced by earlier ones,
/// e.g. ellipsis variants collapse before duplicate paragraph breaks.
pub const CLEANER_BOOK: &[(&str, &str)] = &[
  ("\u{3000}", " "), // ideographic space
  ("\u{a0}", " "),   // &nbsp;
  ("\t", " "),
  ("\r\n", "\n"),
  ("\n ", "\n"),
  ("\n\n", "\n"), // duplicate paragraph breaks
  ("\u{e5f1}", ""), // stray private-use character on some CJK pages
  ("......", "……"),
  ("...", "……"),
  ("。。。。。。", "……"),
  ("。。。", "……"),
  ("--", "——"),
  ("－－", "——"),
  ("■", ""),
];

fn is_cjk(ch: char) -> bool {
  ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Normalize text against an ordered pattern table, then drop interior
/// spaces that sit next to CJK ideographs or other spaces.
///
/// Inputs of two characters or fewer pass through untouched. Each table
/// pair is replaced exhaustively before the next pair is considered, so a
/// pair keeps matching text produced by its own replacements.
pub fn clean_text(input: &str, book: &[(&str, &str)]) -> String {
  if input.chars().count() <= 2 {
    return input.to_string();
  }

  let mut text = input.to_string();

  for (pattern, replacement) in book {
    while text.contains(pattern) {
      text = text.replace(pattern, replacement);
    }
  }

  let text = text.trim_matches(|ch| ch == ' ' || ch == '\n');

  let mut chars: Vec<char> = text.chars().collect();

  // Interior pass, first and last characters excluded. After a deletion the
  // following character shifts into position, so the index stays put.
  let mut i = 1;
  while i + 1 < chars.len() {
    if chars[i] == ' '
      && (is_cjk(chars[i - 1]) || is_cjk(chars[i + 1]) || chars[i + 1] == ' ')
    {
      chars.remove(i);
    } else {
      i += 1;
    }
  }

  chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn degenerate_input_passes_through() {
    assert_eq!(clean_text("", CLEANER_BOOK), "");
    assert_eq!(clean_text("ab", CLEANER_BOOK), "ab");
    assert_eq!(clean_text(" \n", CLEANER_BOOK), " \n");
  }

  #[test]
  fn pairs_are_replaced_exhaustively() {
    assert_eq!(clean_text("甲\n\n\n\n乙", CLEANER_BOOK), "甲\n乙");
    assert_eq!(clean_text("a\n   b", CLEANER_BOOK), "a\nb");
  }

  #[test]
  fn ellipsis_variants_collapse_before_paragraph_breaks() {
    assert_eq!(
      clean_text("你说……就这样吧......\n\n结束", CLEANER_BOOK),
      "你说……就这样吧……\n结束"
    );
    assert_eq!(clean_text("等等。。。再说", CLEANER_BOOK), "等等……再说");
  }

  #[test]
  fn dashes_normalize_to_em_dash_pairs() {
    assert_eq!(clean_text("a--b", CLEANER_BOOK), "a——b");
    assert_eq!(clean_text("甲－－乙", CLEANER_BOOK), "甲——乙");
  }

  #[test]
  fn spaces_beside_cjk_are_deleted() {
    assert_eq!(
      clean_text("中 文 与 English mixed", CLEANER_BOOK),
      "中文与English mixed"
    );
    assert_eq!(clean_text("中　文", CLEANER_BOOK), "中文");
  }

  #[test]
  fn space_runs_collapse_to_one() {
    assert_eq!(clean_text("alpha   beta", CLEANER_BOOK), "alpha beta");
  }

  #[test]
  fn leading_and_trailing_whitespace_is_stripped() {
    assert_eq!(clean_text("\n 正文 \n\n", CLEANER_BOOK), "正文");
  }

  #[test]
  fn cleaning_is_idempotent() {
    let samples = [
      "中 文 与 English  mixed...\r\n\r\n下一段　继续--结束",
      "\n\n 甲。。。乙 \n",
      "plain ascii text, nothing to do",
      "■装饰字符\u{e5f1}删除",
    ];

    for sample in samples {
      let once = clean_text(sample, CLEANER_BOOK);
      assert_eq!(clean_text(&once, CLEANER_BOOK), once, "sample: {sample:?}");
    }
  }

  #[test]
  fn output_never_contains_table_patterns() {
    let cleaned = clean_text("甲\t乙\r\n丙\u{a0}丁......", CLEANER_BOOK);

    for (pattern, _) in CLEANER_BOOK {
      assert!(!cleaned.contains(pattern), "pattern {pattern:?} survived");
    }
  }
}
