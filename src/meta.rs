use super::*;

/// Fallback title for pages with unusual `<title>` structure.
pub const TITLE_SENTINEL: &str = "*****";

/// Metadata inferred from a raw page and its extracted body text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
  pub title: String,
  pub author: String,
  pub subheads: Vec<String>,
}

/// Infer title, author, and sub-headlines. Never fails: malformed markup
/// degrades to the sentinel title, an empty author, or no sub-headlines.
pub fn infer_meta(
  raw_html: &str,
  clean_body: &str,
  options: &Options,
) -> ArticleMeta {
  let mut title = scan::title_tag_text(raw_html)
    .unwrap_or(TITLE_SENTINEL)
    .to_string();

  let mut author = String::new();

  if let Some(position) = colon_position(&title) {
    // A colon close to the front reads as `author:title`; further in, it
    // is part of the title itself.
    if position <= options.author_prefix_max {
      let chars: Vec<char> = title.chars().collect();
      author = chars[..position].iter().collect();
      title = chars[position + 1..].iter().collect();
    }
  } else if let Some(run) = marker_run(raw_html, &options.author_markers) {
    author = run.to_string();
  }

  let subheads = match subheads_from_html(raw_html) {
    Some(subheads) => subheads,
    None => detect_subheads(clean_body, options),
  };

  ArticleMeta {
    title: clean_text(&title, CLEANER_BOOK),
    author: clean_text(&author, CLEANER_BOOK),
    subheads,
  }
}

/// Char index of the first colon, ASCII or full-width.
fn colon_position(title: &str) -> Option<usize> {
  title.chars().position(|ch| ch == ':' || ch == '：')
}

/// The run following the first configured marker present in the page, up
/// to a tag delimiter or line break. Markers are tried in list order.
fn marker_run<'a>(html: &'a str, markers: &[String]) -> Option<&'a str> {
  for marker in markers {
    if let Some(position) = html.find(marker.as_str()) {
      let after = &html[position + marker.len()..];
      return Some(scan::run_until_terminator(after));
    }
  }

  None
}

/// Structural sub-headline guesser over the raw markup. Heading tags are
/// used for too many unrelated purposes to trust, so this declines and the
/// statistical detector decides.
fn subheads_from_html(_html: &str) -> Option<Vec<String>> {
  None
}

#[cfg(test)]
mod tests {
  use super::*;

  fn infer(html: &str) -> ArticleMeta {
    infer_meta(html, "", &Options::default())
  }

  #[test]
  fn short_colon_prefix_splits_author_from_title() {
    let meta = infer("<title>张三:我的故事</title>");

    assert_eq!(meta.author, "张三");
    assert_eq!(meta.title, "我的故事");
  }

  #[test]
  fn full_width_colon_splits_too() {
    let meta = infer("<title>李雷：回忆录</title>");

    assert_eq!(meta.author, "李雷");
    assert_eq!(meta.title, "回忆录");
  }

  #[test]
  fn deep_colon_leaves_title_untouched() {
    let title = "这是一个很长的标题没有冒号前缀的作者:子标题";
    let meta = infer(&format!("<title>{title}</title>"));

    assert_eq!(meta.author, "");
    assert_eq!(meta.title, title);
  }

  #[test]
  fn author_marker_in_body_is_consulted_when_title_has_no_colon() {
    let meta =
      infer("<title>无冒号标题</title><p>本文作者:李四<br>正文</p>");

    assert_eq!(meta.author, "李四");
    assert_eq!(meta.title, "无冒号标题");
  }

  #[test]
  fn marker_at_end_of_page_does_not_panic() {
    let meta = infer("<title>无冒号标题</title>文:王五");

    assert_eq!(meta.author, "王五");
  }

  #[test]
  fn deep_colon_suppresses_marker_lookup() {
    let title = "标题里很靠后的位置才有一个冒号:子标题";
    let meta = infer(&format!("<title>{title}</title><p>作者:李四</p>"));

    assert_eq!(meta.author, "");
  }

  #[test]
  fn malformed_title_degrades_to_sentinel() {
    let meta = infer("<title</title>");

    assert_eq!(meta.title, TITLE_SENTINEL);
    assert_eq!(meta.author, "");
  }

  #[test]
  fn missing_title_degrades_to_sentinel() {
    let meta = infer("<p>just a body</p>");

    assert_eq!(meta.title, TITLE_SENTINEL);
  }

  #[test]
  fn title_and_author_are_cleaned() {
    let meta = infer("<title>张三:我的　故事...</title>");

    assert_eq!(meta.author, "张三");
    assert_eq!(meta.title, "我的故事……");
  }

  #[test]
  fn subheads_come_from_the_statistical_detector() {
    let body = [
      "第一行的正文内容比较长一些足够",
      "第二行的正文内容也比较长一些",
      "小标题",
      "第四行的正文内容也比较长一些",
      "第五行的正文内容比较长一些足够",
    ]
    .join("\n");

    let meta =
      infer_meta("<title>无冒号标题</title>", &body, &Options::default());

    assert_eq!(meta.subheads, vec!["小标题"]);
  }
}
