use {
  epress::{Issue, IssueRenderer, Options, Pipeline, TextRenderer, TITLE_SENTINEL},
  pretty_assertions::assert_eq,
};

const PAGE: &str = concat!(
  "<html><head>",
  "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">",
  "<title>张三:我的故事</title>",
  "<style>body { margin: 0 }</style>",
  "</head><body>",
  "<p>这是第一段正文内容写得比较长足够平均</p>",
  "<p>这是第二段正文内容同样写得比较长一些</p>",
  "<p>回忆</p>",
  "<p>这是第四段正文内容同样写得比较长一些</p>",
  "<p>这是第五段正文内容写得比较长足够平均</p>",
  "<script>track();</script>",
  "</body></html>",
);

const BODY: &str = "这是第一段正文内容写得比较长足够平均\n\
                    这是第二段正文内容同样写得比较长一些\n\
                    回忆\n\
                    这是第四段正文内容同样写得比较长一些\n\
                    这是第五段正文内容写得比较长足够平均";

#[test]
fn analyse_html_extracts_body_and_metadata() {
  let pipeline = Pipeline::new(Options::default());

  let (body, meta) = pipeline.analyse_html(PAGE);

  assert_eq!(body, BODY);
  assert_eq!(meta.title, "我的故事");
  assert_eq!(meta.author, "张三");
  assert_eq!(meta.subheads, vec!["回忆"]);
}

#[test]
fn article_from_html_carries_cleaned_text_and_subheads() {
  let pipeline = Pipeline::new(Options::default());

  let article = pipeline.article_from_html(PAGE);

  assert_eq!(article.text, BODY);
  assert_eq!(article.subhead_lines, vec!["回忆"]);
  assert_eq!(article.title, "我的故事");
}

#[test]
fn empty_input_degrades_instead_of_failing() {
  let pipeline = Pipeline::new(Options::default());

  let (body, meta) = pipeline.analyse_html("");

  assert_eq!(body, "");
  assert_eq!(meta.title, TITLE_SENTINEL);
  assert_eq!(meta.author, "");
  assert!(meta.subheads.is_empty());
}

#[test]
fn rendered_issue_styles_detected_subheads() {
  let pipeline = Pipeline::new(Options::default());

  let mut issue = Issue::new("101", "试刊", "");
  issue.add_article(pipeline.article_from_html(PAGE));

  let rendered = TextRenderer.render(&issue);

  assert!(rendered.contains("## 张三：我的故事"));
  assert!(rendered.contains("### 回忆\n"));
  assert!(rendered.contains("这是第一段正文内容写得比较长足够平均\n"));
}
