use super::*;

/// Output sink for a fully assembled issue.
pub trait IssueRenderer {
  fn render(&self, issue: &Issue) -> String;
}

/// Markdown-flavoured plain-text renderer. Body lines present verbatim in
/// an article's sub-headline set render as headings; matching is exact
/// string equality.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl IssueRenderer for TextRenderer {
  fn render(&self, issue: &Issue) -> String {
    let mut out = String::new();

    out.push_str(&format!(
      "# 第{}期：{}\n\n",
      issue.issue_num, issue.grand_title
    ));

    if !issue.edi_remark.is_empty() {
      out.push_str("## 【编者的话】\n\n");
      out.push_str(issue.edi_remark.trim_end());
      out.push_str("\n\n");
    }

    let mut category = "";
    for article in issue {
      if !article.category.is_empty() && article.category != category {
        category = &article.category;
        out.push_str(&format!("# 【{category}】\n\n"));
      }

      if article.author.is_empty() {
        out.push_str(&format!("## {}\n\n", article.title));
      } else {
        out.push_str(&format!("## {}：{}\n\n", article.author, article.title));
      }

      for line in article.text.lines() {
        if article.subhead_lines.iter().any(|subhead| subhead == line) {
          out.push_str(&format!("### {line}\n\n"));
        } else {
          out.push_str(line);
          out.push('\n');
        }
      }

      out.push('\n');

      if !article.url.is_empty() {
        if article.author_bio.is_empty() {
          out.push_str(&format!("（原文链接：{}）\n\n", article.url));
        } else {
          out.push_str(&format!(
            "（{}，{}。原文链接：{}）\n\n",
            article.author, article.author_bio, article.url
          ));
        }
      }
    }

    out
  }
}
