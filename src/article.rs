use super::*;

/// A single extracted article, owned by the enclosing [`Issue`] once added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
  pub title: String,
  pub author: String,
  pub author_bio: String,
  pub text: String,
  pub subhead_lines: Vec<String>,
  pub comments: Vec<String>,
  pub category: String,
  pub portrait_path: String,
  pub url: String,
  pub url_alt: String,
}

impl Article {
  pub fn add_comment(&mut self, comment: &str) {
    if !self.comments.iter().any(|existing| existing == comment) {
      self.comments.push(comment.to_string());
    }
  }

  pub fn add_subhead(&mut self, subhead: &str) {
    if !self.subhead_lines.iter().any(|existing| existing == subhead) {
      self.subhead_lines.push(subhead.to_string());
    }
  }

  pub fn new() -> Self {
    Self::default()
  }

  pub fn remove_comment(&mut self, comment: &str) {
    self.comments.retain(|existing| existing != comment);
  }

  pub fn remove_subhead(&mut self, subhead: &str) {
    self.subhead_lines.retain(|existing| existing != subhead);
  }
}

/// One magazine issue: header strings plus articles in publication order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
  pub issue_num: String,
  pub grand_title: String,
  pub edi_remark: String,
  articles: Vec<Article>,
}

impl Issue {
  pub fn add_article(&mut self, article: Article) {
    self.articles.push(article);
  }

  pub fn articles(&self) -> &[Article] {
    &self.articles
  }

  /// Remove the first article equal to `article`. Fails when no article
  /// matches.
  pub fn delete_article(&mut self, article: &Article) -> Result {
    let position = self
      .articles
      .iter()
      .position(|existing| existing == article)
      .ok_or(Error::ArticleNotFound)?;

    self.articles.remove(position);

    Ok(())
  }

  pub fn new(issue_num: &str, grand_title: &str, edi_remark: &str) -> Self {
    Self {
      issue_num: issue_num.to_string(),
      grand_title: grand_title.to_string(),
      edi_remark: edi_remark.to_string(),
      articles: Vec::new(),
    }
  }
}

impl<'a> IntoIterator for &'a Issue {
  type Item = &'a Article;
  type IntoIter = std::slice::Iter<'a, Article>;

  fn into_iter(self) -> Self::IntoIter {
    self.articles.iter()
  }
}
