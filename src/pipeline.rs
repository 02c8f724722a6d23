use super::*;

/// End-to-end driver: fetch a page, extract its body, clean the text, and
/// infer article metadata. Collaborators are injectable; the defaults are
/// the tag-strip extractor and the chardetng guesser.
pub struct Pipeline {
  extractor: Box<dyn ContentExtractor>,
  fetcher: Fetcher,
  options: Options,
}

impl Pipeline {
  pub fn new(options: Options) -> Self {
    Self {
      extractor: Box::new(TagStripExtractor),
      fetcher: Fetcher::new(&options),
      options,
    }
  }

  #[must_use]
  pub fn with_extractor(mut self, extractor: Box<dyn ContentExtractor>) -> Self {
    self.extractor = extractor;
    self
  }

  #[must_use]
  pub fn with_guesser(mut self, guesser: Box<dyn CharsetGuesser>) -> Self {
    self.fetcher = Fetcher::with_guesser(&self.options, guesser);
    self
  }

  /// Body text and inferred metadata for a raw page. Never fails: the
  /// heuristics degrade to sentinel or empty values on malformed input.
  pub fn analyse_html(&self, html: &str) -> (String, ArticleMeta) {
    let body = main_text(self.extractor.as_ref(), html);
    let meta = infer_meta(html, &body, &self.options);

    (body, meta)
  }

  /// Assemble an article from raw markup; the body is cleaned so that
  /// sub-headline lines match it by exact string equality.
  pub fn article_from_html(&self, html: &str) -> Article {
    let (body, meta) = self.analyse_html(html);

    let mut article = Article {
      title: meta.title,
      author: meta.author,
      text: clean_text(&body, CLEANER_BOOK),
      ..Article::default()
    };

    for subhead in meta.subheads {
      article.add_subhead(&subhead);
    }

    article
  }

  pub fn article_from_url(&self, url: &str) -> Result<Article> {
    let page = self.fetcher.fetch(url)?;
    debug!(
      url = page.final_url.as_str(),
      charset = page.charset.as_str(),
      "fetched page"
    );

    let mut article = self.article_from_html(&page.text);
    article.url = page.url;
    article.url_alt = page.final_url;

    Ok(article)
  }

  pub fn options(&self) -> &Options {
    &self.options
  }
}
