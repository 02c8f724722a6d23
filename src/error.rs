#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("article not present in issue")]
  ArticleNotFound,
  #[error("bad url `{url}`: {source}")]
  BadUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },
  #[error("connection failure for `{url}`: {source}")]
  ConnectionFailure {
    url: String,
    #[source]
    source: reqwest::Error,
  },
  #[error("server returned {status} for `{url}`")]
  HttpStatus {
    url: String,
    status: reqwest::StatusCode,
  },
}
