use {
  chardetng::EncodingDetector,
  encoding_rs::{Encoding, UTF_8},
  regex::bytes::Regex,
  serde::{Deserialize, Serialize},
  std::{sync::LazyLock, time::Duration},
  tracing::debug,
  url::Url,
};

pub use crate::{
  article::{Article, Issue},
  charset::{
    decode_page, resolve_charset, ChardetngGuesser, CharsetGuesser, NoGuesser,
  },
  cleaner::{clean_text, CLEANER_BOOK},
  error::Error,
  extract::{main_text, ContentExtractor, TagStripExtractor},
  fetch::{normalize_url, Fetcher, Page},
  meta::{infer_meta, ArticleMeta, TITLE_SENTINEL},
  options::{Options, OptionsBuilder},
  pipeline::Pipeline,
  render::{IssueRenderer, TextRenderer},
  subhead::detect_subheads,
};

mod article;
mod charset;
mod cleaner;
mod error;
mod extract;
mod fetch;
mod meta;
mod options;
mod pipeline;
mod render;
mod scan;
mod subhead;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
