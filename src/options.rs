use super::*;

const DEFAULT_USER_AGENT: &str =
  "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; Epress)";

/// Pipeline tuning knobs. The heuristic thresholds are empirically tuned
/// values carried as configuration, not derived.
#[derive(Debug, Clone)]
pub struct Options {
  pub author_markers: Vec<String>,
  pub author_prefix_max: usize,
  pub debug: bool,
  pub subhead_max_len: usize,
  pub subhead_ratio: f64,
  pub timeout: Duration,
  pub user_agent: String,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      author_markers: ["作者:", "文:", "作者：", "文："]
        .iter()
        .map(|marker| marker.to_string())
        .collect(),
      author_prefix_max: 4,
      debug: false,
      subhead_max_len: 12,
      subhead_ratio: 0.4,
      timeout: Duration::from_secs(30),
      user_agent: DEFAULT_USER_AGENT.to_string(),
    }
  }
}

impl Options {
  #[must_use]
  pub fn builder() -> OptionsBuilder {
    OptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct OptionsBuilder {
  inner: Options,
}

impl OptionsBuilder {
  #[must_use]
  pub fn build(self) -> Options {
    self.inner
  }

  #[must_use]
  pub fn author_markers<I, S>(self, markers: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: Options {
        author_markers: markers.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn author_prefix_max(self, author_prefix_max: usize) -> Self {
    Self {
      inner: Options {
        author_prefix_max,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn debug(self, debug: bool) -> Self {
    Self {
      inner: Options {
        debug,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn subhead_max_len(self, subhead_max_len: usize) -> Self {
    Self {
      inner: Options {
        subhead_max_len,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn subhead_ratio(self, subhead_ratio: f64) -> Self {
    Self {
      inner: Options {
        subhead_ratio,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn timeout(self, timeout: Duration) -> Self {
    Self {
      inner: Options {
        timeout,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn user_agent<S: Into<String>>(self, user_agent: S) -> Self {
    Self {
      inner: Options {
        user_agent: user_agent.into(),
        ..self.inner
      },
    }
  }
}
