use super::*;

/// A fetched and decoded page.
#[derive(Debug, Clone)]
pub struct Page {
  pub url: String,
  pub final_url: String,
  pub status: reqwest::StatusCode,
  pub redirected: bool,
  pub charset: String,
  pub text: String,
}

/// Blocking page fetcher with charset resolution. One unreachable source
/// fails per-page, bounded by the configured timeout.
pub struct Fetcher {
  client: reqwest::blocking::Client,
  guesser: Box<dyn CharsetGuesser>,
}

impl Fetcher {
  pub fn new(options: &Options) -> Self {
    Self::with_guesser(options, Box::new(ChardetngGuesser))
  }

  pub fn with_guesser(
    options: &Options,
    guesser: Box<dyn CharsetGuesser>,
  ) -> Self {
    let client = reqwest::blocking::Client::builder()
      .user_agent(options.user_agent.clone())
      .connect_timeout(options.timeout)
      .timeout(options.timeout)
      .build()
      .unwrap_or_else(|_| reqwest::blocking::Client::new());

    Self { client, guesser }
  }

  /// GET a page and decode it. Redirects are followed and recorded on the
  /// result; non-2xx responses surface as [`Error::HttpStatus`] with the
  /// code, never as partially-read text.
  pub fn fetch(&self, url: &str) -> Result<Page> {
    let requested = normalize_url(url);

    let parsed =
      Url::parse(&requested).map_err(|source| Error::BadUrl {
        url: requested.clone(),
        source,
      })?;
    let requested = parsed.to_string();

    let response = self.client.get(parsed).send().map_err(|source| {
      Error::ConnectionFailure {
        url: requested.clone(),
        source,
      }
    })?;

    let status = response.status();
    let final_url = response.url().to_string();
    let redirected = final_url != requested;

    if !status.is_success() {
      debug!(%status, url = requested.as_str(), "non-success response");
      return Err(Error::HttpStatus {
        url: requested,
        status,
      });
    }

    let bytes = response.bytes().map_err(|source| Error::ConnectionFailure {
      url: requested.clone(),
      source,
    })?;

    let charset = resolve_charset(&bytes, self.guesser.as_ref());
    let text = decode_page(&bytes, &charset);

    if redirected {
      debug!(
        from = requested.as_str(),
        to = final_url.as_str(),
        "request was redirected"
      );
    }

    Ok(Page {
      url: requested,
      final_url,
      status,
      redirected,
      charset,
      text,
    })
  }
}

/// Prepend a scheme when the URL lacks one; sources are routinely pasted
/// without it.
pub fn normalize_url(url: &str) -> String {
  let trimmed = url.trim();

  if trimmed.starts_with("http") {
    trimmed.to_string()
  } else {
    format!("http://{trimmed}")
  }
}
