use {
  anyhow::Context,
  clap::Parser,
  epress::{Issue, IssueRenderer, Options, Pipeline, TextRenderer},
  std::{fs, io, path::PathBuf, process, time::Duration},
  tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
#[command(name = "epress")]
#[command(
  about = "Fetch web articles and assemble e-magazine issues",
  long_about = None
)]
struct Arguments {
  /// Article URLs to fetch, in publication order
  #[arg(value_name = "URL", required_unless_present = "input")]
  urls: Vec<String>,

  /// Parse a local HTML file instead of fetching
  #[arg(long, value_name = "FILE", conflicts_with = "urls")]
  input: Option<PathBuf>,

  /// Write the rendered output here instead of stdout
  #[arg(long, value_name = "FILE")]
  out: Option<PathBuf>,

  /// Print articles as JSON instead of rendering an issue
  #[arg(long)]
  json: bool,

  /// Issue number for the rendered document
  #[arg(long, value_name = "NUM", default_value = "")]
  issue_num: String,

  /// Issue title for the rendered document
  #[arg(long, value_name = "TITLE", default_value = "")]
  grand_title: String,

  /// UTF-8 file holding the editor's remark
  #[arg(long, value_name = "FILE")]
  remark_file: Option<PathBuf>,

  /// Fetch timeout in seconds
  #[arg(long, value_name = "SECS", default_value_t = 30)]
  timeout_secs: u64,

  /// Verbose logging (also enabled by a DEBUG file in the working dir)
  #[arg(long)]
  debug: bool,
}

impl Arguments {
  fn run(self) -> Result {
    let debug = self.debug || debug_marker_present();

    let default_filter = if debug { "epress=debug" } else { "epress=warn" };
    tracing_subscriber::fmt()
      .with_env_filter(
        EnvFilter::try_from_default_env()
          .unwrap_or_else(|_| EnvFilter::new(default_filter)),
      )
      .with_writer(io::stderr)
      .init();

    let options = Options::builder()
      .timeout(Duration::from_secs(self.timeout_secs))
      .debug(debug)
      .build();

    let pipeline = Pipeline::new(options);

    let mut issue = Issue::new(&self.issue_num, &self.grand_title, "");

    if let Some(path) = &self.remark_file {
      issue.edi_remark = fs::read_to_string(path).with_context(|| {
        format!("failed to read remark from `{}`", path.display())
      })?;
    }

    if let Some(path) = &self.input {
      let html = fs::read_to_string(path).with_context(|| {
        format!("failed to read file from `{}`", path.display())
      })?;

      issue.add_article(pipeline.article_from_html(&html));
    } else {
      for url in &self.urls {
        match pipeline.article_from_url(url) {
          Ok(article) => issue.add_article(article),
          // A dead source fails per page, never the whole batch.
          Err(error) => eprintln!("skipping `{url}`: {error}"),
        }
      }
    }

    let output = if self.json {
      serde_json::to_string_pretty(issue.articles())
        .context("failed to serialize articles")?
    } else {
      TextRenderer.render(&issue)
    };

    match &self.out {
      Some(path) => fs::write(path, output).with_context(|| {
        format!("failed to write output to `{}`", path.display())
      })?,
      None => println!("{output}"),
    }

    Ok(())
  }
}

/// A `DEBUG` marker file in the working directory enables verbose logging;
/// any error probing it counts as absent.
fn debug_marker_present() -> bool {
  fs::metadata("DEBUG").is_ok()
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
