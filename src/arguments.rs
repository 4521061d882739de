use super::*;

#[derive(Parser)]
#[command(
  version,
  about = "Search Reddit comments from the terminal",
  args_conflicts_with_subcommands = true
)]
pub(crate) struct Arguments {
  #[command(flatten)]
  search: SearchArguments,
  #[command(subcommand)]
  subcommand: Option<Subcommand>,
}

impl Arguments {
  pub(crate) async fn run(self) -> Result {
    match self.subcommand.unwrap_or(Subcommand::Search(self.search)) {
      Subcommand::Search(arguments) => arguments.run(),
      Subcommand::Serve(arguments) => arguments.run().await,
    }
  }
}

#[derive(Clone, clap::Args)]
pub(crate) struct SearchArguments {
  /// Append logs to this file. The terminal is owned by the UI, so nothing is
  /// logged without it.
  #[arg(long, env = "RCS_LOG_FILE")]
  log_file: Option<PathBuf>,
  /// Base URL of the search server.
  #[arg(long, env = "RCS_SERVER", default_value = "http://localhost:8080")]
  server: String,
}

impl SearchArguments {
  fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
  }

  fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    disable_raw_mode()?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    terminal.show_cursor()?;

    Ok(())
  }

  fn run(self) -> Result {
    if let Some(path) = &self.log_file {
      logging::init_file(path)?;
    }

    let client = Client::new(&self.server).context("could not build client")?;

    tracing::info!(server = %self.server, "starting search ui");

    let mut terminal = Self::initialize_terminal()?;

    let result = App::new(client).run(&mut terminal);

    Self::restore_terminal(&mut terminal)?;

    result
  }
}

#[derive(Clone, clap::Args)]
pub(crate) struct ServeArguments {
  /// Address to listen on.
  #[arg(long, env = "RCS_BIND", default_value = "127.0.0.1")]
  pub(crate) bind: IpAddr,
  /// Google Custom Search API key.
  #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
  pub(crate) google_api_key: String,
  /// Google Custom Search engine id.
  #[arg(long, env = "GOOGLE_CX")]
  pub(crate) google_cx: String,
  /// Port to listen on.
  #[arg(long, env = "PORT", default_value_t = 8080)]
  pub(crate) port: u16,
  /// Reddit application client id.
  #[arg(long, env = "REDDIT_CLIENT_ID")]
  pub(crate) reddit_client_id: String,
  /// Reddit application secret.
  #[arg(long, env = "REDDIT_SECRET", hide_env_values = true)]
  pub(crate) reddit_secret: String,
  /// User agent sent to Reddit.
  #[arg(long, env = "REDDIT_USER_AGENT", default_value = "rcs/0.1")]
  pub(crate) reddit_user_agent: String,
}

impl ServeArguments {
  async fn run(self) -> Result {
    logging::init_stderr()?;

    server::serve(self).await
  }
}

#[derive(clap::Subcommand)]
enum Subcommand {
  /// Open the search form (default).
  Search(SearchArguments),
  /// Run the search API server.
  Serve(ServeArguments),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_search_ui() {
    let arguments = Arguments::try_parse_from(["rcs"]).unwrap();

    assert!(arguments.subcommand.is_none());
    assert_eq!(arguments.search.server, "http://localhost:8080");
  }

  #[test]
  fn serve_reads_credentials_from_flags() {
    let arguments = Arguments::try_parse_from([
      "rcs",
      "serve",
      "--port",
      "9000",
      "--google-api-key",
      "key",
      "--google-cx",
      "cx",
      "--reddit-client-id",
      "id",
      "--reddit-secret",
      "secret",
    ])
    .unwrap();

    let Some(Subcommand::Serve(serve)) = arguments.subcommand else {
      panic!("expected serve subcommand");
    };

    assert_eq!(serve.port, 9000);
    assert_eq!(serve.google_cx, "cx");
    assert_eq!(serve.reddit_user_agent, "rcs/0.1");
  }
}
