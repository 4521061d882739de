use {
  anyhow::{Context, anyhow, bail},
  api_error::{ApiError, ErrorBody},
  app::App,
  arguments::{Arguments, ServeArguments},
  async_trait::async_trait,
  axum::{
    Json, Router,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
  },
  chrono::{DateTime, NaiveDate, Utc},
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::{Comment, Reply},
  comment_entry::CommentEntry,
  comment_node::CommentNode,
  comment_view::CommentView,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  form::{FormField, SearchForm},
  futures::stream::{self, StreamExt},
  google::GoogleSearch,
  help_view::HelpView,
  list_view::ListView,
  listing::{Listing, parse_thread},
  mode::Mode,
  pending_search::PendingSearch,
  post::Post,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
  },
  reddit::{RedditClient, Thread},
  search_request::{RequestError, SearchRequest},
  searcher::{RedditSearcher, Searcher},
  selection::select_comments,
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Stdout},
    net::IpAddr,
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::{Duration, Instant},
  },
  tokio::{
    net::TcpListener,
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tower_http::cors::{Any, CorsLayer},
  transient_message::TransientMessage,
  utils::{
    decode_entities, deserialize_count, deserialize_optional_date,
    deserialize_optional_usize, format_score, truncate, wrap_text,
  },
};

mod api_error;
mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_entry;
mod comment_node;
mod comment_view;
mod effect;
mod event;
mod form;
mod google;
mod help_view;
mod list_view;
mod listing;
mod logging;
mod mode;
mod pending_search;
mod post;
mod reddit;
mod search_request;
mod searcher;
mod selection;
mod server;
mod state;
mod transient_message;
mod utils;

const BASE_INDENT: &str = " ";

const COMMENTS_STATUS: &str = "↑/k up • ↓/j down • enter toggle replies • o open post • esc back • ? help";

const DATE_FORMAT: &str = "%Y-%m-%d";

const DEFAULT_NUM_COMMENTS: usize = 5;

const FORM_STATUS: &str =
  "tab/↓ next field • shift+tab/↑ previous • enter search • esc results";

const HELP_STATUS: &str = "Press ? or esc to close help";
const HELP_TITLE: &str = "Help";

const HELP_TEXT: &str = "\
Search form:
  tab / ↓       next field
  shift+tab / ↑ previous field
  space         toggle replies (on the replies field)
  enter         submit the search
  esc           go to the results (quits when there are none)
  ctrl+c        quit

Results:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  home    jump to first post
  end     jump to last post
  enter   show comments for the selected post
  o       open the selected post in your browser
  / or i  edit the search form
  q       quit
  ?       toggle this help

Comments:
  ↑ / k   move selection up
  ↓ / j   move selection down
  ← / h   hide replies or go to parent comment
  → / l   show replies or go to first reply
  enter   show or hide replies
  o       open the post in your browser
  esc     return to the results
";

const MAX_NUM_COMMENTS: usize = 50;

const RESULTS_STATUS: &str = "↑/k up • ↓/j down • enter comments • o open post • / edit search • q quit • ? help";

const SEARCH_ERROR: &str = "An error occurred";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() {
  if let Err(error) = Arguments::parse().run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
