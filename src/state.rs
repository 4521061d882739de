use super::*;

pub(crate) struct State {
  error: Option<String>,
  form: SearchForm,
  help: HelpView,
  list_height: usize,
  loading: bool,
  message: String,
  mode: Mode,
  next_request_id: u64,
  no_results: bool,
  pending_effects: Vec<Effect>,
  pending_search: Option<PendingSearch>,
  results: ListView<Post>,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn close_comments(&mut self) {
    if matches!(self.mode, Mode::Comments(_)) {
      self.mode = Mode::Results;
      self.set_status(RESULTS_STATUS);
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::FocusForm => self.focus_form(),
      Command::FocusResults => self.focus_results(),
      Command::SubmitSearch => self.submit_search(),
      Command::SelectNext => self.results.move_by(1),
      Command::SelectPrevious => self.results.move_by(-1),
      Command::PageDown => {
        let jump = self.page_jump();
        self.results.move_by(jump);
      }
      Command::PageUp => {
        let jump = self.page_jump();
        self.results.move_by(-jump);
      }
      Command::SelectFirst => self.results.select(0),
      Command::SelectLast => self.results.select_last(),
      Command::OpenComments => self.open_comments(),
      Command::CloseComments => self.close_comments(),
      Command::OpenPost => self.open_post(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  fn focus_form(&mut self) {
    self.mode = Mode::Form;
    self.set_status(FORM_STATUS);
  }

  fn focus_results(&mut self) {
    if !self.results.is_empty() {
      self.mode = Mode::Results;
      self.set_status(RESULTS_STATUS);
    }
  }

  pub(crate) fn form(&self) -> &SearchForm {
    &self.form
  }

  pub(crate) fn form_command(&mut self, key: KeyEvent) -> Option<Command> {
    if !matches!(self.mode, Mode::Form) {
      return None;
    }

    let modifiers = key.modifiers;

    let command = match key.code {
      KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::Quit
      }
      KeyCode::Esc => {
        if self.results.is_empty() {
          Command::Quit
        } else {
          Command::FocusResults
        }
      }
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Tab | KeyCode::Down => {
        self.form.focus_next();
        Command::None
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.form.focus_previous();
        Command::None
      }
      KeyCode::Backspace => {
        self.form.backspace();
        Command::None
      }
      KeyCode::Char(ch) => {
        if !modifiers.intersects(
          KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
        ) {
          self.form.insert(ch);
        }

        Command::None
      }
      _ => Command::None,
    };

    Some(command)
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::SearchResults { request_id, result } => {
        let Some(pending) = self
          .pending_search
          .take_if(|pending| pending.request_id == request_id)
        else {
          tracing::debug!(request_id, "ignoring superseded search response");
          return;
        };

        self.loading = false;

        let query = truncate(&pending.query, 40);

        match result {
          Ok(posts) => {
            tracing::info!(
              query = %pending.query,
              posts = posts.len(),
              "search finished"
            );

            self.no_results = posts.is_empty();
            self.results = ListView::new(posts);

            if self.results.is_empty() {
              if matches!(self.mode, Mode::Comments(_)) {
                self.mode = Mode::Form;
              }

              self.set_status(&format!("No results for \"{query}\""));
            } else {
              if !matches!(self.mode, Mode::Results) {
                self.mode = Mode::Results;
              }

              let count = self.results.len();

              self.set_status(&match count {
                1 => format!("Found 1 post for \"{query}\""),
                _ => format!("Found {count} posts for \"{query}\""),
              });
            }
          }
          Err(error) => {
            tracing::warn!(
              query = %pending.query,
              error = ?error,
              "search failed"
            );

            self.error = Some(SEARCH_ERROR.into());
            self.set_status(SEARCH_ERROR);
          }
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  pub(crate) fn new() -> Self {
    Self {
      error: None,
      form: SearchForm::default(),
      help: HelpView::new(),
      list_height: 0,
      loading: false,
      message: FORM_STATUS.into(),
      mode: Mode::Form,
      next_request_id: 0,
      no_results: false,
      pending_effects: Vec::new(),
      pending_search: None,
      results: ListView::default(),
      transient_message: None,
    }
  }

  pub(crate) fn no_results(&self) -> bool {
    self.no_results
  }

  fn open_comments(&mut self) {
    if let Some(post) = self.results.selected_item() {
      self.mode = Mode::Comments(CommentView::new(post));
      self.set_status(COMMENTS_STATUS);
    }
  }

  fn open_post(&mut self) {
    let url = match &self.mode {
      Mode::Comments(view) => Some(view.link().to_string()),
      Mode::Results => {
        self.results.selected_item().map(|post| post.url.clone())
      }
      Mode::Form => None,
    };

    if let Some(url) = url {
      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn page_jump(&self) -> isize {
    isize::try_from(self.list_height.saturating_sub(1).max(1))
      .unwrap_or(isize::MAX)
  }

  pub(crate) fn results(&self) -> &ListView<Post> {
    &self.results
  }

  pub(crate) fn results_mut(&mut self) -> &mut ListView<Post> {
    &mut self.results
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  fn set_status(&mut self, status: &str) {
    if !self.help.is_visible() {
      self.transient_message = None;
      self.message = status.into();
    }
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn submit_search(&mut self) {
    if self.loading {
      return;
    }

    let request = match self.form.to_request() {
      Ok(request) => request,
      Err(error) => {
        self.set_transient_message(error.to_string());
        return;
      }
    };

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.loading = true;
    self.error = None;
    self.no_results = false;

    self.pending_search = Some(PendingSearch {
      query: request.query.clone(),
      request_id,
    });

    self.set_status(&format!(
      "Searching for \"{}\"...",
      truncate(&request.query, 40)
    ));

    self
      .pending_effects
      .push(Effect::Search { request, request_id });
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
