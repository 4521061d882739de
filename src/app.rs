use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(entry: &CommentEntry, available_width: u16) -> ListItem {
    let indent = format!("{BASE_INDENT}{}", "    ".repeat(entry.depth));

    let mut header = vec![Span::raw(indent.clone())];

    if entry.has_children() {
      header.push(Span::raw(if entry.expanded { "[-] " } else { "[+] " }));
    }

    header.push(Span::styled(
      entry.header(),
      Style::default().fg(Color::Yellow),
    ));

    let mut lines = vec![Line::from(header)];

    let wrap_width = usize::from(available_width)
      .saturating_sub(indent.chars().count())
      .max(1);

    for line in wrap_text(&entry.body, wrap_width) {
      lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(line, Style::default().fg(Color::White)),
      ]));
    }

    lines.push(Line::from(Span::raw(indent)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let form_height =
      u16::try_from(FormField::ORDER.len() + 3).unwrap_or(u16::MAX);

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(form_height),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.draw_form(frame, layout[0]);

    self.draw_results(frame, layout[1]);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_form(&self, frame: &mut Frame, area: Rect) {
    let form = self.state.form();
    let editing = matches!(self.state.mode(), Mode::Form);

    let label_width = FormField::ORDER
      .iter()
      .map(|field| field.label().chars().count())
      .max()
      .unwrap_or(0);

    let mut lines = Vec::with_capacity(FormField::ORDER.len() + 1);
    let mut cursor = None;

    for (row, field) in FormField::ORDER.iter().enumerate() {
      let focused = editing && form.focus == *field;

      let label = format!("{BASE_INDENT}{:<label_width$} : ", field.label());

      let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::DarkGray)
      };

      let value = form.value(*field);

      let value_span = if value.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
      } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
      };

      if focused && *field != FormField::IncludeReplies {
        let column = label.chars().count() + value.chars().count();

        cursor = Some((
          area
            .x
            .saturating_add(1)
            .saturating_add(u16::try_from(column).unwrap_or(u16::MAX)),
          area
            .y
            .saturating_add(1)
            .saturating_add(u16::try_from(row).unwrap_or(u16::MAX)),
        ));
      }

      lines.push(Line::from(vec![
        Span::styled(label, label_style),
        value_span,
      ]));
    }

    let button = if self.state.is_loading() {
      Span::styled("[ Loading... ]", Style::default().fg(Color::DarkGray))
    } else {
      Span::styled(
        "[ Search ]",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      )
    };

    lines.push(Line::from(vec![Span::raw(BASE_INDENT), button]));

    let border_style = if editing {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    };

    frame.render_widget(
      Paragraph::new(lines).block(
        Block::default()
          .title("Search Reddit comments")
          .borders(Borders::ALL)
          .border_style(border_style),
      ),
      area,
    );

    if let Some(position) = cursor
      && !self.state.help_is_visible()
    {
      frame.set_cursor_position(position);
    }
  }

  fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
    let mut area = area;

    if let Some(error) = self.state.error()
      && !matches!(self.state.mode(), Mode::Comments(_))
    {
      let [error_area, rest] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)])
          .areas(area);

      frame.render_widget(
        Paragraph::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ])),
        error_area,
      );

      area = rest;
    }

    self.state.set_list_height(area.height as usize);

    let placeholder = if self.state.is_loading()
      && self.state.results().is_empty()
    {
      Some(Span::raw("Loading..."))
    } else if self.state.no_results() {
      Some(Span::raw("No results found."))
    } else if self.state.results().is_empty() && self.state.error().is_none()
    {
      Some(Span::styled(
        "Type a query and press enter to search.",
        Style::default().fg(Color::DarkGray),
      ))
    } else {
      None
    };

    if let Some(text) = placeholder {
      frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(BASE_INDENT), text])),
        area,
      );
      return;
    }

    let highlight = Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD);

    if let Mode::Comments(view) = self.state.mode_mut() {
      let (visible, selected_pos) = view.visible_with_selection();

      let mut items = vec![ListItem::new(vec![
        Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(
            view.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
          ),
        ]),
        Line::from(Span::raw(BASE_INDENT)),
      ])];

      if visible.is_empty() {
        items.push(ListItem::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::raw("No comments."),
        ])));
      } else {
        items.extend(visible.iter().map(|&idx| {
          Self::comment_list_item(&view.entries[idx], area.width)
        }));
      }

      let selected = selected_pos.map(|pos| pos + 1);

      let mut list_state = ListState::default()
        .with_selected(selected)
        .with_offset(view.offset.min(selected.unwrap_or(0)));

      frame.render_stateful_widget(
        List::new(items).highlight_style(highlight),
        area,
        &mut list_state,
      );

      view.offset = list_state.offset();

      return;
    }

    let results = self.state.results_mut();

    let items = results
      .items()
      .iter()
      .map(|post| {
        ListItem::new(vec![
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(post.title.clone(), Style::default().fg(Color::White)),
          ]),
          Line::from(vec![
            Span::raw(BASE_INDENT),
            Span::styled(
              truncate(
                &post.detail(),
                usize::from(area.width).saturating_sub(2),
              ),
              Style::default().fg(Color::DarkGray),
            ),
          ]),
          Line::from(Span::raw(BASE_INDENT)),
        ])
      })
      .collect::<Vec<_>>();

    let mut list_state = ListState::default()
      .with_selected(results.selected_index())
      .with_offset(results.offset());

    frame.render_stateful_widget(
      List::new(items).highlight_style(highlight),
      area,
      &mut list_state,
    );

    results.set_offset(list_state.offset());
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Search {
        request,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::SearchResults {
            request_id,
            result: client.search(&request).await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          tracing::warn!(%url, %error, "could not open browser");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.form_command(key) {
        command
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
