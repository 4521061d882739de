use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  fn area(area: Rect) -> Rect {
    let (lines, widest) =
      HELP_TEXT.lines().fold((0usize, 0usize), |(n, w), line| {
        (n.saturating_add(1), w.max(line.chars().count()))
      });

    let to_u16 = |value: usize| u16::try_from(value).unwrap_or(u16::MAX);

    let width = to_u16(widest.saturating_add(4))
      .min(area.width.saturating_sub(2))
      .max(1);

    let height = to_u16(lines.saturating_add(2))
      .min(area.height.saturating_sub(2))
      .max(1);

    Rect::new(
      area.x + area.width.saturating_sub(width) / 2,
      area.y + area.height.saturating_sub(height) / 2,
      width.min(area.width),
      height.min(area.height),
    )
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let area = Self::area(frame.area());

    frame.render_widget(Clear, area);

    frame.render_widget(
      Paragraph::new(HELP_TEXT)
        .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: false }),
      area,
    );
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String) {
    if !self.visible {
      return;
    }

    if let Some(backup) = self.message_backup.take() {
      *message = backup;
    }

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(std::mem::replace(message, HELP_STATUS.into()));

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn show_and_hide_restore_status_message() {
    let mut help = HelpView::new();
    let mut message = RESULTS_STATUS.to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.hide(&mut message);
    assert!(!help.is_visible());
    assert_eq!(message, RESULTS_STATUS);
  }

  #[test]
  fn area_fits_inside_small_terminals() {
    let area = HelpView::area(Rect::new(0, 0, 20, 10));

    assert!(area.width <= 20);
    assert!(area.height <= 10);
  }
}
