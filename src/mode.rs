use super::*;

pub(crate) enum Mode {
  Comments(CommentView),
  Form,
  Results,
}

impl Mode {
  fn comments_key(
    view: &mut CommentView,
    key: KeyEvent,
    page: usize,
  ) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') => Command::Quit,
      KeyCode::Esc => Command::CloseComments,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('o' | 'O') => Command::OpenPost,
      KeyCode::Down | KeyCode::Char('j') => {
        view.select_next();
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        view.select_previous();
        Command::None
      }
      KeyCode::PageDown => {
        view.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        view.page_up(page);
        Command::None
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        view.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        view.page_up(page);
        Command::None
      }
      KeyCode::Left | KeyCode::Char('h') => {
        view.collapse_selected();
        Command::None
      }
      KeyCode::Right | KeyCode::Char('l') => {
        view.expand_selected();
        Command::None
      }
      KeyCode::Enter | KeyCode::Char(' ') => {
        view.toggle_selected();
        Command::None
      }
      KeyCode::Home => {
        view.select_index_at(0);
        Command::None
      }
      KeyCode::End => {
        view.select_index_at(usize::MAX);
        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    if key.code == KeyCode::Char('c')
      && key.modifiers.contains(KeyModifiers::CONTROL)
    {
      return Command::Quit;
    }

    match self {
      Mode::Comments(view) => Self::comments_key(view, key, page),
      Mode::Form => Command::None,
      Mode::Results => Self::results_key(key),
    }
  }

  fn results_key(key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('/' | 'i') | KeyCode::Tab => Command::FocusForm,
      KeyCode::Down | KeyCode::Char('j') => Command::SelectNext,
      KeyCode::Up | KeyCode::Char('k') => Command::SelectPrevious,
      KeyCode::PageDown => Command::PageDown,
      KeyCode::PageUp => Command::PageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::PageUp
      }
      KeyCode::Home => Command::SelectFirst,
      KeyCode::End => Command::SelectLast,
      KeyCode::Enter => Command::OpenComments,
      KeyCode::Char('o' | 'O') => Command::OpenPost,
      _ => Command::None,
    }
  }
}
