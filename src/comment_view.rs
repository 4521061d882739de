use super::*;

pub(crate) struct CommentView {
  pub(crate) entries: Vec<CommentEntry>,
  pub(crate) link: String,
  pub(crate) offset: usize,
  pub(crate) selected: Option<usize>,
  pub(crate) title: String,
}

impl CommentView {
  pub(crate) fn collapse_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.expanded && entry.has_children() {
        entry.expanded = false;
      } else if let Some(parent) = entry.parent {
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  fn ensure_selection_visible(&mut self) {
    let mut current = self.selected;

    while let Some(idx) = current {
      if self.is_visible(idx) {
        self.selected = Some(idx);
        return;
      }

      current = self.entries.get(idx).and_then(|entry| entry.parent);
    }

    self.selected = self.visible_indexes().first().copied();
  }

  pub(crate) fn expand_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if !entry.has_children() {
        return;
      }

      if entry.expanded {
        self.selected = entry.children.first().copied();
      } else {
        entry.expanded = true;
      }
    }

    self.ensure_selection_visible();
  }

  fn is_visible(&self, idx: usize) -> bool {
    let mut current = self.entries.get(idx).and_then(|entry| entry.parent);

    while let Some(parent) = current {
      let Some(entry) = self.entries.get(parent) else {
        break;
      };

      if !entry.expanded {
        return false;
      }

      current = entry.parent;
    }

    true
  }

  pub(crate) fn link(&self) -> &str {
    &self.link
  }

  fn move_by(&mut self, delta: isize) {
    let (visible, selected_pos) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let current = selected_pos.unwrap_or(0);

    let target = if delta >= 0 {
      current
        .saturating_add(delta.unsigned_abs())
        .min(visible.len().saturating_sub(1))
    } else {
      current.saturating_sub(delta.unsigned_abs())
    };

    self.selected = Some(visible[target]);
  }

  pub(crate) fn new(post: &Post) -> Self {
    let mut entries = Vec::new();

    for comment in &post.comments {
      let idx = entries.len();

      entries.push(CommentEntry {
        body: comment.body.clone(),
        children: Vec::new(),
        depth: 0,
        expanded: false,
        parent: None,
        score: comment.score,
      });

      for reply in &comment.replies {
        let child = entries.len();

        entries.push(CommentEntry {
          body: reply.body.clone(),
          children: Vec::new(),
          depth: 1,
          expanded: false,
          parent: Some(idx),
          score: reply.score,
        });

        entries[idx].children.push(child);
      }
    }

    let selected = (!entries.is_empty()).then_some(0);

    Self {
      entries,
      link: post.url.clone(),
      offset: 0,
      selected,
      title: post.title.clone(),
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(-isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    let (visible, _) = self.visible_with_selection();

    self.selected = visible
      .get(pos.min(visible.len().saturating_sub(1)))
      .copied();
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.has_children() {
        entry.expanded = !entry.expanded;
      } else if let Some(parent) = entry.parent {
        // Toggling on a reply hides its own section.
        self.entries[parent].expanded = false;
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn visible_indexes(&self) -> Vec<usize> {
    (0..self.entries.len())
      .filter(|&idx| self.is_visible(idx))
      .collect()
  }

  pub(crate) fn visible_with_selection(&self) -> (Vec<usize>, Option<usize>) {
    let visible = self.visible_indexes();

    let selected_pos = self
      .selected
      .and_then(|selected| visible.iter().position(|&idx| idx == selected));

    (visible, selected_pos)
  }
}
