pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    let target = if delta >= 0 {
      self.selected.saturating_add(delta.unsigned_abs())
    } else {
      self.selected.saturating_sub(delta.unsigned_abs())
    };

    self.select(target);
  }

  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset.min(self.selected)
  }

  pub(crate) fn select(&mut self, index: usize) {
    self.selected = index.min(self.items.len().saturating_sub(1));
  }

  pub(crate) fn select_last(&mut self) {
    self.select(usize::MAX);
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    (!self.items.is_empty()).then_some(self.selected)
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self.items.get(self.selected)
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset.min(self.items.len().saturating_sub(1));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_list_has_no_selection() {
    let view = ListView::<i32>::default();
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn move_by_clamps_at_both_ends() {
    let mut view = ListView::new(vec!['a', 'b', 'c']);

    view.move_by(10);
    assert_eq!(view.selected_item(), Some(&'c'));

    view.move_by(-1);
    assert_eq!(view.selected_item(), Some(&'b'));

    view.move_by(-10);
    assert_eq!(view.selected_item(), Some(&'a'));
  }

  #[test]
  fn offset_never_passes_selection() {
    let mut view = ListView::new(vec![1, 2, 3, 4]);

    view.select_last();
    view.set_offset(10);
    assert_eq!(view.offset(), 3);

    view.select(1);
    assert_eq!(view.offset(), 1);
  }
}
