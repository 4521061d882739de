use super::*;

pub(crate) struct CommentEntry {
  pub(crate) body: String,
  pub(crate) children: Vec<usize>,
  pub(crate) depth: usize,
  pub(crate) expanded: bool,
  pub(crate) parent: Option<usize>,
  pub(crate) score: i64,
}

impl CommentEntry {
  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn header(&self) -> String {
    let score = format_score(self.score);

    match self.children.len() {
      0 => score,
      1 => format!("{score} • 1 reply"),
      n => format!("{score} • {n} replies"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(score: i64, children: Vec<usize>) -> CommentEntry {
    CommentEntry {
      body: String::new(),
      children,
      depth: 0,
      expanded: false,
      parent: None,
      score,
    }
  }

  #[test]
  fn header_includes_reply_count() {
    assert_eq!(entry(5, Vec::new()).header(), "5 points");
    assert_eq!(entry(1, vec![1]).header(), "1 point • 1 reply");
    assert_eq!(entry(12, vec![1, 2]).header(), "12 points • 2 replies");
  }
}
