use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CommentNode {
  pub(crate) body: String,
  pub(crate) created: DateTime<Utc>,
  pub(crate) replies: Vec<CommentNode>,
  pub(crate) score: i64,
}

impl CommentNode {
  pub(crate) fn is_accepted_by(&self, request: &SearchRequest) -> bool {
    request.accepts(&self.body, self.created.date_naive())
  }
}
