use super::*;

pub(crate) enum Event {
  SearchResults {
    request_id: u64,
    result: Result<Vec<Post>>,
  },
}
