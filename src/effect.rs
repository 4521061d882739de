use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  OpenUrl {
    url: String,
  },
  Search {
    request: SearchRequest,
    request_id: u64,
  },
}
