use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Comment {
  pub(crate) body: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub(crate) replies: Vec<Reply>,
  pub(crate) score: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Reply {
  pub(crate) body: String,
  pub(crate) score: i64,
}
