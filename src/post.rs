use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Post {
  #[serde(default)]
  pub(crate) comments: Vec<Comment>,
  pub(crate) title: String,
  pub(crate) url: String,
}

impl Post {
  pub(crate) fn detail(&self) -> String {
    let count = match self.comments.len() {
      1 => "1 comment".to_string(),
      n => format!("{n} comments"),
    };

    format!("{count} • {}", self.url)
  }
}
