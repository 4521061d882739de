use super::*;

#[derive(Deserialize)]
struct SearchResults {
  #[serde(default)]
  items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
  link: String,
}

#[derive(Clone)]
pub(crate) struct GoogleSearch {
  api_key: String,
  client: reqwest::Client,
  cx: String,
  endpoint: String,
}

impl GoogleSearch {
  const ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

  const RESULT_COUNT: usize = 10;

  pub(crate) fn new(
    client: reqwest::Client,
    api_key: String,
    cx: String,
  ) -> Self {
    Self {
      api_key,
      client,
      cx,
      endpoint: Self::ENDPOINT.into(),
    }
  }

  pub(crate) async fn post_urls(&self, query: &str) -> Result<Vec<String>> {
    let results = self
      .client
      .get(&self.endpoint)
      .query(&[
        ("key", self.api_key.clone()),
        ("cx", self.cx.clone()),
        ("q", format!("{query} site:reddit.com")),
        ("num", Self::RESULT_COUNT.to_string()),
      ])
      .send()
      .await
      .context("could not reach web search")?
      .error_for_status()
      .context("web search rejected the request")?
      .json::<SearchResults>()
      .await
      .context("invalid web search response")?;

    Ok(results.items.into_iter().map(|item| item.link).collect())
  }

  #[cfg(test)]
  pub(crate) fn with_endpoint(mut self, endpoint: String) -> Self {
    self.endpoint = endpoint;
    self
  }
}
