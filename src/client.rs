use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  const SEARCH_PATH: &str = "/api/search";

  pub(crate) fn new(base_url: &str) -> Result<Self> {
    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::builder()
        .user_agent(concat!("rcs/", env!("CARGO_PKG_VERSION")))
        .build()?,
    })
  }

  pub(crate) async fn search(
    &self,
    request: &SearchRequest,
  ) -> Result<Vec<Post>> {
    let url = format!("{}{}", self.base_url, Self::SEARCH_PATH);

    let response = self
      .client
      .post(&url)
      .json(request)
      .send()
      .await
      .with_context(|| format!("could not reach {url}"))?;

    let status = response.status();

    if !status.is_success() {
      match response.json::<ErrorBody>().await {
        Ok(body) => bail!("search failed with {status}: {}", body.error),
        Err(_) => bail!("search failed with {status}"),
      }
    }

    response
      .json::<Vec<Post>>()
      .await
      .context("invalid search response")
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*, pretty_assertions::assert_eq, serde_json::json, std::sync::Mutex,
  };

  async fn stub_server(
    status: StatusCode,
    response: Value,
  ) -> (String, Arc<Mutex<Vec<Value>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));

    let log = received.clone();

    let router = Router::new().route(
      "/api/search",
      post(move |Json(body): Json<Value>| async move {
        log.lock().unwrap().push(body);
        (status, Json(response))
      }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{address}/"), received)
  }

  #[tokio::test]
  async fn search_posts_one_request_with_camel_case_body() {
    let (base_url, received) = stub_server(
      StatusCode::OK,
      json!([{
        "url": "https://www.reddit.com/r/rust/comments/1/a/",
        "title": "A",
        "comments": [{ "body": "yes", "score": 4 }]
      }]),
    )
    .await;

    let client = Client::new(&base_url).unwrap();

    let request = SearchRequest {
      include_replies: true,
      min_length: Some(10),
      ..SearchRequest::new("async rust")
    };

    let posts = client.search(&request).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].comments[0].body, "yes");

    let received = received.lock().unwrap();

    assert_eq!(received.len(), 1);
    assert_eq!(
      received[0],
      json!({
        "query": "async rust",
        "minLength": 10,
        "maxLength": null,
        "minDate": null,
        "maxDate": null,
        "numComments": 5,
        "includeReplies": true,
      })
    );
  }

  #[tokio::test]
  async fn search_fails_on_error_status() {
    let (base_url, _) = stub_server(
      StatusCode::INTERNAL_SERVER_ERROR,
      json!({ "error": "quota exceeded" }),
    )
    .await;

    let error = Client::new(&base_url)
      .unwrap()
      .search(&SearchRequest::new("rust"))
      .await
      .unwrap_err();

    assert_eq!(
      error.to_string(),
      "search failed with 500 Internal Server Error: quota exceeded"
    );
  }

  #[tokio::test]
  async fn search_returns_empty_list_for_empty_array() {
    let (base_url, _) = stub_server(StatusCode::OK, json!([])).await;

    let posts = Client::new(&base_url)
      .unwrap()
      .search(&SearchRequest::new("nothing"))
      .await
      .unwrap();

    assert!(posts.is_empty());
  }

  #[tokio::test]
  async fn search_fails_when_server_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let result = Client::new(&format!("http://{address}"))
      .unwrap()
      .search(&SearchRequest::new("rust"))
      .await;

    assert!(result.is_err());
  }
}
