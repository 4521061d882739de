use super::*;

#[derive(Clone)]
struct AppState {
  searcher: Arc<dyn Searcher>,
}

pub(crate) fn router(searcher: Arc<dyn Searcher>) -> Router {
  Router::new()
    .route("/api/search", post(search))
    .layer(
      CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any),
    )
    .with_state(AppState { searcher })
}

async fn search(
  AxumState(state): AxumState<AppState>,
  payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<Vec<Post>>, ApiError> {
  let Json(request) = payload?;

  request.validate()?;

  tracing::info!(
    query = %request.query,
    num_comments = request.num_comments,
    include_replies = request.include_replies,
    "search requested"
  );

  Ok(Json(state.searcher.search(&request).await?))
}

pub(crate) async fn serve(arguments: ServeArguments) -> Result {
  let client = reqwest::Client::builder()
    .user_agent(arguments.reddit_user_agent.clone())
    .timeout(Duration::from_secs(30))
    .build()
    .context("failed to build http client")?;

  let searcher = RedditSearcher::new(
    GoogleSearch::new(
      client.clone(),
      arguments.google_api_key,
      arguments.google_cx,
    ),
    RedditClient::new(
      client,
      arguments.reddit_client_id,
      arguments.reddit_secret,
      arguments.reddit_user_agent,
    ),
  );

  let listener = TcpListener::bind((arguments.bind, arguments.port))
    .await
    .with_context(|| {
      format!("could not bind {}:{}", arguments.bind, arguments.port)
    })?;

  tracing::info!(address = %listener.local_addr()?, "search server listening");

  axum::serve(listener, router(Arc::new(searcher)))
    .await
    .context("search server failed")
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, serde_json::json};

  struct StubSearcher;

  #[async_trait]
  impl Searcher for StubSearcher {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Post>> {
      if request.query == "explode" {
        bail!("upstream unavailable");
      }

      Ok(vec![Post {
        comments: vec![Comment {
          body: format!("about {}", request.query),
          replies: Vec::new(),
          score: i64::try_from(request.num_comments)?,
        }],
        title: "Stub".into(),
        url: "https://www.reddit.com/r/stub/comments/1/stub/".into(),
      }])
    }
  }

  async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router(Arc::new(StubSearcher)))
        .await
        .unwrap();
    });

    format!("http://{address}/api/search")
  }

  async fn post_json(body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
      .post(spawn_server().await)
      .json(&body)
      .send()
      .await
      .unwrap();

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();

    (status, response.json::<Value>().await.unwrap())
  }

  #[tokio::test]
  async fn empty_query_is_rejected() {
    let (status, body) = post_json(json!({ "query": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Query parameter is required" }));
  }

  #[tokio::test]
  async fn inverted_length_range_is_rejected() {
    let (status, body) =
      post_json(json!({ "query": "rust", "minLength": 50, "maxLength": 10 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
      body,
      json!({ "error": "minLength (50) must not exceed maxLength (10)" })
    );
  }

  #[tokio::test]
  async fn malformed_field_is_rejected_as_json_error() {
    let (status, body) =
      post_json(json!({ "query": "rust", "minDate": "yesterday" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn successful_search_returns_post_array() {
    let (status, body) =
      post_json(json!({ "query": "rust", "numComments": "3" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
      body,
      json!([{
        "url": "https://www.reddit.com/r/stub/comments/1/stub/",
        "title": "Stub",
        "comments": [{ "body": "about rust", "score": 3 }]
      }])
    );
  }

  #[tokio::test]
  async fn upstream_failure_is_internal_error() {
    let (status, body) = post_json(json!({ "query": "explode" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "upstream unavailable" }));
  }

  #[tokio::test]
  async fn cross_origin_requests_are_allowed() {
    let response = reqwest::Client::new()
      .post(spawn_server().await)
      .header("origin", "http://example.com")
      .json(&json!({ "query": "rust" }))
      .send()
      .await
      .unwrap();

    assert_eq!(
      response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|value| value.to_str().ok()),
      Some("*")
    );
  }

  #[tokio::test]
  async fn preflight_allows_any_origin() {
    let response = reqwest::Client::new()
      .request(reqwest::Method::OPTIONS, spawn_server().await)
      .header("origin", "http://example.com")
      .header("access-control-request-method", "POST")
      .header("access-control-request-headers", "content-type")
      .send()
      .await
      .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
      response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|value| value.to_str().ok()),
      Some("*")
    );
  }
}
