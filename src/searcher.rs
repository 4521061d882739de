use super::*;

#[async_trait]
pub(crate) trait Searcher: Send + Sync {
  async fn search(&self, request: &SearchRequest) -> Result<Vec<Post>>;
}

pub(crate) struct RedditSearcher {
  google: GoogleSearch,
  reddit: RedditClient,
}

impl RedditSearcher {
  const CONCURRENT_FETCHES: usize = 4;

  pub(crate) fn new(google: GoogleSearch, reddit: RedditClient) -> Self {
    Self { google, reddit }
  }
}

#[async_trait]
impl Searcher for RedditSearcher {
  async fn search(&self, request: &SearchRequest) -> Result<Vec<Post>> {
    let urls = self.google.post_urls(&request.query).await?;

    tracing::debug!(
      query = %request.query,
      hits = urls.len(),
      "web search finished"
    );

    let targets = urls.into_iter().filter_map(|url| {
      let Some(id) = reddit::post_id(&url).map(str::to_owned) else {
        tracing::warn!(%url, "skipping search hit that is not a reddit post");
        return None;
      };

      Some((url, id))
    });

    let responses = stream::iter(targets.map(|(url, id)| {
      let reddit = self.reddit.clone();

      async move {
        let thread = reddit.thread(&id).await?;

        Ok::<_, anyhow::Error>(Post {
          comments: select_comments(&thread.comments, request),
          title: thread.title,
          url,
        })
      }
    }))
    .buffered(Self::CONCURRENT_FETCHES)
    .collect::<Vec<_>>()
    .await;

    let mut posts = Vec::with_capacity(responses.len());

    for post in responses {
      posts.push(post?);
    }

    tracing::info!(
      query = %request.query,
      posts = posts.len(),
      "search completed"
    );

    Ok(posts)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    axum::{extract::Path as AxumPath, routing::get},
    pretty_assertions::assert_eq,
    serde_json::json,
  };

  async fn stub_upstreams(links: &[&str]) -> String {
    let items = links
      .iter()
      .map(|link| json!({ "link": link }))
      .collect::<Vec<_>>();

    let router = Router::new()
      .route(
        "/customsearch/v1",
        get(move || async move { Json(json!({ "items": items })) }),
      )
      .route(
        "/api/v1/access_token",
        post(|| async {
          Json(json!({ "access_token": "token", "expires_in": 3600 }))
        }),
      )
      .route(
        "/comments/:id",
        get(|AxumPath(id): AxumPath<String>| async move {
          if id == "bad" {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
          }

          Json(json!([
            { "kind": "Listing", "data": { "children": [
              { "kind": "t3", "data": { "title": format!("title {id}") } }
            ] } },
            { "kind": "Listing", "data": { "children": [
              { "kind": "t1", "data": {
                "body": "low", "score": 1, "created_utc": 1_700_000_000.0,
                "replies": { "kind": "Listing", "data": { "children": [
                  { "kind": "t1", "data": {
                    "body": "nested", "score": 9, "created_utc": 1_700_000_100.0, "replies": ""
                  } }
                ] } }
              } },
              { "kind": "t1", "data": {
                "body": "high", "score": 5, "created_utc": 1_700_000_000.0, "replies": ""
              } }
            ] } }
          ]))
          .into_response()
        }),
      );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    format!("http://{address}")
  }

  fn reddit_searcher(base_url: &str) -> RedditSearcher {
    let client = reqwest::Client::new();

    RedditSearcher::new(
      GoogleSearch::new(client.clone(), "key".into(), "cx".into())
        .with_endpoint(format!("{base_url}/customsearch/v1")),
      RedditClient::new(client, "id".into(), "secret".into(), "test".into())
        .with_base_url(base_url),
    )
  }

  #[tokio::test]
  async fn search_keeps_web_order_and_skips_non_posts() {
    let searcher = reddit_searcher(
      &stub_upstreams(&[
        "https://www.reddit.com/r/rust/",
        "https://www.reddit.com/r/rust/comments/bbb/second/",
        "https://www.reddit.com/r/rust/comments/aaa/first/",
      ])
      .await,
    );

    let request = SearchRequest {
      num_comments: 2,
      ..SearchRequest::new("rust")
    };

    let posts = searcher.search(&request).await.unwrap();

    assert_eq!(
      posts
        .iter()
        .map(|post| post.title.as_str())
        .collect::<Vec<_>>(),
      vec!["title bbb", "title aaa"]
    );

    assert_eq!(
      posts[0].url,
      "https://www.reddit.com/r/rust/comments/bbb/second/"
    );

    assert_eq!(
      posts[0].comments,
      vec![
        Comment {
          body: "nested".into(),
          replies: Vec::new(),
          score: 9,
        },
        Comment {
          body: "high".into(),
          replies: Vec::new(),
          score: 5,
        },
      ]
    );
  }

  #[tokio::test]
  async fn one_failing_post_fails_the_whole_search() {
    let searcher = reddit_searcher(
      &stub_upstreams(&[
        "https://www.reddit.com/r/rust/comments/aaa/first/",
        "https://www.reddit.com/r/rust/comments/bad/broken/",
        "https://www.reddit.com/r/rust/comments/ccc/third/",
      ])
      .await,
    );

    let error = searcher
      .search(&SearchRequest::new("rust"))
      .await
      .unwrap_err();

    assert!(format!("{error:#}").contains("bad"));
  }
}
