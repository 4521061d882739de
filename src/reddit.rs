use {super::*, tokio::sync::Mutex};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Thread {
  pub(crate) comments: Vec<CommentNode>,
  pub(crate) title: String,
}

struct AccessToken {
  expires_at: Instant,
  value: String,
}

#[derive(Deserialize)]
struct TokenResponse {
  access_token: String,
  expires_in: u64,
}

#[derive(Clone)]
pub(crate) struct RedditClient {
  api_url: String,
  auth_url: String,
  client: reqwest::Client,
  client_id: String,
  secret: String,
  token: Arc<Mutex<Option<AccessToken>>>,
  user_agent: String,
}

impl RedditClient {
  const API_URL: &str = "https://oauth.reddit.com";

  const AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";

  const COMMENT_DEPTH: usize = 10;

  const COMMENT_LIMIT: usize = 500;

  const TOKEN_MARGIN: Duration = Duration::from_secs(60);

  async fn access_token(&self) -> Result<String> {
    let mut cached = self.token.lock().await;

    if let Some(token) = cached.as_ref()
      && token.expires_at > Instant::now()
    {
      return Ok(token.value.clone());
    }

    let response = self
      .client
      .post(&self.auth_url)
      .header(reqwest::header::USER_AGENT, &self.user_agent)
      .basic_auth(&self.client_id, Some(&self.secret))
      .form(&[("grant_type", "client_credentials")])
      .send()
      .await
      .context("could not reach reddit authorization endpoint")?
      .error_for_status()
      .context("reddit rejected the application credentials")?
      .json::<TokenResponse>()
      .await
      .context("invalid reddit token response")?;

    tracing::debug!(expires_in = response.expires_in, "refreshed reddit token");

    let lifetime = Duration::from_secs(response.expires_in)
      .saturating_sub(Self::TOKEN_MARGIN);

    *cached = Some(AccessToken {
      expires_at: Instant::now() + lifetime,
      value: response.access_token.clone(),
    });

    Ok(response.access_token)
  }

  pub(crate) fn new(
    client: reqwest::Client,
    client_id: String,
    secret: String,
    user_agent: String,
  ) -> Self {
    Self {
      api_url: Self::API_URL.into(),
      auth_url: Self::AUTH_URL.into(),
      client,
      client_id,
      secret,
      token: Arc::new(Mutex::new(None)),
      user_agent,
    }
  }

  pub(crate) async fn thread(&self, post_id: &str) -> Result<Thread> {
    let token = self.access_token().await?;

    let listings = self
      .client
      .get(format!("{}/comments/{post_id}", self.api_url))
      .header(reqwest::header::USER_AGENT, &self.user_agent)
      .bearer_auth(token)
      .query(&[
        ("depth", Self::COMMENT_DEPTH.to_string()),
        ("limit", Self::COMMENT_LIMIT.to_string()),
      ])
      .send()
      .await
      .with_context(|| format!("could not fetch reddit post {post_id}"))?
      .error_for_status()
      .with_context(|| format!("reddit refused post {post_id}"))?
      .json::<Vec<Listing>>()
      .await
      .with_context(|| format!("invalid response for reddit post {post_id}"))?;

    parse_thread(listings)
      .with_context(|| format!("could not read reddit post {post_id}"))
  }

  #[cfg(test)]
  pub(crate) fn with_base_url(mut self, base_url: &str) -> Self {
    self.api_url = base_url.into();
    self.auth_url = format!("{base_url}/api/v1/access_token");
    self
  }
}

pub(crate) fn post_id(url: &str) -> Option<&str> {
  let url = url.split(['?', '#']).next().unwrap_or(url);

  url
    .split('/')
    .skip_while(|segment| *segment != "comments")
    .nth(1)
    .filter(|id| {
      !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
    })
}
