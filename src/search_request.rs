use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchRequest {
  #[serde(default)]
  pub(crate) include_replies: bool,
  #[serde(default, deserialize_with = "deserialize_optional_date")]
  pub(crate) max_date: Option<NaiveDate>,
  #[serde(default, deserialize_with = "deserialize_optional_usize")]
  pub(crate) max_length: Option<usize>,
  #[serde(default, deserialize_with = "deserialize_optional_date")]
  pub(crate) min_date: Option<NaiveDate>,
  #[serde(default, deserialize_with = "deserialize_optional_usize")]
  pub(crate) min_length: Option<usize>,
  #[serde(
    default = "SearchRequest::default_count",
    deserialize_with = "deserialize_count"
  )]
  pub(crate) num_comments: usize,
  #[serde(default)]
  pub(crate) query: String,
}

impl SearchRequest {
  pub(crate) fn accepts(&self, body: &str, created: NaiveDate) -> bool {
    let length = body.chars().count();

    self.min_length.is_none_or(|min| length >= min)
      && self.max_length.is_none_or(|max| length <= max)
      && self.min_date.is_none_or(|min| created >= min)
      && self.max_date.is_none_or(|max| created <= max)
  }

  pub(crate) fn clamp_count(count: Option<usize>) -> usize {
    count.map_or(DEFAULT_NUM_COMMENTS, |count| {
      count.clamp(1, MAX_NUM_COMMENTS)
    })
  }

  fn default_count() -> usize {
    DEFAULT_NUM_COMMENTS
  }

  pub(crate) fn new(query: impl Into<String>) -> Self {
    Self {
      include_replies: false,
      max_date: None,
      max_length: None,
      min_date: None,
      min_length: None,
      num_comments: DEFAULT_NUM_COMMENTS,
      query: query.into(),
    }
  }

  pub(crate) fn validate(&self) -> Result<(), RequestError> {
    if self.query.trim().is_empty() {
      return Err(RequestError::MissingQuery);
    }

    if let (Some(min), Some(max)) = (self.min_length, self.max_length)
      && min > max
    {
      return Err(RequestError::LengthRange { max, min });
    }

    if let (Some(min), Some(max)) = (self.min_date, self.max_date)
      && min > max
    {
      return Err(RequestError::DateRange { max, min });
    }

    Ok(())
  }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum RequestError {
  #[error("minDate ({min}) must not be after maxDate ({max})")]
  DateRange { max: NaiveDate, min: NaiveDate },
  #[error("minLength ({min}) must not exceed maxLength ({max})")]
  LengthRange { max: usize, min: usize },
  #[error("Query parameter is required")]
  MissingQuery,
}
