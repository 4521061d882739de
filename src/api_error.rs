use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
  #[error("{0}")]
  BadRequest(String),
  #[error(transparent)]
  Internal(#[from] anyhow::Error),
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct ErrorBody {
  pub(crate) error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, error) = match self {
      ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
      ApiError::Internal(error) => {
        tracing::error!(error = ?error, "search failed");
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{error:#}"))
      }
    };

    (status, Json(ErrorBody { error })).into_response()
  }
}

impl From<RequestError> for ApiError {
  fn from(error: RequestError) -> Self {
    ApiError::BadRequest(error.to_string())
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}
