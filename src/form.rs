use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormField {
  IncludeReplies,
  MaxDate,
  MaxLength,
  MinDate,
  MinLength,
  NumComments,
  Query,
}

impl FormField {
  pub(crate) const ORDER: [FormField; 7] = [
    FormField::Query,
    FormField::MinLength,
    FormField::MaxLength,
    FormField::MinDate,
    FormField::MaxDate,
    FormField::NumComments,
    FormField::IncludeReplies,
  ];

  fn accepts(self, ch: char) -> bool {
    match self {
      FormField::Query => !ch.is_control(),
      FormField::MinLength | FormField::MaxLength | FormField::NumComments => {
        ch.is_ascii_digit()
      }
      FormField::MinDate | FormField::MaxDate => {
        ch.is_ascii_digit() || ch == '-'
      }
      FormField::IncludeReplies => false,
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      FormField::IncludeReplies => "Include replies",
      FormField::MaxDate => "Max date",
      FormField::MaxLength => "Max length",
      FormField::MinDate => "Min date",
      FormField::MinLength => "Min length",
      FormField::NumComments => "Comments",
      FormField::Query => "Query",
    }
  }

  fn next(self) -> Self {
    let index = Self::position(self);
    Self::ORDER[(index + 1) % Self::ORDER.len()]
  }

  pub(crate) fn placeholder(self) -> &'static str {
    match self {
      FormField::MaxDate | FormField::MinDate => "YYYY-MM-DD",
      FormField::MaxLength | FormField::MinLength => "any",
      FormField::IncludeReplies | FormField::NumComments => "",
      FormField::Query => "Enter search query",
    }
  }

  fn position(self) -> usize {
    Self::ORDER
      .iter()
      .position(|field| *field == self)
      .unwrap_or(0)
  }

  fn previous(self) -> Self {
    let index = Self::position(self);
    Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
  }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub(crate) enum FormError {
  #[error("Enter a search query")]
  EmptyQuery,
  #[error("{field} must be a YYYY-MM-DD date, got \"{value}\"")]
  InvalidDate { field: &'static str, value: String },
  #[error("{field} must be a whole number, got \"{value}\"")]
  InvalidNumber { field: &'static str, value: String },
  #[error(transparent)]
  Request(#[from] RequestError),
}

pub(crate) struct SearchForm {
  pub(crate) focus: FormField,
  pub(crate) include_replies: bool,
  pub(crate) max_date: String,
  pub(crate) max_length: String,
  pub(crate) min_date: String,
  pub(crate) min_length: String,
  pub(crate) num_comments: String,
  pub(crate) query: String,
}

impl Default for SearchForm {
  fn default() -> Self {
    Self {
      focus: FormField::Query,
      include_replies: false,
      max_date: String::new(),
      max_length: String::new(),
      min_date: String::new(),
      min_length: String::new(),
      num_comments: DEFAULT_NUM_COMMENTS.to_string(),
      query: String::new(),
    }
  }
}

impl SearchForm {
  pub(crate) fn backspace(&mut self) {
    if let Some(buffer) = self.buffer_mut(self.focus) {
      buffer.pop();
    }
  }

  fn buffer_mut(&mut self, field: FormField) -> Option<&mut String> {
    match field {
      FormField::IncludeReplies => None,
      FormField::MaxDate => Some(&mut self.max_date),
      FormField::MaxLength => Some(&mut self.max_length),
      FormField::MinDate => Some(&mut self.min_date),
      FormField::MinLength => Some(&mut self.min_length),
      FormField::NumComments => Some(&mut self.num_comments),
      FormField::Query => Some(&mut self.query),
    }
  }

  pub(crate) fn focus_next(&mut self) {
    self.focus = self.focus.next();
  }

  pub(crate) fn focus_previous(&mut self) {
    self.focus = self.focus.previous();
  }

  pub(crate) fn insert(&mut self, ch: char) {
    if self.focus == FormField::IncludeReplies {
      if ch == ' ' {
        self.toggle_replies();
      }
      return;
    }

    if !self.focus.accepts(ch) {
      return;
    }

    if let Some(buffer) = self.buffer_mut(self.focus) {
      buffer.push(ch);
    }
  }

  fn parse_date(
    field: FormField,
    value: &str,
  ) -> Result<Option<NaiveDate>, FormError> {
    let value = value.trim();

    if value.is_empty() {
      return Ok(None);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
      .map(Some)
      .map_err(|_| FormError::InvalidDate {
        field: field.label(),
        value: value.to_string(),
      })
  }

  fn parse_number(
    field: FormField,
    value: &str,
  ) -> Result<Option<usize>, FormError> {
    let value = value.trim();

    if value.is_empty() {
      return Ok(None);
    }

    value
      .parse::<usize>()
      .map(Some)
      .map_err(|_| FormError::InvalidNumber {
        field: field.label(),
        value: value.to_string(),
      })
  }

  pub(crate) fn to_request(&self) -> Result<SearchRequest, FormError> {
    let query = self.query.trim();

    if query.is_empty() {
      return Err(FormError::EmptyQuery);
    }

    let request = SearchRequest {
      include_replies: self.include_replies,
      max_date: Self::parse_date(FormField::MaxDate, &self.max_date)?,
      max_length: Self::parse_number(FormField::MaxLength, &self.max_length)?,
      min_date: Self::parse_date(FormField::MinDate, &self.min_date)?,
      min_length: Self::parse_number(FormField::MinLength, &self.min_length)?,
      num_comments: SearchRequest::clamp_count(Self::parse_number(
        FormField::NumComments,
        &self.num_comments,
      )?),
      query: query.to_string(),
    };

    request.validate()?;

    Ok(request)
  }

  pub(crate) fn toggle_replies(&mut self) {
    self.include_replies = !self.include_replies;
  }

  pub(crate) fn value(&self, field: FormField) -> &str {
    match field {
      FormField::IncludeReplies => {
        if self.include_replies {
          "[x]"
        } else {
          "[ ]"
        }
      }
      FormField::MaxDate => &self.max_date,
      FormField::MaxLength => &self.max_length,
      FormField::MinDate => &self.min_date,
      FormField::MinLength => &self.min_length,
      FormField::NumComments => &self.num_comments,
      FormField::Query => &self.query,
    }
  }
}
