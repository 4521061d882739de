use super::*;

pub(crate) fn decode_entities(text: &str) -> String {
  html_escape::decode_html_entities(text).into_owned()
}

pub(crate) fn deserialize_count<'de, D>(
  deserializer: D,
) -> Result<usize, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(SearchRequest::clamp_count(deserialize_optional_usize(
    deserializer,
  )?))
}

pub(crate) fn deserialize_optional_date<'de, D>(
  deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
    Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
      .map(Some)
      .map_err(|_| {
        de::Error::invalid_value(Unexpected::Str(&s), &"a YYYY-MM-DD date")
      }),
    Some(Value::Number(n)) => Err(de::Error::invalid_type(
      Unexpected::Other(&n.to_string()),
      &"a YYYY-MM-DD date",
    )),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"a YYYY-MM-DD date",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"a YYYY-MM-DD date",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"a YYYY-MM-DD date",
    )),
  }
}

pub(crate) fn deserialize_optional_usize<'de, D>(
  deserializer: D,
) -> Result<Option<usize>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
    Some(Value::String(s)) => s.trim().parse::<usize>().map(Some).map_err(|_| {
      de::Error::invalid_value(Unexpected::Str(&s), &"a non-negative integer")
    }),
    Some(Value::Number(n)) => n
      .as_u64()
      .and_then(|n| usize::try_from(n).ok())
      .map(Some)
      .ok_or_else(|| {
        de::Error::invalid_value(
          Unexpected::Other(&n.to_string()),
          &"a non-negative integer",
        )
      }),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"a non-negative integer",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"a non-negative integer",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"a non-negative integer",
    )),
  }
}

pub(crate) fn format_score(score: i64) -> String {
  match score {
    1 | -1 => format!("{score} point"),
    _ => format!("{score} points"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();

  for paragraph in text.lines() {
    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
      let word_width = word.chars().count();

      if current.is_empty() {
        current.push_str(word);
        current_width = word_width;
      } else if current_width + 1 + word_width <= width {
        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
      } else {
        lines.push(current);
        current = word.to_string();
        current_width = word_width;
      }
    }

    if !current.is_empty() {
      lines.push(current);
    }
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}
