use super::*;

const COMMENT_KIND: &str = "t1";
const LINK_KIND: &str = "t3";

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
  #[serde(default)]
  children: Vec<Thing>,
}

#[derive(Debug, Deserialize)]
struct Thing {
  data: Value,
  kind: String,
}

#[derive(Debug, Deserialize)]
struct LinkData {
  title: String,
}

#[derive(Debug, Deserialize)]
struct CommentData {
  #[serde(default)]
  body: String,
  created_utc: f64,
  #[serde(default, deserialize_with = "deserialize_replies")]
  replies: Option<Listing>,
  #[serde(default)]
  score: i64,
}

impl Listing {
  fn into_comments(self) -> Result<Vec<CommentNode>> {
    let mut comments = Vec::new();

    for thing in self.data.children {
      if thing.kind != COMMENT_KIND {
        continue;
      }

      let data = serde_json::from_value::<CommentData>(thing.data)
        .context("malformed comment")?;

      let replies = match data.replies {
        Some(listing) => listing.into_comments()?,
        None => Vec::new(),
      };

      #[allow(clippy::cast_possible_truncation)]
      let seconds = data.created_utc.trunc() as i64;

      let created = DateTime::from_timestamp(seconds, 0)
        .with_context(|| format!("comment timestamp out of range: {seconds}"))?;

      comments.push(CommentNode {
        body: decode_entities(&data.body),
        created,
        replies,
        score: data.score,
      });
    }

    Ok(comments)
  }

  fn into_title(self) -> Result<String> {
    let thing = self
      .data
      .children
      .into_iter()
      .find(|thing| thing.kind == LINK_KIND)
      .context("listing does not contain a post")?;

    let link = serde_json::from_value::<LinkData>(thing.data)
      .context("malformed post")?;

    Ok(decode_entities(&link.title))
  }
}

fn deserialize_replies<'de, D>(
  deserializer: D,
) -> Result<Option<Listing>, D::Error>
where
  D: Deserializer<'de>,
{
  match Option::<Value>::deserialize(deserializer)? {
    None | Some(Value::Null | Value::String(_)) => Ok(None),
    Some(value) => Listing::deserialize(value)
      .map(Some)
      .map_err(de::Error::custom),
  }
}

pub(crate) fn parse_thread(listings: Vec<Listing>) -> Result<Thread> {
  let mut listings = listings.into_iter();

  let (Some(post), Some(comments)) = (listings.next(), listings.next()) else {
    bail!("expected a post listing and a comment listing");
  };

  Ok(Thread {
    comments: comments.into_comments()?,
    title: post.into_title()?,
  })
}
