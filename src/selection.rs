use super::*;

fn flatten<'a>(nodes: &'a [CommentNode], flattened: &mut Vec<&'a CommentNode>) {
  for node in nodes {
    flattened.push(node);
    flatten(&node.replies, flattened);
  }
}

pub(crate) fn select_comments(
  nodes: &[CommentNode],
  request: &SearchRequest,
) -> Vec<Comment> {
  if request.include_replies {
    return top(nodes.iter(), request)
      .into_iter()
      .map(|node| Comment {
        body: node.body.clone(),
        replies: top(node.replies.iter(), request)
          .into_iter()
          .map(|reply| Reply {
            body: reply.body.clone(),
            score: reply.score,
          })
          .collect(),
        score: node.score,
      })
      .collect();
  }

  let mut flattened = Vec::new();

  flatten(nodes, &mut flattened);

  top(flattened.into_iter(), request)
    .into_iter()
    .map(|node| Comment {
      body: node.body.clone(),
      replies: Vec::new(),
      score: node.score,
    })
    .collect()
}

fn top<'a>(
  nodes: impl Iterator<Item = &'a CommentNode>,
  request: &SearchRequest,
) -> Vec<&'a CommentNode> {
  let mut kept = nodes
    .filter(|node| node.is_accepted_by(request))
    .collect::<Vec<_>>();

  kept.sort_by(|a, b| b.score.cmp(&a.score));

  kept.truncate(request.num_comments);

  kept
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  fn node(body: &str, score: i64, replies: Vec<CommentNode>) -> CommentNode {
    node_on(body, score, "2024-01-15", replies)
  }

  fn node_on(
    body: &str,
    score: i64,
    date: &str,
    replies: Vec<CommentNode>,
  ) -> CommentNode {
    CommentNode {
      body: body.into(),
      created: NaiveDate::parse_from_str(date, DATE_FORMAT)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        .and_utc(),
      replies,
      score,
    }
  }

  fn forest() -> Vec<CommentNode> {
    vec![
      node(
        "alpha",
        10,
        vec![node("alpha reply", 50, Vec::new()), node("ok", 3, Vec::new())],
      ),
      node("beta", 30, vec![node("beta reply", 1, Vec::new())]),
      node("gamma", 10, Vec::new()),
    ]
  }

  fn bodies(comments: &[Comment]) -> Vec<&str> {
    comments.iter().map(|comment| comment.body.as_str()).collect()
  }

  #[test]
  fn flattened_selection_sorts_all_comments_by_score() {
    let request = SearchRequest {
      num_comments: 3,
      ..SearchRequest::new("q")
    };

    let selected = select_comments(&forest(), &request);

    assert_eq!(bodies(&selected), vec!["alpha reply", "beta", "alpha"]);
    assert!(selected.iter().all(|comment| comment.replies.is_empty()));
  }

  #[test]
  fn equal_scores_keep_tree_order() {
    let request = SearchRequest {
      num_comments: 10,
      ..SearchRequest::new("q")
    };

    let selected = select_comments(&forest(), &request);

    assert_eq!(
      bodies(&selected),
      vec!["alpha reply", "beta", "alpha", "gamma", "ok", "beta reply"]
    );
  }

  #[test]
  fn reply_mode_ranks_top_level_and_attaches_replies() {
    let request = SearchRequest {
      include_replies: true,
      num_comments: 2,
      ..SearchRequest::new("q")
    };

    let selected = select_comments(&forest(), &request);

    assert_eq!(bodies(&selected), vec!["beta", "alpha"]);
    assert_eq!(
      selected[1].replies,
      vec![
        Reply {
          body: "alpha reply".into(),
          score: 50,
        },
        Reply {
          body: "ok".into(),
          score: 3,
        },
      ]
    );
  }

  #[test]
  fn filters_apply_to_comments_and_replies() {
    let request = SearchRequest {
      include_replies: true,
      min_length: Some(4),
      ..SearchRequest::new("q")
    };

    let selected = select_comments(&forest(), &request);

    assert_eq!(bodies(&selected), vec!["beta", "alpha", "gamma"]);
    assert_eq!(selected[1].replies.len(), 1);
  }

  #[test]
  fn date_bounds_exclude_comments_outside_range() {
    let nodes = vec![
      node_on("old", 100, "2020-05-01", Vec::new()),
      node_on("new", 1, "2024-05-01", Vec::new()),
    ];

    let request = SearchRequest {
      min_date: NaiveDate::from_ymd_opt(2024, 1, 1),
      ..SearchRequest::new("q")
    };

    assert_eq!(bodies(&select_comments(&nodes, &request)), vec!["new"]);
  }

  #[test]
  fn empty_thread_selects_nothing() {
    assert!(select_comments(&[], &SearchRequest::new("q")).is_empty());
  }
}
