//! Comment Thread Assembly
//!
//! Turns the flat comment list the backend returns into a reply
//! tree. A comment whose parent is not present locally is treated as
//! top-level rather than dropped, so a partially-loaded thread still
//! renders every comment. Cycles cannot occur: the server assigns
//! ids monotonically and a reply's parent always predates it.

use crate::shared::models::Comment;
use std::collections::{HashMap, HashSet};

/// A comment with its direct replies, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Number of comments in this subtree, including this one
    pub fn total_len(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::total_len).sum::<usize>()
    }
}

/// Assemble a flat comment list into a tree of top-level comments.
pub fn assemble(comments: Vec<Comment>) -> Vec<CommentNode> {
    let present: HashSet<String> = comments.iter().map(|c| c.id.clone()).collect();

    let mut roots: Vec<Comment> = Vec::new();
    let mut children: HashMap<String, Vec<Comment>> = HashMap::new();
    for comment in comments {
        match &comment.parent_id {
            Some(parent) if present.contains(parent) => {
                children.entry(parent.clone()).or_default().push(comment);
            }
            // Top-level, or an orphaned reference
            _ => roots.push(comment),
        }
    }

    roots
        .into_iter()
        .map(|c| build_node(c, &mut children))
        .collect()
}

fn build_node(comment: Comment, children: &mut HashMap<String, Vec<Comment>>) -> CommentNode {
    let replies = children
        .remove(&comment.id)
        .unwrap_or_default()
        .into_iter()
        .map(|c| build_node(c, children))
        .collect();
    CommentNode { comment, replies }
}
