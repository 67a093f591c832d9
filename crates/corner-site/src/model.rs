// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Posts and comments as exchanged with the remote API and local storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a remote post.
///
/// Serialized as a bare integer, so the persisted `postId` value reads `42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PostId)
    }
}

/// A blog post owned by the remote API. Fields the blog does not use are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Remote identifier.
    pub id: PostId,
    /// Headline.
    pub title: String,
    /// Full text.
    pub body: String,
}

/// Comment identifier: numeric when it came from the server, a UUID string when
/// it was submitted locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentId {
    /// Assigned by the remote API.
    Remote(u64),
    /// Generated in the browser on submit.
    Local(String),
}

impl CommentId {
    /// True for comments that only exist locally.
    pub fn is_local(&self) -> bool {
        matches!(self, CommentId::Local(_))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentId::Remote(id) => write!(f, "{id}"),
            CommentId::Local(id) => f.write_str(id),
        }
    }
}

/// Who wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    /// Display name.
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// One entry in the comments sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable identifier.
    pub id: CommentId,
    /// Author.
    pub user: CommentAuthor,
    /// Comment text.
    pub body: String,
}

impl Comment {
    /// Build a comment from its parts.
    pub fn new(id: CommentId, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user: CommentAuthor {
                full_name: author.into(),
            },
            body: body.into(),
        }
    }
}

/// Result of the detail fetch: the post plus its server-side comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithComments {
    /// The post itself.
    pub post: Post,
    /// Comments the server holds for it.
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn server_comment_shape_is_accepted() {
        let raw = r#"{"id":1,"body":"This is some awesome thinking!","postId":242,"likes":3,
            "user":{"id":105,"username":"emmac","fullName":"Emma Wilson"}}"#;
        let c: Comment = serde_json::from_str(raw).unwrap();
        assert_eq!(c.id, CommentId::Remote(1));
        assert_eq!(c.user.full_name, "Emma Wilson");
    }

    #[test]
    fn local_comment_serializes_with_full_name_key() {
        let c = Comment::new(CommentId::Local("abc".into()), "Ada", "Hello");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"id":"abc","user":{"fullName":"Ada"},"body":"Hello"}"#);
        let back: Comment = serde_json::from_str(&json).unwrap();
        assert!(back.id.is_local());
    }

    #[test]
    fn post_ignores_extra_fields() {
        let raw = r#"{"id":1,"title":"His mother had always taught him","body":"...",
            "tags":["history"],"reactions":{"likes":192,"dislikes":25},"views":305,"userId":121}"#;
        let p: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, PostId(1));
    }

    #[test]
    fn post_id_parses_from_text() {
        assert_eq!("42".parse::<PostId>().unwrap(), PostId(42));
        assert!("abc".parse::<PostId>().is_err());
    }
}
