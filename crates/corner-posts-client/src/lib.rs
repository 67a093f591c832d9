// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Client helper for the remote posts API (read-only).
//!
//! Three endpoints are used:
//!
//! - `GET /posts` → `{ "posts": [...] }`
//! - `GET /posts/{id}` → the post object
//! - `GET /posts/{id}/comments` → `{ "comments": [...] }`
//!
//! On wasm32 `reqwest` goes through the browser's `fetch`; natively it uses rustls.
//! No retries, timeouts or cancellation: callers tag responses and drop stale ones.

use corner_site::model::{Comment, Post, PostId, PostWithComments};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Error type for posts API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or body-decoding failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
}

/// Body of `GET /posts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsEnvelope {
    /// Posts in server order.
    pub posts: Vec<Post>,
}

/// Body of `GET /posts/{id}/comments`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsEnvelope {
    /// Comments for the post.
    pub comments: Vec<Comment>,
}

/// `GET /posts` URL for `base`.
pub fn posts_url(base: &str) -> String {
    format!("{}/posts", base.trim_end_matches('/'))
}

/// `GET /posts/{id}` URL for `base`.
pub fn post_url(base: &str, id: PostId) -> String {
    format!("{}/posts/{id}", base.trim_end_matches('/'))
}

/// `GET /posts/{id}/comments` URL for `base`.
pub fn post_comments_url(base: &str, id: PostId) -> String {
    format!("{}/posts/{id}/comments", base.trim_end_matches('/'))
}

/// Minimal async client for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: Client,
    base_url: String,
}

impl PostsClient {
    /// Client for the API rooted at `base_url` (e.g. `https://dummyjson.com`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T>(&self, url: String) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Fetch every post the list endpoint returns.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let envelope: PostsEnvelope = self.get_json(posts_url(&self.base_url)).await?;
        Ok(envelope.posts)
    }

    /// Fetch one post.
    pub async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        self.get_json(post_url(&self.base_url, id)).await
    }

    /// Fetch the comments of one post.
    pub async fn get_post_comments(&self, id: PostId) -> Result<Vec<Comment>, ClientError> {
        let envelope: CommentsEnvelope =
            self.get_json(post_comments_url(&self.base_url, id)).await?;
        Ok(envelope.comments)
    }

    /// Fetch a post, then its comments (two sequential calls).
    pub async fn get_post_with_comments(
        &self,
        id: PostId,
    ) -> Result<PostWithComments, ClientError> {
        let post = self.get_post(id).await?;
        let comments = self.get_post_comments(id).await?;
        Ok(PostWithComments { post, comments })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    use super::*;
    use corner_site::model::CommentId;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn urls_tolerate_a_trailing_slash() {
        assert_eq!(posts_url("https://dummyjson.com"), "https://dummyjson.com/posts");
        assert_eq!(posts_url("https://dummyjson.com/"), "https://dummyjson.com/posts");
        assert_eq!(
            post_url("https://dummyjson.com/", PostId(42)),
            "https://dummyjson.com/posts/42"
        );
        assert_eq!(
            post_comments_url("http://localhost:8080", PostId(7)),
            "http://localhost:8080/posts/7/comments"
        );
    }

    #[test]
    fn list_envelope_decodes() {
        let raw = r#"{"posts":[{"id":1,"title":"His mother had always taught him",
            "body":"His mother had always taught him not to ever think of himself as better than others.",
            "tags":["history","american","crime"],"reactions":{"likes":192,"dislikes":25},
            "views":305,"userId":121}],"total":251,"skip":0,"limit":30}"#;
        let env: PostsEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(env.posts.len(), 1);
        assert_eq!(env.posts[0].id, PostId(1));
    }

    #[test]
    fn comments_envelope_decodes() {
        let raw = r#"{"comments":[{"id":93,"body":"These are fabulous ideas!","postId":1,
            "likes":7,"user":{"id":190,"username":"leahw","fullName":"Leah Gutierrez"}}],
            "total":3,"skip":0,"limit":3}"#;
        let env: CommentsEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(env.comments[0].id, CommentId::Remote(93));
        assert_eq!(env.comments[0].user.full_name, "Leah Gutierrez");
    }

    /// One-shot HTTP/1.1 server answering each path from `routes` (404 otherwise)
    /// and recording the request paths in arrival order.
    async fn serve(
        routes: &[(&'static str, u16, &'static str)],
    ) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let routes: Vec<_> = routes.to_vec();
        let log = Arc::clone(&seen);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                }
                let head = String::from_utf8_lossy(&buf);
                let path = head.split_whitespace().nth(1).unwrap_or("").to_string();
                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map_or((404, "{}"), |(_, status, body)| (*status, *body));
                log.lock().unwrap().push(path);
                let response = format!(
                    "HTTP/1.1 {status} Status\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });
        (base, seen)
    }

    const POST_3: &str =
        r#"{"id":3,"title":"Dave watched","body":"Dave watched as the forest burned up."}"#;
    const COMMENTS_3: &str =
        r#"{"comments":[{"id":11,"body":"Nice.","user":{"id":5,"fullName":"Emma Wilson"}}]}"#;

    #[tokio::test]
    async fn list_posts_reads_the_posts_envelope() {
        let list = r#"{"posts":[{"id":1,"title":"a","body":"b"}],"total":1}"#;
        let (base, seen) = serve(&[("/posts", 200, list)]).await;
        let posts = PostsClient::new(format!("{base}/")).list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, PostId(1));
        assert_eq!(*seen.lock().unwrap(), vec!["/posts".to_string()]);
    }

    #[tokio::test]
    async fn missing_post_is_a_status_error() {
        let (base, _seen) = serve(&[]).await;
        let err = PostsClient::new(base.clone())
            .get_post(PostId(999))
            .await
            .unwrap_err();
        match err {
            ClientError::Status { url, status } => {
                assert_eq!(status, 404);
                assert_eq!(url, format!("{base}/posts/999"));
            }
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn post_then_comments_are_fetched_in_order() {
        let (base, seen) =
            serve(&[("/posts/3", 200, POST_3), ("/posts/3/comments", 200, COMMENTS_3)]).await;
        let detail = PostsClient::new(base)
            .get_post_with_comments(PostId(3))
            .await
            .unwrap();
        assert_eq!(detail.post.title, "Dave watched");
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].user.full_name, "Emma Wilson");
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["/posts/3".to_string(), "/posts/3/comments".to_string()]
        );
    }

    #[tokio::test]
    async fn failed_post_fetch_skips_the_comments_call() {
        let (base, seen) =
            serve(&[("/posts/4", 500, "{}"), ("/posts/4/comments", 200, COMMENTS_3)]).await;
        let err = PostsClient::new(base)
            .get_post_with_comments(PostId(4))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert_eq!(*seen.lock().unwrap(), vec!["/posts/4".to_string()]);
    }
}
