// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted session state: selected post, comment list and like count.
//!
//! Each value lives under its own key and is read once at startup. Writes
//! replace the whole value; there is no patching or batching.

use crate::model::{Comment, PostId};
use corner_app_core::config::{ConfigError, ConfigService, ConfigStore};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Storage key for the selected post id (bare integer).
pub const POST_ID_KEY: &str = "postId";
/// Storage key for the comment list (JSON array).
pub const COMMENTS_KEY: &str = "comments";
/// Storage key for the like counter (bare integer).
pub const LIKE_COUNT_KEY: &str = "likeCount";

/// Values restored at startup. Missing or unreadable keys fall back to these defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedSession {
    /// Post whose detail view was open, if any.
    pub post_id: Option<PostId>,
    /// Shared comment list.
    pub comments: Vec<Comment>,
    /// Like counter.
    pub like_count: u64,
}

/// Session-facing persistence port.
pub trait SessionPort {
    /// Read all three keys, defaulting each one independently.
    fn load_session(&self) -> PersistedSession;
    /// Write the selected post id; `None` removes the key.
    fn save_post_id(&self, post_id: Option<PostId>) -> Result<(), ConfigError>;
    /// Write the full comment list (an empty list is written as `[]`).
    fn save_comments(&self, comments: &[Comment]) -> Result<(), ConfigError>;
    /// Write the like counter.
    fn save_like_count(&self, count: u64) -> Result<(), ConfigError>;
}

fn load_or_default<S, T>(svc: &ConfigService<S>, key: &str) -> T
where
    S: ConfigStore,
    T: DeserializeOwned + Default,
{
    match svc.load::<T>(key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            warn!(key, error = %err, "ignoring unreadable persisted value");
            T::default()
        }
    }
}

impl<S> SessionPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_session(&self) -> PersistedSession {
        PersistedSession {
            post_id: load_or_default(self, POST_ID_KEY),
            comments: load_or_default(self, COMMENTS_KEY),
            like_count: load_or_default(self, LIKE_COUNT_KEY),
        }
    }

    fn save_post_id(&self, post_id: Option<PostId>) -> Result<(), ConfigError> {
        match post_id {
            Some(id) => self.save(POST_ID_KEY, &id),
            None => self.remove(POST_ID_KEY),
        }
    }

    fn save_comments(&self, comments: &[Comment]) -> Result<(), ConfigError> {
        self.save(COMMENTS_KEY, comments)
    }

    fn save_like_count(&self, count: u64) -> Result<(), ConfigError> {
        self.save(LIKE_COUNT_KEY, &count)
    }
}
