// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Comment submission and the local-vs-server comment policy.

use crate::model::{Comment, CommentId};
use serde::{Deserialize, Serialize};

/// Text typed into the comment form but not yet submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    /// "Your Name" field.
    pub name: String,
    /// "Comment" field.
    pub body: String,
}

impl CommentDraft {
    /// Turn the draft into a comment when both fields are filled, clearing them.
    /// An incomplete draft is left as-is and yields `None`.
    pub fn take_comment(&mut self, id: CommentId) -> Option<Comment> {
        if self.name.is_empty() || self.body.is_empty() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(Comment::new(id, draft.name, draft.body))
    }
}

/// What happens to the shared comment list when the detail fetch returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentSyncPolicy {
    /// Server comments replace the list; local submissions are dropped.
    #[default]
    ReplaceWithServer,
    /// Server comments first, then local submissions the server does not know.
    KeepLocal,
}

/// Apply `policy` to merge `server` comments into the `local` list.
pub fn sync_comments(
    local: &[Comment],
    server: Vec<Comment>,
    policy: CommentSyncPolicy,
) -> Vec<Comment> {
    match policy {
        CommentSyncPolicy::ReplaceWithServer => server,
        CommentSyncPolicy::KeepLocal => {
            let mut merged = server;
            let extra: Vec<Comment> = local
                .iter()
                .filter(|c| c.id.is_local() && !merged.iter().any(|s| s.id == c.id))
                .cloned()
                .collect();
            merged.extend(extra);
            merged
        }
    }
}
