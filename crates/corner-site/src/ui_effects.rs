// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Effect runner port for `AppEffect` -> concrete hosts; includes a fake for tests.

use crate::core::AppState;
use crate::model::{Post, PostId, PostWithComments};
use crate::session::{SessionPort, COMMENTS_KEY, LIKE_COUNT_KEY, POST_ID_KEY};
use crate::ui_state::{AppEffect, AppEvent};
use corner_app_core::config::ConfigService;
use corner_app_core::memory::MemoryConfigStore;
use std::collections::BTreeMap;
use tracing::error;

/// Runs effects against a host, possibly emitting follow-up events.
pub trait EffectsRunner {
    /// Run `effects` produced by the step that led to `state`.
    fn run(&mut self, effects: Vec<AppEffect>, state: &AppState) -> Vec<AppEvent>;
}

/// Handle the persistence effects shared by every runner.
///
/// Returns `false` for effects that are not about persistence. Write failures
/// are logged and otherwise left alone; the in-memory state stays authoritative.
pub fn persist_effect(port: &dyn SessionPort, effect: &AppEffect, state: &AppState) -> bool {
    let (key, result) = match effect {
        AppEffect::PersistPostId => (POST_ID_KEY, port.save_post_id(state.post_id)),
        AppEffect::PersistComments => (COMMENTS_KEY, port.save_comments(&state.comments)),
        AppEffect::PersistLikeCount => (LIKE_COUNT_KEY, port.save_like_count(state.like_count)),
        _ => return false,
    };
    if let Err(err) = result {
        error!(key, error = %err, "failed to persist session value");
    }
    true
}

/// Test fake: records effects, persists into memory, and answers fetches from
/// scripted responses (synchronously, as follow-up events).
#[derive(Default)]
pub struct FakeEffectsRunner {
    /// Every effect seen, in order.
    pub calls: Vec<AppEffect>,
    /// Last title set.
    pub title: Option<String>,
    /// Backing storage for persistence effects.
    pub session: ConfigService<MemoryConfigStore>,
    /// Answer for list fetches; `None` leaves them pending.
    pub posts: Option<Result<Vec<Post>, String>>,
    /// Answers for detail fetches; missing ids stay pending.
    pub details: BTreeMap<PostId, Result<PostWithComments, String>>,
}

impl FakeEffectsRunner {
    /// Fake backed by an existing store (e.g. one seeded with persisted values).
    pub fn with_store(store: MemoryConfigStore) -> Self {
        Self {
            session: ConfigService::new(store),
            ..Self::default()
        }
    }

    /// Fetch effects seen so far.
    pub fn fetches(&self) -> Vec<&AppEffect> {
        self.calls
            .iter()
            .filter(|fx| matches!(fx, AppEffect::FetchPosts { .. } | AppEffect::FetchPost(_)))
            .collect()
    }
}

impl EffectsRunner for FakeEffectsRunner {
    fn run(&mut self, effects: Vec<AppEffect>, state: &AppState) -> Vec<AppEvent> {
        let mut followups = Vec::new();
        for eff in effects {
            if !persist_effect(&self.session, &eff, state) {
                match &eff {
                    AppEffect::SetTitle(title) => self.title = Some(title.clone()),
                    AppEffect::FetchPosts { ticket } => {
                        if let Some(result) = self.posts.clone() {
                            followups.push(AppEvent::PostsLoaded {
                                ticket: *ticket,
                                result,
                            });
                        }
                    }
                    AppEffect::FetchPost(id) => {
                        if let Some(result) = self.details.get(id).cloned() {
                            followups.push(AppEvent::PostLoaded { id: *id, result });
                        }
                    }
                    _ => {}
                }
            }
            self.calls.push(eff);
        }
        followups
    }
}
