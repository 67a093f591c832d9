// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browser effects runner: localStorage persistence, document title, fetches.

use crate::shell::Mailbox;
use corner_app_core::config::ConfigService;
use corner_config_web::LocalStorageStore;
use corner_posts_client::PostsClient;
use corner_site::core::AppState;
use corner_site::ui_effects::{persist_effect, EffectsRunner};
use corner_site::ui_state::{AppEffect, AppEvent};
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// Carries out effects in the browser. Fetch results come back later through
/// the mailbox, never as synchronous follow-ups.
pub(crate) struct WebEffectsRunner {
    session: ConfigService<LocalStorageStore>,
    client: PostsClient,
    document: Document,
    mailbox: Mailbox,
}

impl WebEffectsRunner {
    pub(crate) fn new(
        session: ConfigService<LocalStorageStore>,
        client: PostsClient,
        document: Document,
        mailbox: Mailbox,
    ) -> Self {
        Self {
            session,
            client,
            document,
            mailbox,
        }
    }
}

impl EffectsRunner for WebEffectsRunner {
    fn run(&mut self, effects: Vec<AppEffect>, state: &AppState) -> Vec<AppEvent> {
        for eff in effects {
            if persist_effect(&self.session, &eff, state) {
                continue;
            }
            match eff {
                AppEffect::SetTitle(title) => self.document.set_title(&title),
                AppEffect::FetchPosts { ticket } => {
                    let client = self.client.clone();
                    let mailbox = self.mailbox.clone();
                    debug!(ticket, "fetching post list");
                    spawn_local(async move {
                        let result = client.list_posts().await.map_err(|e| e.to_string());
                        mailbox.post(AppEvent::PostsLoaded { ticket, result });
                    });
                }
                AppEffect::FetchPost(id) => {
                    let client = self.client.clone();
                    let mailbox = self.mailbox.clone();
                    debug!(post = %id, "fetching post");
                    spawn_local(async move {
                        let result = client
                            .get_post_with_comments(id)
                            .await
                            .map_err(|e| e.to_string());
                        mailbox.post(AppEvent::PostLoaded { id, result });
                    });
                }
                AppEffect::PersistPostId
                | AppEffect::PersistComments
                | AppEffect::PersistLikeCount => {}
            }
        }
        Vec::new()
    }
}
