// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Top-level application driver: reducer + effects runner.

use crate::config::SiteConfig;
use crate::core::AppState;
use crate::session::PersistedSession;
use crate::ui_effects::EffectsRunner;
use crate::ui_state::{self, AppEffect, AppEvent};

/// Owns the application state and the runner that carries out its effects.
pub struct App<R> {
    state: AppState,
    runner: R,
}

impl<R> App<R>
where
    R: EffectsRunner,
{
    /// Start the app from the persisted session and the current URL hash,
    /// running the startup effects (title, initial fetch) immediately.
    pub fn boot(session: PersistedSession, hash: &str, config: SiteConfig, runner: R) -> Self {
        let (state, effects) = AppState::boot(session, hash, config);
        let mut app = Self { state, runner };
        app.run_effects(effects);
        app
    }

    /// Apply an event and everything it triggers.
    pub fn dispatch(&mut self, ev: AppEvent) {
        let (next, effects) = ui_state::reduce(&self.state, ev);
        self.state = next;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<AppEffect>) {
        if effects.is_empty() {
            return;
        }
        let followups = self.runner.run(effects, &self.state);
        for ev in followups {
            self.dispatch(ev);
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The effects runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
