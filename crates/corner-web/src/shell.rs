// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared app + view pair and the mailbox async work reports back through.

use crate::actions::needs_render;
use crate::runner::WebEffectsRunner;
use crate::view::View;
use corner_site::app::App;
use corner_site::ui_state::AppEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, error};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

pub(crate) type SharedShell = Rc<RefCell<Shell>>;

/// The running app and the DOM it renders into.
pub(crate) struct Shell {
    pub(crate) app: App<WebEffectsRunner>,
    pub(crate) view: View,
}

impl Shell {
    pub(crate) fn render(&self) -> Result<(), JsValue> {
        self.view.render(self.app.state())
    }

    /// Apply `ev` and re-render. A dispatch arriving while another one is in
    /// progress is queued for the next microtask.
    pub(crate) fn dispatch(shell: &SharedShell, ev: AppEvent) {
        let Ok(mut inner) = shell.try_borrow_mut() else {
            let shell = Rc::clone(shell);
            spawn_local(async move { Shell::dispatch(&shell, ev) });
            return;
        };
        let render = needs_render(&ev);
        inner.app.dispatch(ev);
        if render {
            if let Err(err) = inner.render() {
                error!(error = ?err, "render failed");
            }
        }
    }
}

/// Weak handle to the shell for completions of spawned fetches.
#[derive(Clone, Default)]
pub(crate) struct Mailbox {
    shell: Rc<RefCell<Weak<RefCell<Shell>>>>,
}

impl Mailbox {
    pub(crate) fn connect(&self, shell: &SharedShell) {
        *self.shell.borrow_mut() = Rc::downgrade(shell);
    }

    pub(crate) fn post(&self, ev: AppEvent) {
        let target = self.shell.borrow().upgrade();
        match target {
            Some(shell) => Shell::dispatch(&shell, ev),
            None => debug!("app unmounted; dropping {ev:?}"),
        }
    }
}
