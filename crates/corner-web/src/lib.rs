// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Browser entry point for The Curious Corner.
//!
//! `mount(selector, options)` boots the app into an element: it reads the
//! persisted session from `localStorage`, resolves the current hash route,
//! renders, and wires delegated DOM listeners (`data-action` / `data-field`)
//! to [`corner_site::ui_state::AppEvent`]s. Dropping or unmounting the
//! returned [`BlogApp`] removes every listener.
#![allow(unsafe_code)]

pub mod actions;
mod dom;
mod logging;
mod pages;
mod runner;
mod shell;
mod view;

use crate::actions::{click_event, field_event, Action, Field, ACTION_ATTR, FIELD_ATTR, POST_ID_ATTR};
use crate::dom::Listener;
use crate::runner::WebEffectsRunner;
use crate::shell::{Mailbox, Shell, SharedShell};
use crate::view::View;
use corner_app_core::config::ConfigService;
use corner_config_web::LocalStorageStore;
use corner_posts_client::PostsClient;
use corner_site::app::App;
use corner_site::config::SiteConfig;
use corner_site::model::CommentId;
use corner_site::session::SessionPort;
use corner_site::ui_state::AppEvent;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, Window};

/// Module start hook: panic hook (with `console-panic`) and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();
    logging::init();
}

/// A mounted blog app. Keep it alive for as long as the app should run.
#[wasm_bindgen]
pub struct BlogApp {
    shell: SharedShell,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl BlogApp {
    /// Remove all listeners and the rendered tree.
    pub fn unmount(self) {
        let BlogApp { shell, listeners } = self;
        drop(listeners);
        shell.borrow().view.clear();
        info!("blog app unmounted");
    }
}

/// Mount the app into the first element matching `selector`.
///
/// `options` is an optional `SiteConfig` object (camelCase keys); missing
/// keys keep their defaults.
#[wasm_bindgen]
pub fn mount(selector: &str, options: JsValue) -> Result<BlogApp, JsValue> {
    let config: SiteConfig = if options.is_undefined() || options.is_null() {
        SiteConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("no element matches {selector}")))?;

    let store = LocalStorageStore::new().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let session = ConfigService::new(store);
    let persisted = session.load_session();
    let hash = window.location().hash()?;

    let mailbox = Mailbox::default();
    let client = PostsClient::new(config.api_base_url.clone());
    let runner = WebEffectsRunner::new(session, client, document.clone(), mailbox.clone());
    let app = App::boot(persisted, &hash, config, runner);
    let shell: SharedShell = Rc::new(RefCell::new(Shell {
        app,
        view: View::new(document, root.clone()),
    }));
    mailbox.connect(&shell);
    shell.borrow().render()?;

    let listeners = install_listeners(&window, &root, &shell)?;
    info!(route = shell.borrow().app.state().route.name, "blog app mounted");
    Ok(BlogApp { shell, listeners })
}

fn install_listeners(
    window: &Window,
    root: &Element,
    shell: &SharedShell,
) -> Result<Vec<Listener>, JsValue> {
    let on_hash = {
        let shell = Rc::clone(shell);
        let location = window.location();
        Listener::new(window.as_ref(), "hashchange", move |_| {
            match location.hash() {
                Ok(hash) => Shell::dispatch(&shell, AppEvent::HashChanged(hash)),
                Err(err) => debug!(error = ?err, "could not read location hash"),
            }
        })?
    };
    let on_click = {
        let shell = Rc::clone(shell);
        Listener::new(root.as_ref(), "click", move |event| {
            if let Some(ev) = click_target(&event) {
                event.prevent_default();
                Shell::dispatch(&shell, ev);
            }
        })?
    };
    let on_input = {
        let shell = Rc::clone(shell);
        Listener::new(root.as_ref(), "input", move |event| {
            if let Some(ev) = input_target(&event) {
                Shell::dispatch(&shell, ev);
            }
        })?
    };
    let on_change = {
        let shell = Rc::clone(shell);
        Listener::new(root.as_ref(), "change", move |event| {
            if let Some(ev) = change_target(&event) {
                Shell::dispatch(&shell, ev);
            }
        })?
    };
    let on_submit = {
        let shell = Rc::clone(shell);
        Listener::new(root.as_ref(), "submit", move |event| {
            let is_comment_form = event_element(&event)
                .and_then(|el| el.get_attribute(ACTION_ATTR))
                .and_then(|name| Action::parse(&name))
                == Some(Action::Comment);
            if !is_comment_form {
                return;
            }
            event.prevent_default();
            let id = CommentId::Local(uuid::Uuid::new_v4().to_string());
            Shell::dispatch(&shell, AppEvent::SubmitComment { id });
        })?
    };
    Ok(vec![on_hash, on_click, on_input, on_change, on_submit])
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn field_of(el: &Element) -> Option<Field> {
    Field::parse(&el.get_attribute(FIELD_ATTR)?)
}

fn click_target(event: &Event) -> Option<AppEvent> {
    let el = event_element(event)?.closest(&format!("[{ACTION_ATTR}]")).ok()??;
    let action = Action::parse(&el.get_attribute(ACTION_ATTR)?)?;
    click_event(action, el.get_attribute(POST_ID_ATTR).as_deref())
}

fn input_target(event: &Event) -> Option<AppEvent> {
    let el = event_element(event)?;
    match field_of(&el)? {
        field @ (Field::DraftName | Field::DraftBody) => {
            let input = el.dyn_into::<HtmlInputElement>().ok()?;
            field_event(field, &input.value())
        }
        Field::PageSize => None,
    }
}

fn change_target(event: &Event) -> Option<AppEvent> {
    let el = event_element(event)?;
    match field_of(&el)? {
        Field::PageSize => {
            let select = el.dyn_into::<HtmlSelectElement>().ok()?;
            field_event(Field::PageSize, &select.value())
        }
        Field::DraftName | Field::DraftBody => None,
    }
}
