// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tiny element builder over `web_sys` and the listener guard used for teardown.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

/// Builder around a freshly created element. Text always goes in as text nodes.
pub(crate) struct El {
    element: Element,
}

impl El {
    pub(crate) fn new(doc: &Document, tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: doc.create_element(tag)?,
        })
    }

    pub(crate) fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub(crate) fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    /// Set a boolean attribute (`disabled`, `required`, `selected`) when `on`.
    pub(crate) fn flag(self, name: &str, on: bool) -> Result<Self, JsValue> {
        if on {
            self.element.set_attribute(name, "")?;
        }
        Ok(self)
    }

    pub(crate) fn text(self, text: &str) -> Self {
        self.element.set_text_content(Some(text));
        self
    }

    pub(crate) fn append_text(self, doc: &Document, text: &str) -> Result<Self, JsValue> {
        self.element.append_child(&doc.create_text_node(text))?;
        Ok(self)
    }

    pub(crate) fn child(self, child: El) -> Result<Self, JsValue> {
        self.element.append_child(&child.element)?;
        Ok(self)
    }

    pub(crate) fn children<I>(self, children: I) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = Result<El, JsValue>>,
    {
        for child in children {
            self.element.append_child(&child?.element)?;
        }
        Ok(self)
    }

    pub(crate) fn into_element(self) -> Element {
        self.element
    }
}

/// An event listener that is removed again when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn new<F>(target: &EventTarget, kind: &'static str, f: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}
