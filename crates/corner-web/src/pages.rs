// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static page bodies.

use crate::dom::El;
use wasm_bindgen::JsValue;
use web_sys::Document;

fn para(doc: &Document, text: &str) -> Result<El, JsValue> {
    Ok(El::new(doc, "p")?.text(text))
}

pub(crate) fn home(doc: &Document) -> Result<El, JsValue> {
    El::new(doc, "div")?
        .child(El::new(doc, "h2")?.text("Welcome to Our Blog!"))?
        .child(para(
            doc,
            "A cozy little corner of the internet where we share thoughts, stories, \
             and things that fascinate us.",
        )?)?
        .child(
            El::new(doc, "p")?
                .append_text(doc, "Got questions or thoughts? Hit us up on the ")?
                .child(El::new(doc, "a")?.attr("href", "#/contact")?.text("Contact"))?
                .append_text(doc, " page!")?,
        )
}

pub(crate) fn about(doc: &Document) -> Result<El, JsValue> {
    let crew = [
        ("John Doe", "CEO & Founder."),
        ("Jane Smith", "Lead Developer."),
        ("Emily Davis", "UX/UI Designer."),
    ];
    El::new(doc, "div")?
        .child(El::new(doc, "h2")?.text("Who We Are"))?
        .child(para(
            doc,
            "A bunch of people who believe in the magic of words, tech, and everything in between.",
        )?)?
        .child(El::new(doc, "h3")?.text("Meet the Crew"))?
        .child(El::new(doc, "ul")?.children(crew.iter().map(|(name, role)| {
            El::new(doc, "li")?
                .child(El::new(doc, "strong")?.text(name))?
                .append_text(doc, &format!(" - {role}"))
        }))?)
}

pub(crate) fn contact(doc: &Document) -> Result<El, JsValue> {
    El::new(doc, "div")?
        .child(El::new(doc, "h2")?.text("Let's Get in Touch!"))?
        .child(El::new(doc, "h3")?.text("Email Us"))?
        .child(para(doc, "Email: contact@example.com")?)?
        .child(El::new(doc, "h3")?.text("Visit Our Office"))?
        .child(para(doc, "123 Web Street, San Francisco, CA 94102, USA")?)
}

pub(crate) fn not_found(doc: &Document) -> Result<El, JsValue> {
    El::new(doc, "p")?
        .append_text(doc, "Page not found. ")?
        .child(El::new(doc, "a")?.attr("href", "#/")?.text("return home"))
}
