// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renders `AppState` into the mount element (whole-tree re-render).

use crate::actions::{Action, Field, ACTION_ATTR, FIELD_ATTR, POST_ID_ATTR};
use crate::dom::El;
use crate::pages;
use corner_site::core::{AppState, BlogView, DetailState, ListingState, LoadState};
use corner_site::model::{Comment, Post};
use corner_site::pagination::PageSize;
use corner_site::routes::{Page, ROUTES};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// The DOM side of the app: a document and the element it owns.
pub(crate) struct View {
    doc: Document,
    root: Element,
}

impl View {
    pub(crate) fn new(doc: Document, root: Element) -> Self {
        Self { doc, root }
    }

    /// Replace the mount element's children with a rendering of `state`.
    pub(crate) fn render(&self, state: &AppState) -> Result<(), JsValue> {
        let tree = self.container(state)?;
        self.clear();
        self.root.append_child(&tree.into_element())?;
        Ok(())
    }

    /// Remove everything rendered so far.
    pub(crate) fn clear(&self) {
        self.root.set_text_content(None);
    }

    fn container(&self, state: &AppState) -> Result<El, JsValue> {
        let doc = &self.doc;
        El::new(doc, "div")?
            .class("container")
            .child(self.header(state)?)?
            .child(
                El::new(doc, "div")?
                    .class("main")
                    .child(self.content(state)?)?
                    .child(self.sidebar(state)?)?,
            )?
            .child(El::new(doc, "div")?.class("footer").text("© 2024"))
    }

    fn header(&self, state: &AppState) -> Result<El, JsValue> {
        let doc = &self.doc;
        let nav_class = if state.nav_open { "nav open" } else { "nav" };
        let nav = El::new(doc, "ul")?
            .class(nav_class)
            .children(ROUTES.iter().map(|route| {
                let link = El::new(doc, "a")?
                    .attr("href", route.fragment)?
                    .text(route.name);
                let link = if route.page == state.route.page {
                    link.class("selected")
                } else {
                    link
                };
                El::new(doc, "li")?.child(link)
            }))?;
        El::new(doc, "div")?
            .class("header")
            .child(
                El::new(doc, "a")?
                    .class("logo")
                    .attr("href", "#/")?
                    .text(&state.config.brand),
            )?
            .child(
                El::new(doc, "button")?
                    .class("nav-toggle")
                    .attr(ACTION_ATTR, Action::ToggleNav.name())?
                    .text("☰"),
            )?
            .child(nav)
    }

    fn content(&self, state: &AppState) -> Result<El, JsValue> {
        let doc = &self.doc;
        let body = match state.route.page {
            Page::Home => pages::home(doc)?,
            Page::About => pages::about(doc)?,
            Page::Contact => pages::contact(doc)?,
            Page::NotFound => pages::not_found(doc)?,
            Page::Blog => match state.blog_view() {
                Some(BlogView::Detail(_)) => self.detail(state.detail.as_ref())?,
                _ => self.listing(&state.listing)?,
            },
        };
        El::new(doc, "div")?
            .class("content")
            .child(El::new(doc, "h1")?.text(state.route.name))?
            .child(body)
    }

    fn listing(&self, listing: &ListingState) -> Result<El, JsValue> {
        let doc = &self.doc;
        let size = listing.pager.size();
        let selector = El::new(doc, "div")?
            .class("select-page-size")
            .child(
                El::new(doc, "label")?
                    .attr("for", "pageSize")?
                    .text("Posts per page: "),
            )?
            .child(
                El::new(doc, "select")?
                    .attr("id", "pageSize")?
                    .attr(FIELD_ATTR, Field::PageSize.name())?
                    .children(PageSize::ALL.iter().map(|option| {
                        let value = option.to_string();
                        El::new(doc, "option")?
                            .attr("value", &value)?
                            .flag("selected", *option == size)
                            .map(|el| el.text(&value))
                    }))?,
            )?;

        let grid = El::new(doc, "div")?
            .class("post-grid")
            .children(listing.visible().iter().map(|post| self.post_card(post)))?;

        let total = listing.posts.len();
        let pagination = El::new(doc, "div")?
            .class("pagination")
            .child(self.page_button(Action::PrevPage, "Previous", listing.pager.has_prev())?)?
            .child(self.page_button(Action::NextPage, "Next", listing.pager.has_next(total))?)?;

        let mut out = El::new(doc, "div")?.child(selector)?;
        if let LoadState::Failed(_) = listing.load {
            out = out.child(El::new(doc, "p")?.class("notice").text("Couldn't load posts."))?;
        }
        out.child(grid)?.child(pagination)
    }

    fn post_card(&self, post: &Post) -> Result<El, JsValue> {
        let doc = &self.doc;
        El::new(doc, "div")?
            .class("post-item")
            .child(El::new(doc, "h3")?.text(&post.title))?
            .child(
                El::new(doc, "button")?
                    .class("post-btn")
                    .attr(ACTION_ATTR, Action::ReadMore.name())?
                    .attr(POST_ID_ATTR, &post.id.to_string())?
                    .text("Read more... ➜"),
            )
    }

    fn page_button(&self, action: Action, label: &str, enabled: bool) -> Result<El, JsValue> {
        El::new(&self.doc, "button")?
            .class(if enabled { "" } else { "disabled" })
            .attr(ACTION_ATTR, action.name())?
            .flag("disabled", !enabled)
            .map(|el| el.text(label))
    }

    fn detail(&self, detail: Option<&DetailState>) -> Result<El, JsValue> {
        let doc = &self.doc;
        let post = detail.and_then(|d| d.post.as_ref());
        let failed = detail.is_some_and(|d| matches!(d.load, LoadState::Failed(_)));

        let mut details = El::new(doc, "div")?.class("post-details").child(
            El::new(doc, "p")?.child(
                El::new(doc, "a")?
                    .attr("href", "#")?
                    .class("back-btn")
                    .attr(ACTION_ATTR, Action::Back.name())?
                    .text("← Back to Blog"),
            )?,
        )?;
        if failed {
            details = details.child(El::new(doc, "p")?.class("notice").text("Couldn't load this post."))?;
        }
        details
            .child(El::new(doc, "h3")?.text(post.map_or("", |p| p.title.as_str())))?
            .child(El::new(doc, "p")?.text(post.map_or("", |p| p.body.as_str())))
    }

    fn sidebar(&self, state: &AppState) -> Result<El, JsValue> {
        let doc = &self.doc;
        let like = El::new(doc, "div")?.class("widget").child(
            El::new(doc, "button")?
                .class("likeBtn")
                .attr(ACTION_ATTR, Action::Like.name())?
                .text(&format!("♥ {}", state.like_count)),
        )?;
        let sidebar = El::new(doc, "div")?.class("sidebar").child(like)?;
        if !state.shows_comments() {
            return Ok(sidebar);
        }
        sidebar.child(self.comments_widget(state)?)
    }

    fn comments_widget(&self, state: &AppState) -> Result<El, JsValue> {
        let doc = &self.doc;
        let mut widget = El::new(doc, "div")?
            .class("widget")
            .child(El::new(doc, "h4")?.text("Comments:"))?;
        if state.comments.is_empty() {
            widget = widget.child(El::new(doc, "p")?.text("No comments yet."))?;
        } else {
            widget = widget.children(state.comments.iter().map(|c| self.comment_line(c)))?;
        }

        let form = El::new(doc, "form")?
            .attr(ACTION_ATTR, Action::Comment.name())?
            .child(self.draft_input(Field::DraftName, "name", "Your Name", &state.draft.name)?)?
            .child(self.draft_input(
                Field::DraftBody,
                "addComment",
                "Comment",
                &state.draft.body,
            )?)?
            .child(
                El::new(doc, "button")?
                    .attr("type", "submit")?
                    .text("Share"),
            )?;
        widget.child(El::new(doc, "div")?.class("inputArea").child(form)?)
    }

    fn comment_line(&self, comment: &Comment) -> Result<El, JsValue> {
        let doc = &self.doc;
        El::new(doc, "p")?
            .child(El::new(doc, "strong")?.text(&comment.user.full_name))?
            .append_text(doc, &format!(" says: {}", comment.body))
    }

    fn draft_input(
        &self,
        field: Field,
        name: &str,
        placeholder: &str,
        value: &str,
    ) -> Result<El, JsValue> {
        El::new(&self.doc, "input")?
            .attr("type", "text")?
            .attr("name", name)?
            .attr("placeholder", placeholder)?
            .attr("value", value)?
            .attr(FIELD_ATTR, field.name())?
            .flag("required", true)
    }
}
