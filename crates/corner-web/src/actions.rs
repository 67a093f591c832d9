// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mapping from delegated DOM events (`data-action` / `data-field`) to `AppEvent`s.

use corner_site::model::PostId;
use corner_site::pagination::PageSize;
use corner_site::ui_state::AppEvent;
use tracing::debug;

/// Attribute naming the action of a clickable element or form.
pub const ACTION_ATTR: &str = "data-action";
/// Attribute carrying the post id on "Read more" buttons.
pub const POST_ID_ATTR: &str = "data-post-id";
/// Attribute naming the state field an input/select edits.
pub const FIELD_ATTR: &str = "data-field";

/// Clickable/submittable things in the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Header menu button.
    ToggleNav,
    /// Like button.
    Like,
    /// "Read more" on a post card.
    ReadMore,
    /// "Back to Blog" link.
    Back,
    /// "Previous" page.
    PrevPage,
    /// "Next" page.
    NextPage,
    /// The comment form.
    Comment,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::ToggleNav,
        Action::Like,
        Action::ReadMore,
        Action::Back,
        Action::PrevPage,
        Action::NextPage,
        Action::Comment,
    ];

    /// Attribute value written into the DOM.
    pub fn name(self) -> &'static str {
        match self {
            Action::ToggleNav => "toggle-nav",
            Action::Like => "like",
            Action::ReadMore => "read-more",
            Action::Back => "back",
            Action::PrevPage => "prev-page",
            Action::NextPage => "next-page",
            Action::Comment => "comment",
        }
    }

    /// Inverse of [`Action::name`].
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// Form controls bound to state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Posts-per-page selector.
    PageSize,
    /// Comment author input.
    DraftName,
    /// Comment body input.
    DraftBody,
}

impl Field {
    /// Attribute value written into the DOM.
    pub fn name(self) -> &'static str {
        match self {
            Field::PageSize => "page-size",
            Field::DraftName => "draft-name",
            Field::DraftBody => "draft-body",
        }
    }

    /// Inverse of [`Field::name`].
    pub fn parse(name: &str) -> Option<Self> {
        [Field::PageSize, Field::DraftName, Field::DraftBody]
            .into_iter()
            .find(|f| f.name() == name)
    }
}

/// Event for a click on an element carrying `action`. Form submission is not a
/// click action and yields `None`, as does a "Read more" without a usable id.
pub fn click_event(action: Action, post_id: Option<&str>) -> Option<AppEvent> {
    match action {
        Action::ToggleNav => Some(AppEvent::ToggleNav),
        Action::Like => Some(AppEvent::LikeClicked),
        Action::Back => Some(AppEvent::BackToList),
        Action::PrevPage => Some(AppEvent::PrevPage),
        Action::NextPage => Some(AppEvent::NextPage),
        Action::ReadMore => match post_id.map(str::parse::<PostId>) {
            Some(Ok(id)) => Some(AppEvent::ReadMore(id)),
            other => {
                debug!(?other, "read-more without a valid post id");
                None
            }
        },
        Action::Comment => None,
    }
}

/// Event for an edited control.
pub fn field_event(field: Field, value: &str) -> Option<AppEvent> {
    match field {
        Field::PageSize => value.parse::<PageSize>().ok().map(AppEvent::PageSizeChanged),
        Field::DraftName => Some(AppEvent::DraftNameChanged(value.to_string())),
        Field::DraftBody => Some(AppEvent::DraftBodyChanged(value.to_string())),
    }
}

/// Keystrokes in the comment form already show in the inputs; re-rendering on
/// them would only steal focus.
pub fn needs_render(ev: &AppEvent) -> bool {
    !matches!(
        ev,
        AppEvent::DraftNameChanged(_) | AppEvent::DraftBodyChanged(_)
    )
}
