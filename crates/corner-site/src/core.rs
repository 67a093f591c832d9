// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Application state for the blog (route, shared comments, listing/detail views).

use crate::comments::CommentDraft;
use crate::config::SiteConfig;
use crate::model::{Comment, Post, PostId};
use crate::pagination::Pager;
use crate::routes::{self, Page, Route};
use crate::session::PersistedSession;
use crate::ui_state::{mount_blog_view, AppEffect};

/// Progress of a network read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Response applied.
    Loaded,
    /// Request failed; prior data is kept.
    Failed(String),
}

/// Which body the Blog route shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlogView {
    /// Paginated post grid.
    Listing,
    /// A single post.
    Detail(PostId),
}

/// State of the post grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState {
    /// Every post returned by the list fetch.
    pub posts: Vec<Post>,
    /// Page window over `posts`.
    pub pager: Pager,
    /// List fetch progress.
    pub load: LoadState,
    /// Ticket of the list fetch this listing waits for.
    pub ticket: u64,
}

impl ListingState {
    /// Posts on the current page.
    pub fn visible(&self) -> &[Post] {
        self.pager.slice(&self.posts)
    }
}

/// State of the single-post view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailState {
    /// Post being shown.
    pub post_id: PostId,
    /// Loaded post; `None` until the fetch succeeds.
    pub post: Option<Post>,
    /// Detail fetch progress.
    pub load: LoadState,
}

/// Everything the views render from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// Current route.
    pub route: &'static Route,
    /// Selected post; `None` shows the listing.
    pub post_id: Option<PostId>,
    /// Shared comment list shown in the sidebar.
    pub comments: Vec<Comment>,
    /// Like counter.
    pub like_count: u64,
    /// Post grid.
    pub listing: ListingState,
    /// Single-post view, present while it is mounted.
    pub detail: Option<DetailState>,
    /// Comment form contents.
    pub draft: CommentDraft,
    /// Mobile nav menu expanded.
    pub nav_open: bool,
    /// Host-supplied settings.
    pub config: SiteConfig,
    /// Last issued list-fetch ticket.
    pub fetch_seq: u64,
}

impl AppState {
    /// Fresh state on the Home route with nothing persisted.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            route: &routes::ROUTES[0],
            post_id: None,
            comments: Vec::new(),
            like_count: 0,
            listing: ListingState::default(),
            detail: None,
            draft: CommentDraft::default(),
            nav_open: false,
            config,
            fetch_seq: 0,
        }
    }

    /// Build the startup state from the URL hash and the persisted session.
    /// Returns the effects the host must run before the first render.
    pub fn boot(
        session: PersistedSession,
        hash: &str,
        config: SiteConfig,
    ) -> (Self, Vec<AppEffect>) {
        let mut state = Self::new(config);
        state.route = routes::resolve_initial(hash);
        state.post_id = session.post_id;
        state.comments = session.comments;
        state.like_count = session.like_count;

        let mut fx = vec![AppEffect::SetTitle(state.title())];
        if state.route.page == Page::Blog {
            mount_blog_view(&mut state, &mut fx);
        }
        (state, fx)
    }

    /// Document title for the current route.
    pub fn title(&self) -> String {
        routes::page_title(self.route, &self.config.app_name)
    }

    /// Blog body to show, or `None` when another route is active.
    pub fn blog_view(&self) -> Option<BlogView> {
        if self.route.page != Page::Blog {
            return None;
        }
        Some(match self.post_id {
            Some(id) => BlogView::Detail(id),
            None => BlogView::Listing,
        })
    }

    /// The comments widget is shown (and accepts submissions) only on a post's detail view.
    pub fn shows_comments(&self) -> bool {
        matches!(self.blog_view(), Some(BlogView::Detail(_)))
    }
}
