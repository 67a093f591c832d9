// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pure state transitions for the blog UI (routing, blog views, sidebar).

use crate::comments::sync_comments;
use crate::core::{AppState, DetailState, ListingState, LoadState};
use crate::model::{CommentId, Post, PostId, PostWithComments};
use crate::pagination::{PageSize, Pager};
use crate::routes::{self, Page};
use tracing::{debug, warn};

/// Inputs to [`reduce`]: user actions and fetch completions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The URL fragment changed.
    HashChanged(String),
    /// Header menu button.
    ToggleNav,
    /// Like button.
    LikeClicked,
    /// "Read more" on a listed post.
    ReadMore(PostId),
    /// "Back to Blog" from the detail view.
    BackToList,
    /// Posts-per-page selector.
    PageSizeChanged(PageSize),
    /// "Next" page.
    NextPage,
    /// "Previous" page.
    PrevPage,
    /// Comment form name field edited.
    DraftNameChanged(String),
    /// Comment form body field edited.
    DraftBodyChanged(String),
    /// Comment form submitted; `id` is the identifier for the new comment.
    SubmitComment {
        /// Freshly generated identifier.
        id: CommentId,
    },
    /// List fetch completed.
    PostsLoaded {
        /// Ticket from the matching [`AppEffect::FetchPosts`].
        ticket: u64,
        /// Posts, or a failure description.
        result: Result<Vec<Post>, String>,
    },
    /// Detail fetch completed.
    PostLoaded {
        /// Post the fetch was issued for.
        id: PostId,
        /// Post plus comments, or a failure description.
        result: Result<PostWithComments, String>,
    },
}

/// Side effects requested by [`reduce`]; run by an effects runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEffect {
    /// Set the document title.
    SetTitle(String),
    /// Write `post_id` (removing the key when cleared).
    PersistPostId,
    /// Write the full comment list.
    PersistComments,
    /// Write the like counter.
    PersistLikeCount,
    /// Fetch every post; answer with [`AppEvent::PostsLoaded`] carrying `ticket`.
    FetchPosts {
        /// Identifies this request among overlapping ones.
        ticket: u64,
    },
    /// Fetch a post and its comments; answer with [`AppEvent::PostLoaded`].
    FetchPost(PostId),
}

/// Apply one event, returning the next state and the effects to run.
pub fn reduce(state: &AppState, ev: AppEvent) -> (AppState, Vec<AppEffect>) {
    let mut next = state.clone();
    let mut fx = Vec::new();
    match ev {
        AppEvent::HashChanged(hash) => {
            let was_blog = next.route.page == Page::Blog;
            next.route = routes::resolve(&hash);
            let is_blog = next.route.page == Page::Blog;
            fx.push(AppEffect::SetTitle(next.title()));
            if was_blog && !is_blog {
                unmount_blog_view(&mut next);
            } else if is_blog && !was_blog {
                mount_blog_view(&mut next, &mut fx);
            }
        }
        AppEvent::ToggleNav => next.nav_open = !next.nav_open,
        AppEvent::LikeClicked => {
            next.like_count = next.like_count.saturating_add(1);
            fx.push(AppEffect::PersistLikeCount);
        }
        AppEvent::ReadMore(id) => {
            next.post_id = Some(id);
            fx.push(AppEffect::PersistPostId);
            unmount_blog_view(&mut next);
            if next.route.page == Page::Blog {
                mount_detail(&mut next, id, &mut fx);
            }
        }
        AppEvent::BackToList => {
            next.post_id = None;
            next.comments.clear();
            fx.push(AppEffect::PersistPostId);
            fx.push(AppEffect::PersistComments);
            unmount_blog_view(&mut next);
            if next.route.page == Page::Blog {
                mount_listing(&mut next, &mut fx);
            }
        }
        AppEvent::PageSizeChanged(size) => next.listing.pager.set_size(size),
        AppEvent::NextPage => {
            let total = next.listing.posts.len();
            next.listing.pager.next(total);
        }
        AppEvent::PrevPage => {
            next.listing.pager.prev();
        }
        AppEvent::DraftNameChanged(name) => next.draft.name = name,
        AppEvent::DraftBodyChanged(body) => next.draft.body = body,
        AppEvent::SubmitComment { id } => {
            if !next.shows_comments() {
                debug!("comment submitted outside a post view; ignoring");
            } else if let Some(comment) = next.draft.take_comment(id) {
                next.comments.push(comment);
                fx.push(AppEffect::PersistComments);
            }
        }
        AppEvent::PostsLoaded { ticket, result } => {
            let listing = &mut next.listing;
            if listing.ticket != ticket || listing.load != LoadState::Loading {
                debug!(ticket, current = listing.ticket, "discarding stale post list");
            } else {
                match result {
                    Ok(posts) => {
                        debug!(count = posts.len(), "post list loaded");
                        listing.posts = posts;
                        listing.load = LoadState::Loaded;
                    }
                    Err(err) => {
                        warn!(error = %err, "post list fetch failed");
                        listing.load = LoadState::Failed(err);
                    }
                }
            }
        }
        AppEvent::PostLoaded { id, result } => {
            let awaiting = next.post_id == Some(id)
                && next
                    .detail
                    .as_ref()
                    .is_some_and(|d| d.post_id == id && d.load == LoadState::Loading);
            if !awaiting {
                debug!(post = %id, "discarding stale post response");
            } else if let Some(detail) = next.detail.as_mut() {
                match result {
                    Ok(PostWithComments { post, comments }) => {
                        detail.post = Some(post);
                        detail.load = LoadState::Loaded;
                        next.comments =
                            sync_comments(&next.comments, comments, next.config.comment_sync);
                        fx.push(AppEffect::PersistComments);
                    }
                    Err(err) => {
                        warn!(post = %id, error = %err, "post fetch failed");
                        detail.load = LoadState::Failed(err);
                    }
                }
            }
        }
    }
    (next, fx)
}

/// Mount whichever Blog body the selected post id calls for.
pub(crate) fn mount_blog_view(state: &mut AppState, fx: &mut Vec<AppEffect>) {
    match state.post_id {
        Some(id) => mount_detail(state, id, fx),
        None => mount_listing(state, fx),
    }
}

fn mount_listing(state: &mut AppState, fx: &mut Vec<AppEffect>) {
    state.fetch_seq += 1;
    let ticket = state.fetch_seq;
    state.listing = ListingState {
        posts: Vec::new(),
        pager: Pager::new(state.config.default_page_size),
        load: LoadState::Loading,
        ticket,
    };
    fx.push(AppEffect::FetchPosts { ticket });
}

fn mount_detail(state: &mut AppState, id: PostId, fx: &mut Vec<AppEffect>) {
    state.detail = Some(DetailState {
        post_id: id,
        post: None,
        load: LoadState::Loading,
    });
    fx.push(AppEffect::FetchPost(id));
}

fn unmount_blog_view(state: &mut AppState) {
    state.listing = ListingState::default();
    state.detail = None;
}
