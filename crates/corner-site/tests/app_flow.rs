// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end flows through `App` with the fake effects runner and in-memory storage.
use corner_app_core::memory::MemoryConfigStore;
use corner_site::app::App;
use corner_site::config::SiteConfig;
use corner_site::core::{BlogView, LoadState};
use corner_site::model::{Comment, CommentId, Post, PostId, PostWithComments};
use corner_site::routes::Page;
use corner_site::session::{SessionPort, COMMENTS_KEY, LIKE_COUNT_KEY, POST_ID_KEY};
use corner_site::ui_effects::FakeEffectsRunner;
use corner_site::ui_state::{AppEffect, AppEvent};

fn post(id: u64) -> Post {
    Post {
        id: PostId(id),
        title: format!("Post {id}"),
        body: format!("Body of post {id}"),
    }
}

fn boot(runner: FakeEffectsRunner, hash: &str) -> App<FakeEffectsRunner> {
    let session = runner.session.load_session();
    App::boot(session, hash, SiteConfig::default(), runner)
}

#[test]
fn navigation_updates_route_and_title() {
    let mut app = boot(FakeEffectsRunner::default(), "");
    assert_eq!(app.state().route.page, Page::Home);
    assert_eq!(app.runner().title.as_deref(), Some("Home - App"));

    app.dispatch(AppEvent::HashChanged("#/contact".into()));
    assert_eq!(app.state().route.page, Page::Contact);
    assert_eq!(app.runner().title.as_deref(), Some("Contact - App"));

    app.dispatch(AppEvent::HashChanged("#/nowhere".into()));
    assert_eq!(app.state().route.page, Page::NotFound);
    assert_eq!(app.runner().title.as_deref(), Some("Page not found - App"));
}

#[test]
fn likes_are_persisted_on_every_click() {
    let mut app = boot(FakeEffectsRunner::default(), "#/");
    for _ in 0..4 {
        app.dispatch(AppEvent::LikeClicked);
    }
    assert_eq!(app.state().like_count, 4);
    assert_eq!(
        app.runner().session.store().raw(LIKE_COUNT_KEY).as_deref(),
        Some("4")
    );
}

#[test]
fn like_count_resumes_from_storage() {
    let runner = FakeEffectsRunner::with_store(MemoryConfigStore::with_entries([(
        LIKE_COUNT_KEY,
        "9",
    )]));
    let mut app = boot(runner, "#/");
    app.dispatch(AppEvent::LikeClicked);
    assert_eq!(
        app.runner().session.store().raw(LIKE_COUNT_KEY).as_deref(),
        Some("10")
    );
}

#[test]
fn listing_loads_and_paginates_thirteen_posts() {
    let mut runner = FakeEffectsRunner::default();
    runner.posts = Some(Ok((0..13).map(post).collect()));
    let mut app = boot(runner, "#/blog");

    let listing = &app.state().listing;
    assert_eq!(listing.load, LoadState::Loaded);
    let ids: Vec<u64> = listing.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    assert!(listing.pager.has_next(listing.posts.len()));

    app.dispatch(AppEvent::NextPage);
    app.dispatch(AppEvent::NextPage);
    let listing = &app.state().listing;
    let ids: Vec<u64> = listing.visible().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![12]);
    assert!(!listing.pager.has_next(listing.posts.len()));
}

#[test]
fn failed_list_fetch_leaves_an_empty_listing() {
    let mut runner = FakeEffectsRunner::default();
    runner.posts = Some(Err("network down".into()));
    let app = boot(runner, "#/blog");
    let listing = &app.state().listing;
    assert!(listing.posts.is_empty());
    assert_eq!(listing.load, LoadState::Failed("network down".into()));
}

#[test]
fn selecting_a_post_replaces_comments_and_back_clears_them() {
    let server_comments = vec![
        Comment::new(CommentId::Remote(11), "Emma Wilson", "Great read"),
        Comment::new(CommentId::Remote(12), "Liam Garcia", "Agreed"),
    ];
    let mut runner = FakeEffectsRunner::default();
    runner.posts = Some(Ok((1..=3).map(post).collect()));
    runner.details.insert(
        PostId(2),
        Ok(PostWithComments {
            post: post(2),
            comments: server_comments.clone(),
        }),
    );
    let mut app = boot(runner, "#/blog");

    app.dispatch(AppEvent::ReadMore(PostId(2)));
    let state = app.state();
    assert_eq!(state.blog_view(), Some(BlogView::Detail(PostId(2))));
    assert_eq!(state.comments, server_comments);
    assert_eq!(
        state.detail.as_ref().and_then(|d| d.post.as_ref()).map(|p| p.id),
        Some(PostId(2))
    );
    let store = app.runner().session.store();
    assert_eq!(store.raw(POST_ID_KEY).as_deref(), Some("2"));
    assert!(store
        .raw(COMMENTS_KEY)
        .is_some_and(|raw| raw.contains("Great read")));

    app.dispatch(AppEvent::BackToList);
    let state = app.state();
    assert_eq!(state.post_id, None);
    assert!(state.comments.is_empty());
    assert_eq!(state.blog_view(), Some(BlogView::Listing));
    let store = app.runner().session.store();
    assert!(store.raw(POST_ID_KEY).is_none());
    assert_eq!(store.raw(COMMENTS_KEY).as_deref(), Some("[]"));
}

#[test]
fn submitting_a_comment_appends_and_persists() {
    let mut runner = FakeEffectsRunner::with_store(MemoryConfigStore::with_entries([(
        POST_ID_KEY,
        "7",
    )]));
    runner.details.insert(
        PostId(7),
        Ok(PostWithComments {
            post: post(7),
            comments: Vec::new(),
        }),
    );
    let mut app = boot(runner, "#/blog");
    assert!(app.state().shows_comments());

    app.dispatch(AppEvent::DraftNameChanged("Ada".into()));
    app.dispatch(AppEvent::DraftBodyChanged("Hello".into()));
    app.dispatch(AppEvent::SubmitComment {
        id: CommentId::Local("3f0c".into()),
    });

    let state = app.state();
    assert_eq!(state.comments.len(), 1);
    assert!(state.draft.name.is_empty());
    assert!(state.draft.body.is_empty());
    assert_eq!(
        app.runner().session.store().raw(COMMENTS_KEY).as_deref(),
        Some(r#"[{"id":"3f0c","user":{"fullName":"Ada"},"body":"Hello"}]"#)
    );

    // Empty name: nothing appended, nothing written.
    let writes_before = app.runner().calls.len();
    app.dispatch(AppEvent::DraftBodyChanged("Again".into()));
    app.dispatch(AppEvent::SubmitComment {
        id: CommentId::Local("3f0d".into()),
    });
    assert_eq!(app.state().comments.len(), 1);
    assert_eq!(app.runner().calls.len(), writes_before);
}

#[test]
fn restart_with_persisted_post_id_opens_the_detail_view() {
    let runner = FakeEffectsRunner::with_store(MemoryConfigStore::with_entries([(
        POST_ID_KEY,
        "42",
    )]));
    let app = boot(runner, "#/blog");
    assert_eq!(app.state().blog_view(), Some(BlogView::Detail(PostId(42))));
    assert_eq!(
        app.runner().fetches(),
        vec![&AppEffect::FetchPost(PostId(42))]
    );
}

#[test]
fn malformed_stored_comments_start_empty() {
    let runner = FakeEffectsRunner::with_store(MemoryConfigStore::with_entries([
        (COMMENTS_KEY, "not json"),
        (LIKE_COUNT_KEY, "2"),
    ]));
    let app = boot(runner, "#/");
    assert!(app.state().comments.is_empty());
    assert_eq!(app.state().like_count, 2);
}

#[test]
fn storage_write_failure_does_not_lose_in_memory_state() {
    let runner = FakeEffectsRunner::default();
    runner.session.store().set_fail_writes(true);
    let mut app = boot(runner, "#/");
    app.dispatch(AppEvent::LikeClicked);
    assert_eq!(app.state().like_count, 1);
    assert!(app.runner().session.store().raw(LIKE_COUNT_KEY).is_none());
}
