//! End-to-end behavior of the feed, composer, focus and modal pieces

use crossterm::event::KeyCode;
use warble::nav::{IconWeight, render_icon};
use warble::{
    Composer, FeedStore, FocusTracker, KeyboardHub, LocalUser, Modal, ModalState, NavConfig,
    NavShell, Post, Seed, SequentialIds, Session,
};

fn me() -> LocalUser {
    LocalUser::new("Me", "me", "https://example.com/me.png")
}

fn seeded() -> (FeedStore, Composer, usize) {
    let seed = Seed::builtin();
    let seed_len = seed.posts.len();
    let feed = FeedStore::new(seed.posts);
    let composer = Composer::with_ids(me(), Box::new(SequentialIds::new("post")));
    (feed, composer, seed_len)
}

#[test]
fn submissions_are_listed_newest_first_above_the_seed() {
    let (mut feed, mut composer, seed_len) = seeded();
    let seed_ids: Vec<String> = feed.iter().map(|p| p.id.clone()).collect();

    for text in ["one", "two", "three"] {
        composer.update_content(text);
        composer.submit(&mut feed);
    }

    assert_eq!(feed.len(), seed_len + 3);
    let contents: Vec<&str> = feed.iter().take(3).map(|p| p.content.as_str()).collect();
    assert_eq!(contents, ["three", "two", "one"]);
    let rest: Vec<String> = feed.iter().skip(3).map(|p| p.id.clone()).collect();
    assert_eq!(rest, seed_ids);
    assert!(feed.iter().take(3).all(|p| p.author_handle == "me"));
}

#[test]
fn submit_starts_a_fresh_draft() {
    let (mut feed, mut composer, _) = seeded();
    composer.update_content("hello");
    let old_id = composer.draft().id.clone();

    composer.submit(&mut feed);

    let draft = composer.draft();
    assert!(draft.content.is_empty());
    assert_ne!(draft.id, old_id);
    assert_eq!((draft.comments, draft.retweets, draft.likes), (0, 0, 0));
}

#[test]
fn hotkey_submit_publishes_without_resetting() {
    let (mut feed, mut composer, seed_len) = seeded();
    composer.update_content("draft stays");
    let before = composer.draft().clone();

    composer.submit_via_hotkey(&mut feed);

    assert_eq!(feed.len(), seed_len + 1);
    assert_eq!(feed.get(0), Some(&before));
    assert_eq!(composer.draft().content, "draft stays");
}

#[test]
fn duplicate_ids_are_accepted() {
    let mut feed = FeedStore::default();
    let a = Post::new_by("dup", &me()).with_content("a");
    let b = Post::new_by("dup", &me()).with_content("b");

    feed.prepend(a.clone());
    feed.prepend(b.clone());

    assert_eq!(feed.posts(), [b, a]);
}

#[test]
fn focus_last_event_wins() {
    let mut focus = FocusTracker::new();
    focus.on_focus("x");
    focus.on_focus("x");
    assert!(focus.is_focused("x"));
    focus.on_blur("x");
    assert!(!focus.is_focused("x"));
    assert!(!focus.is_focused("never-seen"));
}

#[test]
fn escape_closes_modal_and_drops_subscription() {
    let hub = KeyboardHub::new();
    let mut modal = Modal::new("drawer", hub.clone());
    modal.toggle();
    assert_eq!(modal.state(), ModalState::Open);
    assert_eq!(hub.listener_count(), 1);

    assert!(modal.handle_key(KeyCode::Esc));
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(hub.listener_count(), 0);

    assert!(!modal.handle_key(KeyCode::Esc));
    assert_eq!(modal.state(), ModalState::Closed);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn shells_share_one_hub_without_leaking() {
    let hub = KeyboardHub::new();
    let mut sidebar = NavShell::new(NavConfig::sidebar(), hub.clone());
    let mut header = NavShell::new(NavConfig::header(&me()), hub.clone());

    sidebar.toggle_modal();
    header.toggle_modal();
    assert_eq!(hub.listener_count(), 2);

    let mut auth = Session::signed_in("me");
    header.logout(&mut auth);
    assert_eq!(hub.listener_count(), 1);

    drop(sidebar);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn focused_links_render_filled_icons() {
    let mut nav = NavShell::new(NavConfig::sidebar(), KeyboardHub::new());
    nav.on_focus("bookmarks");

    for link in nav.links() {
        let icon = nav.link_icon(link);
        let expected = if link.id == "bookmarks" {
            IconWeight::Fill
        } else {
            IconWeight::Regular
        };
        assert_eq!(icon.weight, expected, "link {}", link.id);
        assert_eq!(icon, render_icon(link.icon, link.id == "bookmarks"));
    }
}
