//! Composer: owns the draft post and publishes it into the feed

use crate::feed::FeedStore;
use crate::ids::{IdGenerator, UuidIds};
use crate::models::{LocalUser, Post};

/// Holds exactly one draft post authored by the local user.
///
/// The draft never enters the feed itself; publishing hands the feed a
/// clone.
pub struct Composer {
    author: LocalUser,
    ids: Box<dyn IdGenerator>,
    draft: Post,
    hotkey_resets_draft: bool,
}

impl std::fmt::Debug for Composer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composer")
            .field("author", &self.author.handle)
            .field("draft", &self.draft)
            .field("hotkey_resets_draft", &self.hotkey_resets_draft)
            .finish_non_exhaustive()
    }
}

impl Composer {
    /// Create a composer with UUID identifiers
    pub fn new(author: LocalUser) -> Self {
        Self::with_ids(author, Box::new(UuidIds))
    }

    /// Create a composer with a custom identifier generator
    pub fn with_ids(author: LocalUser, mut ids: Box<dyn IdGenerator>) -> Self {
        let draft = Post::new_by(ids.next_id(), &author);
        Self {
            author,
            ids,
            draft,
            hotkey_resets_draft: false,
        }
    }

    /// Make the hotkey submit path reset the draft like a regular submit
    pub fn set_hotkey_resets_draft(&mut self, enabled: bool) {
        self.hotkey_resets_draft = enabled;
    }

    /// The draft currently being composed
    pub fn draft(&self) -> &Post {
        &self.draft
    }

    /// Identity stamped onto every draft
    pub fn author(&self) -> &LocalUser {
        &self.author
    }

    /// Replace the draft content. Any text, including empty, is accepted.
    pub fn update_content(&mut self, text: impl Into<String>) {
        self.draft.content = text.into();
    }

    /// Append a typed character
    pub fn push_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.draft.content);
        text.push(c);
        self.update_content(text);
    }

    /// Delete the last character
    pub fn pop_char(&mut self) {
        let mut text = std::mem::take(&mut self.draft.content);
        text.pop();
        self.update_content(text);
    }

    /// Insert a line break
    pub fn insert_newline(&mut self) {
        self.push_char('\n');
    }

    /// Publish the draft and start a fresh one
    pub fn submit(&mut self, feed: &mut FeedStore) {
        self.publish(feed);
        self.reset();
    }

    /// Publish the draft from the Ctrl+Enter shortcut.
    ///
    /// Unlike [`Composer::submit`] this keeps the draft as-is unless
    /// `hotkey_resets_draft` is enabled.
    pub fn submit_via_hotkey(&mut self, feed: &mut FeedStore) {
        self.publish(feed);
        if self.hotkey_resets_draft {
            self.reset();
        }
    }

    fn publish(&self, feed: &mut FeedStore) {
        tracing::debug!(id = %self.draft.id, chars = self.draft.content.len(), "publishing draft");
        feed.prepend(self.draft.clone());
    }

    fn reset(&mut self) {
        self.draft = Post::new_by(self.ids.next_id(), &self.author);
    }
}
