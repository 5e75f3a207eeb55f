//! Post model (a single feed item)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LocalUser;

/// A post in the feed, or the draft being composed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque identifier, assigned once at creation
    #[serde(default = "fresh_id")]
    pub id: String,
    /// Author avatar URL
    pub author_avatar: String,
    /// Author display name
    pub author_name: String,
    /// Author handle (without the leading `@`)
    pub author_handle: String,
    /// Post body
    #[serde(default)]
    pub content: String,
    /// Attached media reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Number of replies
    #[serde(default)]
    pub comments: u32,
    /// Number of reposts
    #[serde(default)]
    pub retweets: u32,
    /// Number of likes
    #[serde(default)]
    pub likes: u32,
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl Post {
    /// Create an empty post authored by the given user, with zero counters
    pub fn new_by(id: impl Into<String>, author: &LocalUser) -> Self {
        Self {
            id: id.into(),
            author_avatar: author.avatar_url.clone(),
            author_name: author.name.clone(),
            author_handle: author.handle.clone(),
            content: String::new(),
            image_url: None,
            comments: 0,
            retweets: 0,
            likes: 0,
        }
    }

    /// Builder-style content setter, mostly for seed data
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builder-style image setter
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Builder-style counters setter
    pub fn with_counters(mut self, comments: u32, retweets: u32, likes: u32) -> Self {
        self.comments = comments;
        self.retweets = retweets;
        self.likes = likes;
        self
    }

    /// Whether all interaction counters are zero
    pub fn has_zero_counters(&self) -> bool {
        self.comments == 0 && self.retweets == 0 && self.likes == 0
    }

    /// Get a short single-line preview of the content
    pub fn preview(&self, max_chars: usize) -> String {
        let content = self.content.replace('\n', " ");
        if content.chars().count() <= max_chars {
            content
        } else {
            let cut: String = content.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{cut}...")
        }
    }

    /// Handle formatted for display (`@handle`)
    pub fn display_handle(&self) -> String {
        format!("@{}", self.author_handle)
    }
}
