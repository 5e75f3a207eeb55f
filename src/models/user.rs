//! Local user identity

use serde::{Deserialize, Serialize};

/// The identity that authors new posts in this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    /// Display name
    pub name: String,
    /// Handle/login (without the leading `@`)
    pub handle: String,
    /// Avatar URL
    pub avatar_url: String,
    /// Follower count
    #[serde(default)]
    pub followers: u32,
    /// Following count
    #[serde(default)]
    pub following: u32,
}

impl LocalUser {
    /// Create a user with zero follower/following counts
    pub fn new(name: &str, handle: &str, avatar_url: &str) -> Self {
        Self {
            name: name.to_string(),
            handle: handle.to_string(),
            avatar_url: avatar_url.to_string(),
            followers: 0,
            following: 0,
        }
    }

    /// Placeholder identity shown when nobody is signed in
    pub fn anonymous() -> Self {
        Self::new("user", "user", "")
    }

    /// Handle formatted for display (`@handle`)
    pub fn display_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}
