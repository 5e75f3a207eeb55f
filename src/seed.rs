//! Seed data: the local user and the posts the feed starts with.
//!
//! A seed file is TOML:
//!
//! ```toml
//! [user]
//! name = "Ferris"
//! handle = "ferris"
//! avatar_url = "https://example.com/ferris.png"
//! followers = 12
//! following = 3
//!
//! [[posts]]
//! author_name = "Ferris"
//! author_handle = "ferris"
//! author_avatar = "https://example.com/ferris.png"
//! content = "Hello!"
//! likes = 4
//! ```
//!
//! Posts are listed newest first. Posts without an `id` get a fresh one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::models::{LocalUser, Post};

/// Initial session data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Identity that authors new posts
    pub user: LocalUser,
    /// Initial feed, newest first
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Seed {
    /// Built-in seed used when no seed file is configured
    pub fn builtin() -> Self {
        let mut user = LocalUser::new(
            "Ferris the Crab",
            "ferris",
            "https://rustacean.net/assets/rustacean-flat-happy.png",
        );
        user.followers = 1_024;
        user.following = 42;

        let corro = LocalUser::new(
            "Corro",
            "corro_unsafe",
            "https://rustacean.net/assets/corro.svg",
        );
        let tokio = LocalUser::new("Tokio", "tokio_rs", "https://tokio.rs/img/tokio-horizontal.svg");
        let crates = LocalUser::new("crates.io", "cratesio", "https://crates.io/assets/cargo.png");

        let posts = vec![
            Post::new_by("seed-4", &tokio)
                .with_content("New release out today. Fewer wakeups, same great taste.")
                .with_counters(12, 48, 310),
            Post::new_by("seed-3", &corro)
                .with_content("Reminder: every `unsafe` block deserves a SAFETY comment.\nNo exceptions.")
                .with_counters(31, 7, 96),
            Post::new_by("seed-2", &crates)
                .with_content("Over 150k crates published. Thank you all!")
                .with_image("https://crates.io/assets/cargo.png")
                .with_counters(5, 120, 980),
            Post::new_by("seed-1", &user)
                .with_content("Hello, timeline! 🦀")
                .with_counters(2, 1, 17),
        ];

        Self { user, posts }
    }

    /// Load a seed file
    pub fn load_from(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, falling back to the built-in seed on any error
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        match Self::load_from(path) {
            Ok(seed) => {
                tracing::info!(path = %path.display(), posts = seed.posts.len(), "loaded seed file");
                seed
            }
            Err(e) => {
                tracing::warn!("{e}; using built-in seed");
                Self::builtin()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_seed() {
        let seed = Seed::builtin();
        assert_eq!(seed.user.handle, "ferris");
        assert!(!seed.posts.is_empty());
        assert!(seed.posts.iter().any(|p| p.image_url.is_some()));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(
            &path,
            r#"
            [user]
            name = "Tester"
            handle = "tester"
            avatar_url = "https://example.com/t.png"
            followers = 3

            [[posts]]
            id = "fixed"
            author_name = "Tester"
            author_handle = "tester"
            author_avatar = "https://example.com/t.png"
            content = "first"
            likes = 9

            [[posts]]
            author_name = "Other"
            author_handle = "other"
            author_avatar = ""
            "#,
        )
        .unwrap();

        let seed = Seed::load_from(&path).unwrap();
        assert_eq!(seed.user.followers, 3);
        assert_eq!(seed.user.following, 0);
        assert_eq!(seed.posts.len(), 2);
        assert_eq!(seed.posts[0].id, "fixed");
        assert_eq!(seed.posts[0].likes, 9);
        assert!(!seed.posts[1].id.is_empty());
        assert!(seed.posts[1].content.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(&path, "[user\nname = ").unwrap();

        assert!(matches!(Seed::load_from(&path), Err(SeedError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(Seed::load_from(&path), Err(SeedError::Read { .. })));
        assert_eq!(Seed::load_or_builtin(Some(&path)), Seed::builtin());
    }
}
