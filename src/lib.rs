//! # Warble 🐦
//!
//! A small terminal social feed: write posts, browse the timeline.
//!
//! ## Overview
//!
//! Warble keeps everything in memory for one session. The feed starts
//! from seed data (built in, or a TOML file), new posts are prepended by
//! the composer, and a sidebar plus a header provide navigation with an
//! action sheet and an account drawer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                │
//! │     Terminal event loop, key/mouse routing, rendering       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │    Composer     │ │      Feed       │ │       Nav       │
//! │                 │ │                 │ │                 │
//! │ • Draft post    │ │ • Newest first  │ │ • Link focus    │
//! │ • Submit        │ │ • Prepend only  │ │ • Modal drawer  │
//! │ • Hotkey submit │ │                 │ │ • Icons         │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │  Config/Seed    │ │      Auth       │ │     Models      │
//! │                 │ │                 │ │                 │
//! │ • config.toml   │ │ • Signed-in     │ │ • Post          │
//! │ • seed.toml     │ │   signal        │ │ • LocalUser     │
//! │ • Theme         │ │ • Logout        │ │                 │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`app`] - TUI state, event handling and rendering
//! - [`auth`] - Authentication collaborator
//! - [`composer`] - Draft post and submission
//! - [`config`] - Configuration management
//! - [`feed`] - Ordered post store
//! - [`focus`] - Per-link focus state
//! - [`ids`] - Identifier generation
//! - [`modal`] - Modal lifecycle and keyboard subscriptions
//! - [`models`] - Data models (Post, LocalUser)
//! - [`nav`] - Sidebar/header navigation shell
//! - [`seed`] - Seed data
//! - [`theme`] - Theme support via ratatui-themes
//!
//! ## Example
//!
//! ```
//! use warble::{Composer, FeedStore, Seed};
//!
//! let seed = Seed::builtin();
//! let mut feed = FeedStore::new(seed.posts);
//! let mut composer = Composer::new(seed.user);
//!
//! composer.update_content("Hello from the terminal");
//! composer.submit(&mut feed);
//!
//! assert_eq!(feed.get(0).unwrap().content, "Hello from the terminal");
//! assert!(composer.draft().content.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]

pub mod app;
pub mod auth;
pub mod composer;
pub mod config;
pub mod error;
pub mod feed;
pub mod focus;
pub mod ids;
pub mod modal;
pub mod models;
pub mod nav;
pub mod paths;
pub mod seed;
pub mod theme;

// Re-export main types for convenience
pub use app::AppState;
pub use auth::{Authenticator, Session};
pub use composer::Composer;
pub use config::Config;
pub use error::SeedError;
pub use feed::FeedStore;
pub use focus::FocusTracker;
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use modal::{ClickTarget, KeyboardHub, Modal, ModalState};
pub use models::{LocalUser, Post};
pub use nav::{NavConfig, NavShell};
pub use seed::Seed;
pub use theme::{Appearance, Theme, ThemeColors};

// Re-export theme types from ratatui-themes crate
pub use ratatui_themes::{ThemeName, ThemePalette};

/// ASCII logo for the application
pub const LOGO: &str = r"
 __      __          _     _
 \ \    / /_ _ _ _  | |__ | |___
  \ \/\/ / _` | '_| | '_ \| / -_)
   \_/\_/\__,_|_|   |_.__/|_\___|
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
