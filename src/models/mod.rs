//! Data models for Warble

mod post;
mod user;

pub use post::Post;
pub use user::LocalUser;
