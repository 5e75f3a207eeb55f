//! Feed store: the ordered list of published posts, newest first

use crate::models::Post;

/// Ordered sequence of published posts.
///
/// The only mutation is [`FeedStore::prepend`]. Posts are handed out by
/// shared reference, so nothing outside the store can edit a published
/// post in place.
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
}

impl FeedStore {
    /// Create a store pre-populated with seed posts (already newest first)
    pub fn new(seed: Vec<Post>) -> Self {
        Self { posts: seed }
    }

    /// Insert a post at the top of the feed.
    ///
    /// Duplicate ids are accepted as-is.
    pub fn prepend(&mut self, post: Post) {
        tracing::debug!(id = %post.id, "prepending post to feed");
        self.posts.insert(0, post);
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Iterate posts, newest first
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    /// Post at `index` (0 is the newest)
    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Newest post with the given id
    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the feed is empty
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl<'a> IntoIterator for &'a FeedStore {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalUser;

    fn post(id: &str, content: &str) -> Post {
        let user = LocalUser::new("Someone", "someone", "");
        Post::new_by(id, &user).with_content(content)
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut feed = FeedStore::new(vec![post("s1", "seed")]);
        feed.prepend(post("a", "first"));
        feed.prepend(post("b", "second"));

        let ids: Vec<_> = feed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "s1"]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let mut feed = FeedStore::default();
        feed.prepend(post("same", "one"));
        feed.prepend(post("same", "two"));

        assert_eq!(feed.len(), 2);
        assert_eq!(feed.get(0).unwrap().content, "two");
        assert_eq!(feed.get(1).unwrap().content, "one");
        // find returns the newest match
        assert_eq!(feed.find("same").unwrap().content, "two");
    }

    #[test]
    fn test_empty_feed() {
        let feed = FeedStore::default();
        assert!(feed.is_empty());
        assert!(feed.get(0).is_none());
        assert!(feed.find("missing").is_none());
    }
}
