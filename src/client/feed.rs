//! Feed Cache
//!
//! The single in-memory source of truth for "what posts exist":
//! an ordered collection, newest first, synchronized with the server
//! through the optimistic-update protocol. Filtering and search
//! re-scan the whole cache on every change rather than keeping an
//! index; the cache is bounded to one feed's worth of data, so O(n)
//! per render is fine.

use crate::shared::models::{Post, PostPatch, PostStatus};

/// Active filter chip. A chip matches a post when it equals the
/// post's status or is contained in the post's location, which is
/// how the location chips double as filters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedFilter {
    #[default]
    All,
    Chip(String),
}

impl FeedFilter {
    /// Parse a chip value; "all" (any case) means no filter
    pub fn parse(value: &str) -> Self {
        let value = value.trim().to_lowercase();
        if value.is_empty() || value == "all" {
            FeedFilter::All
        } else {
            FeedFilter::Chip(value)
        }
    }

    fn matches(&self, post: &Post) -> bool {
        match self {
            FeedFilter::All => true,
            FeedFilter::Chip(chip) => {
                post.status.as_str() == chip || post.location.to_lowercase().contains(chip)
            }
        }
    }
}

/// In-memory feed state: the post cache plus the derived view filters
#[derive(Debug, Default)]
pub struct FeedState {
    posts: Vec<Post>,
    active_filter: FeedFilter,
    search_query: String,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a server-loaded feed
    pub fn replace_all(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Insert an optimistic record at the head (newest first)
    pub fn insert_at_head(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    /// Replace the placeholder record with the server's authoritative
    /// copy, in place. Denormalized author display fields the server
    /// response omits are preserved from the local record. Returns
    /// whether the placeholder was found.
    pub fn reconcile_created(&mut self, placeholder_id: &str, server_post: Post) -> bool {
        let Some(local) = self.posts.iter_mut().find(|p| p.id == placeholder_id) else {
            tracing::warn!("placeholder {} missing at reconciliation", placeholder_id);
            return false;
        };
        let mut merged = server_post;
        if merged.owner_handle.is_empty() {
            merged.owner_handle = local.owner_handle.clone();
        }
        if merged.owner_display_name.is_empty() {
            merged.owner_display_name = local.owner_display_name.clone();
        }
        if merged.owner_initials.is_empty() {
            merged.owner_initials = local.owner_initials.clone();
        }
        if merged.owner_color.is_empty() {
            merged.owner_color = local.owner_color.clone();
        }
        *local = merged;
        true
    }

    /// Apply an edit to the cached record, in place
    pub fn apply_edit(&mut self, id: &str, patch: &PostPatch) -> bool {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if let Some(title) = &patch.title {
            post.title = title.clone();
        }
        if let Some(description) = &patch.description {
            post.description = description.clone();
        }
        if let Some(status) = patch.status {
            post.status = status;
        }
        true
    }

    /// Remove a post from the cache (hard-remove client-side; the
    /// server keeps a soft-deleted row)
    pub fn remove(&mut self, id: &str) -> Option<Post> {
        let index = self.posts.iter().position(|p| p.id == id)?;
        Some(self.posts.remove(index))
    }

    /// Bump the cached comment count after a successful comment
    /// create. Not re-reconciled against the server within the
    /// session; a full reload picks up the authoritative count.
    pub fn increment_comment_count(&mut self, post_id: &str) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.comment_count += 1;
        }
    }

    pub fn active_filter(&self) -> &FeedFilter {
        &self.active_filter
    }

    pub fn set_filter(&mut self, filter: FeedFilter) {
        self.active_filter = filter;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// The visible subset of the cache under the active filter and
    /// search query, in cache order. Both predicates must hold; an
    /// empty query matches everything.
    pub fn apply_filters(&self) -> Vec<&Post> {
        let query = self.search_query.trim().to_lowercase();
        self.posts
            .iter()
            .filter(|post| self.active_filter.matches(post) && search_matches(post, &query))
            .collect()
    }

    /// Visible posts filtered by a specific status (used by the
    /// dashboard's status tabs)
    pub fn with_status(&self, status: PostStatus) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.status == status).collect()
    }
}

/// Case-insensitive substring match across the searchable fields
fn search_matches(post: &Post, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [
        &post.title,
        &post.description,
        &post.location,
        &post.category,
        &post.owner_handle,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}
