//! Application Context
//!
//! The explicit, constructed application state: one `AppContext` per
//! running client, built once at startup and passed to the rendering
//! layer. It owns the session, the feed cache, the open comment
//! panel and DM thread, and drives every mutation through the
//! optimistic-update protocol:
//!
//! 1. validate locally (fail fast, no network)
//! 2. mutate the cache and let the caller re-render immediately
//! 3. issue the API call
//! 4. on success, reconcile the placeholder with the server record
//! 5. on failure, surface the error; nothing is rolled back except a
//!    failed post create, whose placeholder has no server identity
//!    to ever reconcile against
//!
//! A rejected token anywhere in this flow collapses the session back
//! to anonymous.

use crate::client::api::ApiClient;
use crate::client::config::Config;
use crate::client::feed::FeedState;
use crate::client::optimistic::{EntityKind, OptimisticTracker};
use crate::client::session::SessionManager;
use crate::client::threads::{self, CommentNode};
use crate::shared::error::{ApiError, AppError, ValidationError};
use crate::shared::models::{
    Comment, Conversation, DirectMessage, NewComment, NewPost, Post, PostPatch, Profile,
};
use futures_util::future;
use std::sync::Arc;

/// Process-wide client state with a defined lifecycle: construct
/// once, `init()` at startup, no implicit re-initialization.
pub struct AppContext {
    api: Arc<ApiClient>,
    session: SessionManager,
    feed: FeedState,
    optimistic: OptimisticTracker,
    conversations: Vec<Conversation>,
    /// The post whose comment panel is open, with its loaded comments
    open_thread: Option<(String, Vec<Comment>)>,
    /// The user whose DM sheet is open, with the loaded messages
    dm_thread: Option<(String, Vec<DirectMessage>)>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let api = Arc::new(ApiClient::new(config));
        Self {
            api: api.clone(),
            session: SessionManager::new(api),
            feed: FeedState::new(),
            optimistic: OptimisticTracker::new(),
            conversations: Vec::new(),
            open_thread: None,
            dm_thread: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionManager {
        &mut self.session
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut FeedState {
        &mut self.feed
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Boot sequence: restore any persisted session, then hydrate.
    /// The feed is public and loads either way; the DM thread list
    /// needs a session, so both are fetched together when one exists.
    pub async fn init(&mut self) {
        self.session.restore().await;
        if self.session.is_authenticated() {
            let (posts, conversations) =
                future::join(self.api.get_posts(), self.api.get_conversations()).await;
            self.feed.replace_all(posts);
            self.conversations = conversations;
            // A 401 inside either fetch purged the token silently
            self.session.collapse_if_token_lost().await;
        } else {
            let posts = self.api.get_posts().await;
            self.feed.replace_all(posts);
        }
    }

    /// Reload the full feed from the server
    pub async fn refresh_feed(&mut self) {
        let posts = self.api.get_posts().await;
        self.feed.replace_all(posts);
        self.session.collapse_if_token_lost().await;
    }

    /// Sign out; the public feed stays cached, private state is
    /// dropped
    pub async fn sign_out(&mut self) {
        self.session.sign_out().await;
        self.conversations.clear();
        self.dm_thread = None;
    }

    // ── Posts ────────────────────────────────────────────────────

    /// Create a post optimistically. The record appears at the head
    /// of the feed immediately under a placeholder id; on success it
    /// is reconciled to the server record and the server id is
    /// returned. On failure the placeholder is removed - it has no
    /// server identity, so a retry creates a fresh one.
    pub async fn create_post(&mut self, fields: NewPost) -> Result<String, AppError> {
        let profile = self.require_profile()?.clone();
        if fields.title.trim().is_empty() {
            return Err(ValidationError::new("title", "cannot be empty").into());
        }

        let placeholder_id = self.optimistic.begin(EntityKind::Post);
        self.feed
            .insert_at_head(local_post(&placeholder_id, &profile, &fields));

        match self.api.create_post(&fields).await {
            Ok(server_post) => {
                let server_id = server_post.id.clone();
                self.feed.reconcile_created(&placeholder_id, server_post);
                self.optimistic.confirm(&placeholder_id);
                Ok(server_id)
            }
            Err(e) => {
                self.optimistic.abandon(&placeholder_id);
                self.feed.remove(&placeholder_id);
                self.note_api_error(&e);
                Err(e.into())
            }
        }
    }

    /// Edit a post: the cache is updated in place before the call.
    /// On failure the local edit stays; the user undoes it by
    /// editing again.
    pub async fn save_edit(&mut self, post_id: &str, patch: PostPatch) -> Result<(), AppError> {
        self.feed.apply_edit(post_id, &patch);
        match self.api.update_post(post_id, &patch).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.note_api_error(&e);
                Err(e.into())
            }
        }
    }

    /// Delete a post: removed from the cache immediately, soft
    /// deleted server-side. On failure the post stays removed
    /// locally; a reload resurrects it.
    pub async fn delete_post(&mut self, post_id: &str) -> Result<(), AppError> {
        self.feed.remove(post_id);
        match self.api.delete_post(post_id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.note_api_error(&e);
                Err(e.into())
            }
        }
    }

    // ── Comments ─────────────────────────────────────────────────

    /// Open the comment panel for a post
    pub fn open_comments(&mut self, post_id: &str) {
        self.open_thread = Some((post_id.to_string(), Vec::new()));
    }

    pub fn close_comments(&mut self) {
        self.open_thread = None;
    }

    /// Fetch a post's comments. There is no request cancellation, so
    /// a response arriving after the panel moved on (or closed) is
    /// dropped here: the result is applied only if the panel still
    /// shows the post the response belongs to.
    pub async fn load_comments(&mut self, post_id: &str) -> Option<Vec<CommentNode>> {
        let comments = self.api.get_comments(post_id).await;
        self.session.collapse_if_token_lost().await;
        match &mut self.open_thread {
            Some((open_id, cached)) if open_id == post_id => {
                *cached = comments;
                Some(threads::assemble(cached.clone()))
            }
            _ => {
                tracing::debug!("dropping comments for {}: panel moved on", post_id);
                None
            }
        }
    }

    /// The open panel's comments as a reply tree
    pub fn comment_tree(&self) -> Vec<CommentNode> {
        match &self.open_thread {
            Some((_, comments)) => threads::assemble(comments.clone()),
            None => Vec::new(),
        }
    }

    /// Comment (or reply) on the open post, optimistically. The
    /// placeholder is swapped for the server record on success and
    /// the cached comment count bumped; on failure it stays in the
    /// panel and the user retries manually.
    pub async fn submit_comment(
        &mut self,
        body: &str,
        parent_id: Option<String>,
        image_url: Option<String>,
    ) -> Result<Comment, AppError> {
        let profile = self.require_profile()?.clone();
        if body.trim().is_empty() {
            return Err(ValidationError::new("comment", "cannot be empty").into());
        }
        let post_id = match &self.open_thread {
            Some((id, _)) => id.clone(),
            None => return Err(ValidationError::new("comment", "no open post").into()),
        };

        let placeholder_id = self.optimistic.begin(EntityKind::Comment);
        let placeholder = local_comment(
            &placeholder_id,
            &post_id,
            &profile,
            body,
            parent_id.clone(),
            image_url.clone(),
        );
        if let Some((_, cached)) = &mut self.open_thread {
            cached.push(placeholder);
        }

        let new_comment = NewComment {
            body: body.to_string(),
            parent_id,
            image_url,
        };
        match self.api.create_comment(&post_id, &new_comment).await {
            Ok(server_comment) => {
                if let Some((_, cached)) = &mut self.open_thread {
                    if let Some(slot) = cached.iter_mut().find(|c| c.id == placeholder_id) {
                        *slot = server_comment.clone();
                    }
                }
                self.optimistic.confirm(&placeholder_id);
                self.feed.increment_comment_count(&post_id);
                Ok(server_comment)
            }
            Err(e) => {
                self.optimistic.abandon(&placeholder_id);
                self.note_api_error(&e);
                Err(e.into())
            }
        }
    }

    // ── Direct messages ──────────────────────────────────────────

    /// Open the DM sheet for another user
    pub fn open_dm(&mut self, other_uid: &str) {
        self.dm_thread = Some((other_uid.to_string(), Vec::new()));
    }

    pub fn close_dm(&mut self) {
        self.dm_thread = None;
    }

    /// Fetch the open thread's messages; same stale-response guard
    /// as `load_comments`.
    pub async fn load_dm_thread(&mut self, other_uid: &str) -> Option<&[DirectMessage]> {
        let messages = self.api.get_thread(other_uid).await;
        self.session.collapse_if_token_lost().await;
        match &mut self.dm_thread {
            Some((open_uid, cached)) if open_uid == other_uid => {
                *cached = messages;
                Some(cached.as_slice())
            }
            _ => {
                tracing::debug!("dropping thread for {}: sheet moved on", other_uid);
                None
            }
        }
    }

    /// Send a message on the open DM thread, optimistically
    pub async fn send_dm(&mut self, body: &str) -> Result<DirectMessage, AppError> {
        let profile = self.require_profile()?.clone();
        if body.trim().is_empty() {
            return Err(ValidationError::new("message", "cannot be empty").into());
        }
        let other_uid = match &self.dm_thread {
            Some((uid, _)) => uid.clone(),
            None => return Err(ValidationError::new("message", "no open thread").into()),
        };

        let placeholder_id = self.optimistic.begin(EntityKind::DirectMessage);
        let placeholder = DirectMessage {
            id: placeholder_id.clone(),
            from_uid: profile.handle.clone(),
            to_uid: other_uid.clone(),
            body: body.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        if let Some((_, cached)) = &mut self.dm_thread {
            cached.push(placeholder);
        }

        match self.api.send_dm(&other_uid, body).await {
            Ok(server_message) => {
                if let Some((_, cached)) = &mut self.dm_thread {
                    if let Some(slot) = cached.iter_mut().find(|m| m.id == placeholder_id) {
                        *slot = server_message.clone();
                    }
                }
                self.optimistic.confirm(&placeholder_id);
                Ok(server_message)
            }
            Err(e) => {
                self.optimistic.abandon(&placeholder_id);
                self.note_api_error(&e);
                Err(e.into())
            }
        }
    }

    // ── Internals ────────────────────────────────────────────────

    fn require_profile(&self) -> Result<&Profile, AppError> {
        self.session
            .profile()
            .ok_or_else(|| AppError::Api(ApiError::Unauthorized))
    }

    fn note_api_error(&mut self, error: &ApiError) {
        self.session.handle_api_error(error);
    }
}

/// Build the optimistic local post record from the signed-in profile
/// and the submitted fields
fn local_post(placeholder_id: &str, profile: &Profile, fields: &NewPost) -> Post {
    Post {
        id: placeholder_id.to_string(),
        owner_id: profile.id.clone(),
        owner_handle: profile.handle.clone(),
        owner_display_name: profile.display_name.clone(),
        owner_initials: profile.initials.clone(),
        owner_color: profile.color_tag.clone(),
        title: fields.title.clone(),
        description: fields.description.clone(),
        location: fields.location.clone(),
        category: fields.category.clone(),
        status: fields.status,
        created_at: chrono::Utc::now().to_rfc3339(),
        comment_count: 0,
        image_url: fields.image_url.clone(),
    }
}

fn local_comment(
    placeholder_id: &str,
    post_id: &str,
    profile: &Profile,
    body: &str,
    parent_id: Option<String>,
    image_url: Option<String>,
) -> Comment {
    Comment {
        id: placeholder_id.to_string(),
        post_id: post_id.to_string(),
        author_handle: profile.handle.clone(),
        author_display_name: profile.display_name.clone(),
        author_initials: profile.initials.clone(),
        author_color: profile.color_tag.clone(),
        body: body.to_string(),
        image_url,
        parent_id,
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}
