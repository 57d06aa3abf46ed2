//! Optimistic Operation Tracking
//!
//! One generic mechanism for the optimistic-update protocol every
//! mutation follows: mutate the local cache immediately under a
//! client-generated placeholder id, then confirm against the server
//! response (or abandon on failure). Parameterized by entity kind so
//! posts, comments, and direct messages all share it instead of each
//! reimplementing the temporary-id dance.

use std::collections::HashMap;
use uuid::Uuid;

/// Placeholder ids carry this prefix until the server assigns a real
/// one
const PLACEHOLDER_PREFIX: &str = "tmp-";

/// Kind of entity an optimistic operation creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Post,
    Comment,
    DirectMessage,
}

/// A not-yet-confirmed optimistic operation
#[derive(Debug, Clone)]
pub struct PendingOp {
    /// Client-generated placeholder id
    pub id: String,
    pub kind: EntityKind,
    /// When the local mutation was applied, RFC3339
    pub begun_at: String,
}

/// Tracks pending optimistic operations by placeholder id
#[derive(Debug, Default)]
pub struct OptimisticTracker {
    pending: HashMap<String, PendingOp>,
}

impl OptimisticTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an optimistic operation; returns the placeholder id the
    /// local record should carry until reconciliation.
    pub fn begin(&mut self, kind: EntityKind) -> String {
        let id = format!("{}{}", PLACEHOLDER_PREFIX, Uuid::new_v4());
        let op = PendingOp {
            id: id.clone(),
            kind,
            begun_at: chrono::Utc::now().to_rfc3339(),
        };
        self.pending.insert(id.clone(), op);
        id
    }

    /// The server confirmed the operation; the placeholder is done.
    pub fn confirm(&mut self, placeholder_id: &str) -> Option<PendingOp> {
        self.pending.remove(placeholder_id)
    }

    /// The operation failed; the placeholder is dropped without a
    /// server identity.
    pub fn abandon(&mut self, placeholder_id: &str) -> Option<PendingOp> {
        self.pending.remove(placeholder_id)
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Whether an id is a client-generated placeholder rather than a
/// server-assigned key
pub fn is_placeholder_id(id: &str) -> bool {
    id.starts_with(PLACEHOLDER_PREFIX)
}
