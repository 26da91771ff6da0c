//! Optimistic read-state updates for notifications and opinions.
//!
//! Marking rows as read is fire-and-forget from the caller's perspective:
//! the in-memory flag flips synchronously and the backend write is issued
//! afterwards, with no rollback if it fails. The in-memory and persisted
//! states may diverge until the next full fetch; these helpers keep the
//! in-memory side of that contract pure and testable.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// A notification row as held in memory by a view.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub case_id: Option<DbId>,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// Flip one notification's read flag in place.
///
/// Returns `true` only when an unread row was actually flipped; marking an
/// already-read or unknown id is a no-op.
pub fn mark_read(items: &mut [NotificationRecord], id: DbId) -> bool {
    match items.iter_mut().find(|n| n.id == id) {
        Some(item) if !item.is_read => {
            item.is_read = true;
            true
        }
        _ => false,
    }
}

/// Flip every unread notification's flag in place, returning the number
/// flipped.
pub fn mark_all_read(items: &mut [NotificationRecord]) -> u64 {
    let mut flipped = 0;
    for item in items.iter_mut().filter(|n| !n.is_read) {
        item.is_read = true;
        flipped += 1;
    }
    flipped
}

/// Apply read flips to an unread counter: exactly one decrement per flip,
/// saturating at zero.
pub fn apply_read_flips(unread_count: u64, flips: u64) -> u64 {
    unread_count.saturating_sub(flips)
}

/// Number of unread rows in a list.
pub fn unread_count(items: &[NotificationRecord]) -> u64 {
    items.iter().filter(|n| !n.is_read).count() as u64
}
