//! Opinion (internal message) thread reconstruction.
//!
//! Opinions carry only a nullable `parent_id`; there is no stored thread
//! root. Threads are therefore inferred at read time by walking parent
//! references, and the rendered depth is capped at two levels (root →
//! reply → reply-to-reply); rows nested deeper than the cap are omitted
//! from the thread. Rows whose parent is absent from the fetched set root
//! a partial thread of their own. Thread membership is best-effort, not a
//! guaranteed-consistent grouping.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Maximum reply depth below a thread root.
pub const MAX_THREAD_DEPTH: usize = 2;

/// Guard against parent-reference cycles in inconsistent data.
const MAX_WALK: usize = 64;

/// An opinion row as seen by the threading logic.
#[derive(Debug, Clone, Serialize)]
pub struct OpinionRecord {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub case_id: Option<DbId>,
    pub subject: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// A reply with its depth below the thread root (1 or 2).
#[derive(Debug, Clone, Serialize)]
pub struct OpinionNode {
    pub opinion: OpinionRecord,
    pub depth: usize,
}

/// A reconstructed thread: root plus its replies, oldest-first.
#[derive(Debug, Clone, Serialize)]
pub struct OpinionThread {
    pub root: OpinionRecord,
    pub replies: Vec<OpinionNode>,
}

/// Walk parent references until a parentless row, a parent missing from the
/// fetched set, or the cycle guard.
///
/// Returns the id of the row the walk ends on and the number of hops taken.
fn resolve_root(opinion: &OpinionRecord, by_id: &HashMap<DbId, &OpinionRecord>) -> (DbId, usize) {
    let mut current = opinion;
    let mut hops = 0;
    while hops < MAX_WALK {
        match current.parent_id.and_then(|pid| by_id.get(&pid)) {
            Some(parent) => {
                current = parent;
                hops += 1;
            }
            None => break,
        }
    }
    (current.id, hops)
}

/// Group a fetched set of opinions into threads.
///
/// Each opinion lands in exactly one thread (the one rooted at its resolved
/// root); replies deeper than [`MAX_THREAD_DEPTH`] are silently omitted.
/// Roots are ordered newest-first; replies within a thread oldest-first.
pub fn build_threads(opinions: Vec<OpinionRecord>) -> Vec<OpinionThread> {
    let by_id: HashMap<DbId, &OpinionRecord> = opinions.iter().map(|o| (o.id, o)).collect();

    // Map each opinion to its resolved root and depth below it.
    let mut membership: HashMap<DbId, Vec<(DbId, usize)>> = HashMap::new();
    for opinion in &opinions {
        let (root_id, depth) = resolve_root(opinion, &by_id);
        membership.entry(root_id).or_default().push((opinion.id, depth));
    }

    let mut records: HashMap<DbId, OpinionRecord> =
        opinions.into_iter().map(|o| (o.id, o)).collect();

    let mut threads: Vec<OpinionThread> = membership
        .into_iter()
        .filter_map(|(root_id, members)| {
            let root = records.remove(&root_id)?;
            let mut replies: Vec<OpinionNode> = members
                .into_iter()
                .filter(|(id, depth)| *id != root_id && *depth <= MAX_THREAD_DEPTH)
                .filter_map(|(id, depth)| {
                    records.remove(&id).map(|opinion| OpinionNode { opinion, depth })
                })
                .collect();
            replies.sort_by_key(|n| n.opinion.created_at);
            Some(OpinionThread { root, replies })
        })
        .collect();

    threads.sort_by(|a, b| b.root.created_at.cmp(&a.root.created_at));
    threads
}
