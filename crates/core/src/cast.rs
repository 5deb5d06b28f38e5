//! Idempotent cast linking.
//!
//! [`RelationshipLinker::link`] makes every requested actor part of a movie's
//! cast exactly once. Existing relations are left alone, duplicate ids in the
//! request collapse to one, and a uniqueness violation raised by the store
//! during insert (another caller linked the same pair first) counts as
//! "already linked".
//!
//! Partial failure is best-effort: an actor whose insert is rejected by a
//! foreign-key check is reported as failed while the others are linked.
//! Transport failures abort the call.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use serde::Serialize;

use crate::store::{CastStore, StoreError, StoreErrorKind};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Final state of one requested actor after a link call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// A new cast relation was created by this call.
    Linked,
    /// The relation already existed (before the call or via a concurrent writer).
    AlreadyLinked,
    /// The store rejected the insert; see [`ActorLinkOutcome::error`].
    Failed,
}

/// Why an insert was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFailure {
    pub kind: StoreErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

/// Per-actor result of a link call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorLinkOutcome {
    pub actor_id: DbId,
    pub status: LinkStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<LinkFailure>,
}

impl ActorLinkOutcome {
    fn linked(actor_id: DbId) -> Self {
        Self {
            actor_id,
            status: LinkStatus::Linked,
            error: None,
        }
    }

    fn already_linked(actor_id: DbId) -> Self {
        Self {
            actor_id,
            status: LinkStatus::AlreadyLinked,
            error: None,
        }
    }

    fn failed(actor_id: DbId, err: StoreError) -> Self {
        Self {
            actor_id,
            status: LinkStatus::Failed,
            error: Some(LinkFailure {
                kind: err.kind,
                message: err.message,
                constraint: err.constraint,
            }),
        }
    }
}

/// Outcome of [`RelationshipLinker::link`]: one entry per distinct requested
/// actor, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub movie_id: DbId,
    pub outcomes: Vec<ActorLinkOutcome>,
}

impl LinkReport {
    /// Actor ids with the given status, in report order.
    pub fn actors_with(&self, status: LinkStatus) -> Vec<DbId> {
        self.outcomes
            .iter()
            .filter(|o| o.status == status)
            .map(|o| o.actor_id)
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| o.status == LinkStatus::Failed)
    }

    /// Whether any insert was rejected by the named constraint.
    pub fn failed_on(&self, constraint: &str) -> bool {
        self.outcomes
            .iter()
            .filter_map(|o| o.error.as_ref())
            .any(|e| e.constraint.as_deref() == Some(constraint))
    }
}

// ---------------------------------------------------------------------------
// Linker
// ---------------------------------------------------------------------------

/// Attaches actors to a movie's cast through a [`CastStore`].
pub struct RelationshipLinker<'a, S> {
    store: &'a S,
}

impl<'a, S: CastStore> RelationshipLinker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Ensure each actor in `actor_ids` appears in the cast of `movie_id`
    /// exactly once.
    ///
    /// The existence checks run one at a time; the inserts for the actors
    /// found missing are dispatched together and awaited as a group. If any
    /// insert fails with [`StoreErrorKind::Transport`], the first such error
    /// is returned after all inserts have settled.
    pub async fn link(&self, movie_id: DbId, actor_ids: &[DbId]) -> Result<LinkReport, StoreError> {
        let candidates = dedup_preserving_order(actor_ids);
        if candidates.is_empty() {
            return Ok(LinkReport {
                movie_id,
                outcomes: Vec::new(),
            });
        }

        let mut outcomes = Vec::with_capacity(candidates.len());
        let mut staged = Vec::new();

        for &actor_id in &candidates {
            if self.store.cast_relation_exists(movie_id, actor_id).await? {
                outcomes.push(ActorLinkOutcome::already_linked(actor_id));
            } else {
                staged.push(actor_id);
            }
        }

        let inserts = staged.iter().map(|&actor_id| async move {
            let result = self.store.insert_cast_relation(movie_id, actor_id).await;
            (actor_id, result)
        });

        let mut transport_error = None;
        for (actor_id, result) in join_all(inserts).await {
            match result {
                Ok(()) => outcomes.push(ActorLinkOutcome::linked(actor_id)),
                Err(err) => match err.kind {
                    StoreErrorKind::DuplicateKey => {
                        tracing::debug!(movie_id, actor_id, "Cast relation created concurrently");
                        outcomes.push(ActorLinkOutcome::already_linked(actor_id));
                    }
                    StoreErrorKind::Transport => {
                        transport_error.get_or_insert(err);
                    }
                    StoreErrorKind::ReferentialViolation | StoreErrorKind::NotFound => {
                        tracing::warn!(
                            movie_id,
                            actor_id,
                            kind = %err.kind,
                            error = %err.message,
                            "Cast relation insert rejected"
                        );
                        outcomes.push(ActorLinkOutcome::failed(actor_id, err));
                    }
                },
            }
        }

        if let Some(err) = transport_error {
            return Err(err);
        }

        let position: HashMap<DbId, usize> = candidates
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();
        outcomes.sort_by_key(|o| position[&o.actor_id]);

        Ok(LinkReport { movie_id, outcomes })
    }
}

/// Drop repeated ids, keeping the first occurrence of each.
fn dedup_preserving_order(ids: &[DbId]) -> Vec<DbId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
