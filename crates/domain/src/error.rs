//! Common error types used across the workspace.
//!
//! Each failure mode gets its own typed error; the base [`EngineError`]
//! aggregates them via `#[from]` so callers can branch on kind. Eligibility
//! "no" answers are never errors — they are [`Check`](crate::check::Check)
//! values.

use crate::id::{CustomerId, SpotId};
use crate::service_type::ServiceCategory;

/// Base error for the scheduling engine and its ports.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The customer's subscription set cannot be classified.
    #[error(transparent)]
    AmbiguousDueState(#[from] AmbiguousDueStateError),

    /// The snapshot handed to the engine is structurally invalid.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// A repository adapter failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The subscription set cannot be resolved to a single due decision.
///
/// Fatal to the calling use case and never retried: retrying will not change
/// the customer's subscription configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmbiguousDueStateError {
    /// The customer holds no active subscription at all.
    #[error("customer {customer_id} has no active subscriptions")]
    NoActiveSubscriptions { customer_id: CustomerId },

    /// More than one active subscription in the same category; the engine
    /// never guesses among competing candidates.
    #[error("customer {customer_id} has more than one active {category} subscription")]
    DuplicateCategory {
        customer_id: CustomerId,
        category: ServiceCategory,
    },
}

/// A snapshot was assembled incorrectly by the calling layer.
///
/// These indicate programming errors in the assembler, not runtime
/// conditions; the engine never fetches missing relations itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// A spot reference that does not resolve to a route.
    #[error("spot {spot_id} does not resolve to a route")]
    UnresolvedSpotRoute { spot_id: SpotId },

    /// An office UTC offset outside the representable range.
    #[error("invalid office UTC offset of {minutes} minutes")]
    InvalidUtcOffset { minutes: i32 },
}

/// Opaque failure surfaced by a repository adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage failure: {message}")]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    /// Wrap an adapter-specific failure message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
