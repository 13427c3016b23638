//! Storage facade
//!
//! The application never talks to a database directly; it consumes this
//! facade for bulk typed reads plus a per-request session teardown.

mod memory;

pub use memory::InMemoryStorage;

use async_trait::async_trait;

use crate::domain::{Amenity, DomainResult, Place, State};

/// Storage trait for persistence operations
///
/// `list_*` returns all persisted rows in retrieval (insertion) order, which
/// is the tie-break order for the stable name sorts done by the handlers.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_states(&self) -> DomainResult<Vec<State>>;
    async fn list_amenities(&self) -> DomainResult<Vec<Amenity>>;
    async fn list_places(&self) -> DomainResult<Vec<Place>>;

    /// Ends the current storage session. Runs once per request, on every
    /// exit path. Idempotent.
    async fn close(&self);
}
