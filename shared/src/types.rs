//! Common types for the shared crate

/// Backend-assigned entity identifier.
pub type EntityId = i64;

/// Identifier of an entity that has not been persisted yet. The backend
/// assigns the real id in response to a create call.
pub const UNSAVED: EntityId = 0;
