use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of versioned entity a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Requirement,
    TestCase,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Requirement => "Requirement",
            EntityKind::TestCase => "TestCase",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common identity of an immutable, numbered snapshot
///
/// Implemented by every snapshot type the version store can hold. Only
/// identity and provenance are exposed here; the comparable fields stay on
/// the concrete types so each redline entry point can list them explicitly.
pub trait VersionedSnapshot {
    /// Entity kind shared by all snapshots of this type
    const KIND: EntityKind;

    /// Identifier of this snapshot (the version identifier used for lookups)
    fn snapshot_id(&self) -> &str;

    /// Identifier of the logical entity, stable across versions
    fn entity_id(&self) -> &str;

    /// Version number, starting at 1 and strictly increasing per entity
    fn version(&self) -> u32;

    /// Actor who produced this snapshot
    fn modified_by(&self) -> &str;

    /// When this snapshot was created
    fn modified_at(&self) -> DateTime<Utc>;
}
