use std::collections::HashMap;

use crate::errors::{RedlineError, Result};
use crate::model::{RequirementSnapshot, TestCaseSnapshot, VersionedSnapshot};

/// Append-only in-memory store of snapshots for one entity kind
///
/// Snapshots are owned by the store once appended and only handed out by
/// shared reference, so a stored snapshot never changes. Per entity, version
/// numbers are contiguous from 1. Not thread-safe: writers need `&mut`.
#[derive(Debug, Clone)]
pub struct SnapshotStore<S> {
    /// Snapshot ID -> snapshot
    snapshots: HashMap<String, S>,
    /// Entity ID -> snapshot IDs in version order
    by_entity: HashMap<String, Vec<String>>,
}

impl<S> Default for SnapshotStore<S> {
    fn default() -> Self {
        Self {
            snapshots: HashMap::new(),
            by_entity: HashMap::new(),
        }
    }
}

impl<S: VersionedSnapshot> SnapshotStore<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next version of an entity
    ///
    /// # Errors
    ///
    /// - `InvalidVersion` if `version` is 0
    /// - `SnapshotAlreadyExists` if the snapshot ID is already stored
    /// - `VersionConflict` if `version` is not the successor of the latest
    ///   stored version (1 for a new entity)
    pub fn append(&mut self, snapshot: S) -> Result<&S> {
        let entity_id = snapshot.entity_id().to_string();
        let snapshot_id = snapshot.snapshot_id().to_string();
        let version = snapshot.version();

        if version == 0 {
            return Err(RedlineError::InvalidVersion { entity_id, version });
        }
        if self.snapshots.contains_key(&snapshot_id) {
            return Err(RedlineError::SnapshotAlreadyExists { snapshot_id });
        }
        let expected = self.next_version(&entity_id);
        if version != expected {
            return Err(RedlineError::VersionConflict {
                entity_id,
                expected,
                actual: version,
            });
        }

        self.by_entity
            .entry(entity_id)
            .or_default()
            .push(snapshot_id.clone());
        Ok(self.snapshots.entry(snapshot_id).or_insert(snapshot))
    }

    /// Get a snapshot by its identifier
    ///
    /// # Errors
    ///
    /// Returns `SnapshotNotFound` if no snapshot has this ID.
    pub fn get(&self, snapshot_id: &str) -> Result<&S> {
        self.snapshots
            .get(snapshot_id)
            .ok_or_else(|| RedlineError::SnapshotNotFound {
                snapshot_id: snapshot_id.to_string(),
            })
    }

    /// Get a specific version of an entity
    ///
    /// # Errors
    ///
    /// `EntityNotFound` if the entity has no versions, `VersionNotFound` if
    /// it has no snapshot with this number.
    pub fn get_version(&self, entity_id: &str, version: u32) -> Result<&S> {
        let ids = self.entity_ids_for(entity_id)?;
        ids.iter()
            .filter_map(|id| self.snapshots.get(id))
            .find(|s| s.version() == version)
            .ok_or_else(|| RedlineError::VersionNotFound {
                entity_id: entity_id.to_string(),
                version,
            })
    }

    /// All versions of an entity, ascending by version number
    ///
    /// Unknown entities yield an empty list.
    pub fn list_versions(&self, entity_id: &str) -> Vec<&S> {
        self.by_entity
            .get(entity_id)
            .map(|ids| ids.iter().filter_map(|id| self.snapshots.get(id)).collect())
            .unwrap_or_default()
    }

    /// The most recent version of an entity
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if the entity has no versions.
    pub fn latest(&self, entity_id: &str) -> Result<&S> {
        let ids = self.entity_ids_for(entity_id)?;
        ids.last()
            .and_then(|id| self.snapshots.get(id))
            .ok_or_else(|| RedlineError::EntityNotFound {
                entity_id: entity_id.to_string(),
            })
    }

    /// Latest stored version number, if the entity has any versions
    pub fn latest_version(&self, entity_id: &str) -> Option<u32> {
        self.latest(entity_id).ok().map(|s| s.version())
    }

    /// Version number the next appended snapshot of this entity must carry
    pub fn next_version(&self, entity_id: &str) -> u32 {
        self.latest_version(entity_id).map_or(1, |v| v + 1)
    }

    /// Entity IDs with at least one version, sorted
    pub fn entity_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_entity.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Total number of stored snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn entity_ids_for(&self, entity_id: &str) -> Result<&Vec<String>> {
        self.by_entity
            .get(entity_id)
            .ok_or_else(|| RedlineError::EntityNotFound {
                entity_id: entity_id.to_string(),
            })
    }
}

/// Version history of every versioned entity kind
#[derive(Debug, Clone, Default)]
pub struct VersionRepository {
    requirements: SnapshotStore<RequirementSnapshot>,
    test_cases: SnapshotStore<TestCaseSnapshot>,
}

impl VersionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requirements(&self) -> &SnapshotStore<RequirementSnapshot> {
        &self.requirements
    }

    pub fn requirements_mut(&mut self) -> &mut SnapshotStore<RequirementSnapshot> {
        &mut self.requirements
    }

    pub fn test_cases(&self) -> &SnapshotStore<TestCaseSnapshot> {
        &self.test_cases
    }

    pub fn test_cases_mut(&mut self) -> &mut SnapshotStore<TestCaseSnapshot> {
        &mut self.test_cases
    }
}
