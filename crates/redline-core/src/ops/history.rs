//! JSON history import.
//!
//! A history document lists snapshots of both entity kinds:
//!
//! ```json
//! {
//!   "requirements": [
//!     {"id": "s1", "entityId": "req-1", "version": 1, "title": "Login",
//!      "description": null, "type": "CRS", "status": "Draft", "parentId": null,
//!      "modifiedBy": "alice", "modifiedAt": "2026-01-01T00:00:00Z"}
//!   ],
//!   "testCases": []
//! }
//! ```
//!
//! Entries may appear in any order; each entity's versions must still be
//! contiguous from 1.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{RequirementSnapshot, TestCaseSnapshot};
use crate::ops::store::VersionRepository;

/// Serialized version history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryFile {
    pub requirements: Vec<RequirementSnapshot>,
    pub test_cases: Vec<TestCaseSnapshot>,
}

impl HistoryFile {
    /// Load every snapshot into a fresh repository
    ///
    /// # Errors
    ///
    /// Propagates store errors: `VersionConflict` for gaps or duplicate
    /// version numbers, `SnapshotAlreadyExists`, `InvalidVersion`.
    pub fn into_repository(self) -> Result<VersionRepository> {
        let mut repo = VersionRepository::new();

        let mut requirements = self.requirements;
        requirements.sort_by(|a, b| (&a.entity_id, a.version).cmp(&(&b.entity_id, b.version)));
        for snapshot in requirements {
            repo.requirements_mut().append(snapshot)?;
        }

        let mut test_cases = self.test_cases;
        test_cases.sort_by(|a, b| (&a.entity_id, a.version).cmp(&(&b.entity_id, b.version)));
        for snapshot in test_cases {
            repo.test_cases_mut().append(snapshot)?;
        }

        tracing::debug!(
            requirement_snapshots = repo.requirements().len(),
            test_case_snapshots = repo.test_cases().len(),
            "history loaded"
        );
        Ok(repo)
    }
}

/// Parse a history document without loading it
///
/// # Errors
///
/// `Serialization` if the bytes are not a valid history document.
pub fn parse_history(bytes: &[u8]) -> Result<HistoryFile> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse a history document and load it into a repository
///
/// # Errors
///
/// `Serialization` for malformed JSON, otherwise as
/// [`HistoryFile::into_repository`].
pub fn load_history(bytes: &[u8]) -> Result<VersionRepository> {
    parse_history(bytes)?.into_repository()
}
