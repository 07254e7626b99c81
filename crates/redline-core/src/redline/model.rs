//! Redline output types.
//!
//! Serialized with camelCase keys; PascalCase keys are accepted on input.

use serde::{Deserialize, Serialize};

/// Logical field names reported in [`FieldChange::field`]
pub mod field {
    pub const TITLE: &str = "Title";
    pub const DESCRIPTION: &str = "Description";
    pub const TYPE: &str = "Type";
    pub const STATUS: &str = "Status";
    pub const PARENT_ID: &str = "ParentId";
    pub const STEPS: &str = "Steps";
    pub const EXPECTED_RESULT: &str = "ExpectedResult";
}

/// Classification of a single field difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeType {
    /// Absent in the old version, present in the new one
    Added,
    /// Present in the old version, absent in the new one
    Removed,
    /// Present in both with different values
    Modified,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Removed => "Removed",
            ChangeType::Modified => "Modified",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field whose value differs between two versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    #[serde(alias = "Field")]
    pub field: String,
    #[serde(alias = "OldValue")]
    pub old_value: Option<String>,
    #[serde(alias = "NewValue")]
    pub new_value: Option<String>,
    #[serde(alias = "ChangeType")]
    pub change_type: ChangeType,
}

/// The field-level diff between an old and a new snapshot
///
/// `changes` is ordered by the entity kind's field table. Version numbers are
/// copied from the inputs as given, even when `old_version > new_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedlineResult {
    #[serde(alias = "OldVersion")]
    pub old_version: u32,
    #[serde(alias = "NewVersion")]
    pub new_version: u32,
    #[serde(alias = "Changes")]
    pub changes: Vec<FieldChange>,
}

impl RedlineResult {
    /// True when no field differs
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Look up the change reported for a field, if any
    pub fn change_for(&self, field: &str) -> Option<&FieldChange> {
        self.changes.iter().find(|c| c.field == field)
    }

    pub fn count_by_type(&self, change_type: ChangeType) -> usize {
        self.changes
            .iter()
            .filter(|c| c.change_type == change_type)
            .count()
    }
}
