use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::snapshot::{EntityKind, VersionedSnapshot};
use crate::errors::RedlineError;

/// Requirement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementType {
    /// Customer requirement
    #[serde(rename = "CRS")]
    Crs,
    /// Product requirement
    #[serde(rename = "PRS")]
    Prs,
    /// Software requirement
    #[serde(rename = "SRS")]
    Srs,
}

impl RequirementType {
    /// Canonical string form, used both on the wire and for redline comparison
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementType::Crs => "CRS",
            RequirementType::Prs => "PRS",
            RequirementType::Srs => "SRS",
        }
    }
}

impl std::fmt::Display for RequirementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementType {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRS" => Ok(RequirementType::Crs),
            "PRS" => Ok(RequirementType::Prs),
            "SRS" => Ok(RequirementType::Srs),
            other => Err(RedlineError::InvalidInput {
                reason: format!("unknown requirement type '{}'", other),
            }),
        }
    }
}

/// Requirement lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementStatus {
    Draft,
    Approved,
    Rejected,
    Obsolete,
}

impl RequirementStatus {
    /// Canonical string form, used both on the wire and for redline comparison
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Draft => "Draft",
            RequirementStatus::Approved => "Approved",
            RequirementStatus::Rejected => "Rejected",
            RequirementStatus::Obsolete => "Obsolete",
        }
    }
}

impl std::fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementStatus {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(RequirementStatus::Draft),
            "Approved" => Ok(RequirementStatus::Approved),
            "Rejected" => Ok(RequirementStatus::Rejected),
            "Obsolete" => Ok(RequirementStatus::Obsolete),
            other => Err(RedlineError::InvalidInput {
                reason: format!("unknown requirement status '{}'", other),
            }),
        }
    }
}

/// The comparable fields of a requirement at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementContent {
    pub title: String,

    pub description: Option<String>,

    #[serde(rename = "type")]
    pub requirement_type: RequirementType,

    pub status: RequirementStatus,

    /// Parent requirement, if this requirement refines another one
    pub parent_id: Option<i64>,
}

impl RequirementContent {
    /// Create content with no description and no parent
    pub fn new(
        title: impl Into<String>,
        requirement_type: RequirementType,
        status: RequirementStatus,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            requirement_type,
            status,
            parent_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Immutable recorded state of a requirement at a specific version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSnapshot {
    /// Snapshot identifier (UUID v7 when generated by version ops)
    pub id: String,

    /// The requirement this snapshot belongs to
    pub entity_id: String,

    /// Version number, starting at 1
    pub version: u32,

    #[serde(flatten)]
    pub content: RequirementContent,

    pub modified_by: String,

    pub modified_at: DateTime<Utc>,
}

impl RequirementSnapshot {
    pub fn new(
        id: impl Into<String>,
        entity_id: impl Into<String>,
        version: u32,
        content: RequirementContent,
        modified_by: impl Into<String>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            entity_id: entity_id.into(),
            version,
            content,
            modified_by: modified_by.into(),
            modified_at,
        }
    }
}

impl VersionedSnapshot for RequirementSnapshot {
    const KIND: EntityKind = EntityKind::Requirement;

    fn snapshot_id(&self) -> &str {
        &self.id
    }

    fn entity_id(&self) -> &str {
        &self.entity_id
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn modified_by(&self) -> &str {
        &self.modified_by
    }

    fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}
