use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::snapshot::{EntityKind, VersionedSnapshot};

/// The comparable fields of a test case at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseContent {
    pub title: String,

    pub description: Option<String>,

    /// Flattened step content; compared as one opaque value
    pub steps: String,

    pub expected_result: String,
}

impl TestCaseContent {
    pub fn new(
        title: impl Into<String>,
        steps: impl Into<String>,
        expected_result: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            steps: steps.into(),
            expected_result: expected_result.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Immutable recorded state of a test case at a specific version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseSnapshot {
    pub id: String,

    pub entity_id: String,

    pub version: u32,

    #[serde(flatten)]
    pub content: TestCaseContent,

    pub modified_by: String,

    pub modified_at: DateTime<Utc>,
}

impl TestCaseSnapshot {
    pub fn new(
        id: impl Into<String>,
        entity_id: impl Into<String>,
        version: u32,
        content: TestCaseContent,
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

impl VersionedSnapshot for TestCaseSnapshot {
    const KIND: EntityKind = EntityKind::TestCase;

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
