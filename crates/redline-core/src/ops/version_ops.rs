//! Recording new versions of requirements and test cases.
//!
//! Every update produces a fresh snapshot numbered one past the entity's
//! latest version. Numbers are assigned while holding `&mut` on the
//! repository, so they stay strictly increasing.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::{RedlineError, Result};
use crate::model::{RequirementContent, RequirementSnapshot, TestCaseContent, TestCaseSnapshot};
use crate::ops::store::VersionRepository;

fn validate(entity_id: &str, title: &str) -> Result<()> {
    if entity_id.trim().is_empty() {
        return Err(RedlineError::InvalidInput {
            reason: "entity id cannot be empty".to_string(),
        });
    }
    if title.trim().is_empty() {
        return Err(RedlineError::InvalidInput {
            reason: "title cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Record a new requirement version stamped with the current time
///
/// # Errors
///
/// See [`commit_requirement_version_at`].
pub fn commit_requirement_version(
    repo: &mut VersionRepository,
    entity_id: &str,
    content: RequirementContent,
    modified_by: &str,
) -> Result<RequirementSnapshot> {
    commit_requirement_version_at(repo, entity_id, content, modified_by, Utc::now())
}

/// Record a new requirement version with an explicit timestamp
///
/// # Errors
///
/// `InvalidInput` for an empty entity id or title.
pub fn commit_requirement_version_at(
    repo: &mut VersionRepository,
    entity_id: &str,
    content: RequirementContent,
    modified_by: &str,
    modified_at: DateTime<Utc>,
) -> Result<RequirementSnapshot> {
    validate(entity_id, &content.title)?;
    let store = repo.requirements_mut();
    let snapshot = RequirementSnapshot::new(
        Uuid::now_v7().to_string(),
        entity_id,
        store.next_version(entity_id),
        content,
        modified_by,
        modified_at,
    );
    store.append(snapshot).cloned()
}

/// Record a new test case version stamped with the current time
///
/// # Errors
///
/// See [`commit_test_case_version_at`].
pub fn commit_test_case_version(
    repo: &mut VersionRepository,
    entity_id: &str,
    content: TestCaseContent,
    modified_by: &str,
) -> Result<TestCaseSnapshot> {
    commit_test_case_version_at(repo, entity_id, content, modified_by, Utc::now())
}

/// Record a new test case version with an explicit timestamp
///
/// # Errors
///
/// `InvalidInput` for an empty entity id or title.
pub fn commit_test_case_version_at(
    repo: &mut VersionRepository,
    entity_id: &str,
    content: TestCaseContent,
    modified_by: &str,
    modified_at: DateTime<Utc>,
) -> Result<TestCaseSnapshot> {
    validate(entity_id, &content.title)?;
    let store = repo.test_cases_mut();
    let snapshot = TestCaseSnapshot::new(
        Uuid::now_v7().to_string(),
        entity_id,
        store.next_version(entity_id),
        content,
        modified_by,
        modified_at,
    );
    store.append(snapshot).cloned()
}
