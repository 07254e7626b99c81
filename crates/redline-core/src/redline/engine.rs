//! Redline computation.
//!
//! Each entity kind has a fixed field table: `(field name, extractor)` pairs
//! listed in report order. A single routine walks the table, so the
//! added/removed/modified branching exists exactly once.

use crate::errors::{RedlineError, Result};
use crate::model::{EntityKind, RequirementSnapshot, TestCaseSnapshot, VersionedSnapshot};
use crate::redline::model::{field, ChangeType, FieldChange, RedlineResult};
use crate::redline::options::{CrossEntityPolicy, RedlineOptions};

/// Reads one field of a snapshot in its comparable string form
type Extractor<S> = fn(&S) -> Option<String>;

type FieldTable<S> = [(&'static str, Extractor<S>)];

fn requirement_title(s: &RequirementSnapshot) -> Option<String> {
    Some(s.content.title.clone())
}

fn requirement_description(s: &RequirementSnapshot) -> Option<String> {
    s.content.description.clone()
}

fn requirement_type(s: &RequirementSnapshot) -> Option<String> {
    Some(s.content.requirement_type.as_str().to_string())
}

fn requirement_status(s: &RequirementSnapshot) -> Option<String> {
    Some(s.content.status.as_str().to_string())
}

fn requirement_parent_id(s: &RequirementSnapshot) -> Option<String> {
    s.content.parent_id.map(|id| id.to_string())
}

fn test_case_title(s: &TestCaseSnapshot) -> Option<String> {
    Some(s.content.title.clone())
}

fn test_case_description(s: &TestCaseSnapshot) -> Option<String> {
    s.content.description.clone()
}

fn test_case_steps(s: &TestCaseSnapshot) -> Option<String> {
    Some(s.content.steps.clone())
}

fn test_case_expected_result(s: &TestCaseSnapshot) -> Option<String> {
    Some(s.content.expected_result.clone())
}

const REQUIREMENT_FIELDS: &FieldTable<RequirementSnapshot> = &[
    (field::TITLE, requirement_title),
    (field::DESCRIPTION, requirement_description),
    (field::TYPE, requirement_type),
    (field::STATUS, requirement_status),
    (field::PARENT_ID, requirement_parent_id),
];

const TEST_CASE_FIELDS: &FieldTable<TestCaseSnapshot> = &[
    (field::TITLE, test_case_title),
    (field::DESCRIPTION, test_case_description),
    (field::STEPS, test_case_steps),
    (field::EXPECTED_RESULT, test_case_expected_result),
];

/// Field names examined for an entity kind, in report order
pub fn field_order(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Requirement => REQUIREMENT_FIELDS.iter().map(|(name, _)| *name).collect(),
        EntityKind::TestCase => TEST_CASE_FIELDS.iter().map(|(name, _)| *name).collect(),
    }
}

/// Classify the difference between two field values.
///
/// Returns `None` when the values are equal, including when both are absent.
pub fn classify(old: Option<&str>, new: Option<&str>) -> Option<ChangeType> {
    match (old, new) {
        (a, b) if a == b => None,
        (None, Some(_)) => Some(ChangeType::Added),
        (Some(_), None) => Some(ChangeType::Removed),
        _ => Some(ChangeType::Modified),
    }
}

fn compare_with<S: VersionedSnapshot>(old: &S, new: &S, fields: &FieldTable<S>) -> RedlineResult {
    let changes: Vec<FieldChange> = fields
        .iter()
        .filter_map(|(name, extract)| {
            let old_value = extract(old);
            let new_value = extract(new);
            classify(old_value.as_deref(), new_value.as_deref()).map(|change_type| FieldChange {
                field: (*name).to_string(),
                old_value,
                new_value,
                change_type,
            })
        })
        .collect();

    tracing::debug!(
        entity_kind = S::KIND.as_str(),
        old_version = old.version(),
        new_version = new.version(),
        fields_examined = fields.len(),
        change_count = changes.len(),
        "redline computed"
    );

    RedlineResult {
        old_version: old.version(),
        new_version: new.version(),
        changes,
    }
}

fn check_entities<S: VersionedSnapshot>(old: &S, new: &S, options: &RedlineOptions) -> Result<()> {
    match options.cross_entity {
        CrossEntityPolicy::Permissive => Ok(()),
        CrossEntityPolicy::Reject if old.entity_id() == new.entity_id() => Ok(()),
        CrossEntityPolicy::Reject => Err(RedlineError::InvalidComparison {
            old_entity_id: old.entity_id().to_string(),
            new_entity_id: new.entity_id().to_string(),
        }),
    }
}

/// Compute the redline between two requirement snapshots.
///
/// Fields are reported in the order Title, Description, Type, Status,
/// ParentId. Snapshot identity is not checked; see
/// [`compare_requirements_checked`].
pub fn compare_requirements(old: &RequirementSnapshot, new: &RequirementSnapshot) -> RedlineResult {
    compare_with(old, new, REQUIREMENT_FIELDS)
}

/// Compute the redline between two test case snapshots.
///
/// Fields are reported in the order Title, Description, Steps,
/// ExpectedResult. Steps are compared as one opaque string.
pub fn compare_test_cases(old: &TestCaseSnapshot, new: &TestCaseSnapshot) -> RedlineResult {
    compare_with(old, new, TEST_CASE_FIELDS)
}

/// [`compare_requirements`] with an entity identity check.
///
/// # Errors
///
/// `InvalidComparison` if the policy is `Reject` and the snapshots belong to
/// different requirements.
pub fn compare_requirements_checked(
    old: &RequirementSnapshot,
    new: &RequirementSnapshot,
    options: &RedlineOptions,
) -> Result<RedlineResult> {
    check_entities(old, new, options)?;
    Ok(compare_requirements(old, new))
}

/// [`compare_test_cases`] with an entity identity check.
///
/// # Errors
///
/// `InvalidComparison` if the policy is `Reject` and the snapshots belong to
/// different test cases.
pub fn compare_test_cases_checked(
    old: &TestCaseSnapshot,
    new: &TestCaseSnapshot,
    options: &RedlineOptions,
) -> Result<RedlineResult> {
    check_entities(old, new, options)?;
    Ok(compare_test_cases(old, new))
}
