//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for version listing,
//! snapshot lookup and redline computation. It takes a shared repository
//! and never records new versions.

#![allow(clippy::result_large_err)]

use redline_core::errors::ExError;
use redline_core::model::{EntityKind, RequirementSnapshot, TestCaseSnapshot};
use redline_core::ops::VersionRepository;
use redline_core::redline::{
    compare_requirements_checked, compare_test_cases_checked, render_human_summary,
    RedlineOptions, RedlineResult,
};
use redline_core_types::RequestContext;
use serde::Serialize;

use crate::commands::instrument::instrumented;

/// Read-only queries against the version repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    /// All versions of one requirement, oldest first.
    RequirementVersionList { entity_id: String },
    /// A single requirement snapshot by snapshot ID.
    RequirementVersionGet { snapshot_id: String },
    /// Redline between two requirement snapshots.
    RequirementRedline {
        old_snapshot_id: String,
        new_snapshot_id: String,
    },
    /// All versions of one test case, oldest first.
    TestCaseVersionList { entity_id: String },
    /// A single test case snapshot by snapshot ID.
    TestCaseVersionGet { snapshot_id: String },
    /// Redline between two test case snapshots.
    TestCaseRedline {
        old_snapshot_id: String,
        new_snapshot_id: String,
    },
}

impl EngineQuery {
    /// Operation name used in log events and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            EngineQuery::RequirementVersionList { .. } => "requirement_version_list",
            EngineQuery::RequirementVersionGet { .. } => "requirement_version_get",
            EngineQuery::RequirementRedline { .. } => "requirement_redline",
            EngineQuery::TestCaseVersionList { .. } => "test_case_version_list",
            EngineQuery::TestCaseVersionGet { .. } => "test_case_version_get",
            EngineQuery::TestCaseRedline { .. } => "test_case_redline",
        }
    }
}

/// The structured + rendered result of a redline query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedlineQueryResult {
    pub entity_kind: EntityKind,
    /// Machine-readable field changes
    pub structured: RedlineResult,
    /// Human-readable Markdown summary
    pub human_summary: String,
}

/// Result of applying an engine query.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineQueryResult {
    RequirementVersionList(Vec<RequirementSnapshot>),
    RequirementVersionGet(RequirementSnapshot),
    TestCaseVersionList(Vec<TestCaseSnapshot>),
    TestCaseVersionGet(TestCaseSnapshot),
    Redline(RedlineQueryResult),
}

/// Apply a read-only query.
///
/// Version lists for an entity with no recorded versions are empty rather
/// than an error.
///
/// # Errors
///
/// - `ERR_NOT_FOUND` if a referenced snapshot ID does not exist
/// - `ERR_INVALID_COMPARISON` if `options` reject cross-entity redlines and
///   the two snapshots belong to different entities
pub fn apply_engine_query(
    query: EngineQuery,
    repo: &VersionRepository,
    options: &RedlineOptions,
    ctx: &RequestContext,
) -> Result<EngineQueryResult, ExError> {
    let op = query.op_name();
    match query {
        EngineQuery::RequirementVersionList { entity_id } => instrumented(op, ctx, || {
            let versions = repo
                .requirements()
                .list_versions(&entity_id)
                .into_iter()
                .cloned()
                .collect();
            Ok(EngineQueryResult::RequirementVersionList(versions))
        }),

        EngineQuery::RequirementVersionGet { snapshot_id } => instrumented(op, ctx, || {
            let snapshot = repo.requirements().get(&snapshot_id)?;
            Ok(EngineQueryResult::RequirementVersionGet(snapshot.clone()))
        }),

        EngineQuery::RequirementRedline {
            old_snapshot_id,
            new_snapshot_id,
        } => instrumented(op, ctx, || {
            let store = repo.requirements();
            let old = store.get(&old_snapshot_id)?;
            let new = store.get(&new_snapshot_id)?;
            let structured = compare_requirements_checked(old, new, options)?;
            Ok(redline_result(EntityKind::Requirement, structured))
        }),

        EngineQuery::TestCaseVersionList { entity_id } => instrumented(op, ctx, || {
            let versions = repo
                .test_cases()
                .list_versions(&entity_id)
                .into_iter()
                .cloned()
                .collect();
            Ok(EngineQueryResult::TestCaseVersionList(versions))
        }),

        EngineQuery::TestCaseVersionGet { snapshot_id } => instrumented(op, ctx, || {
            let snapshot = repo.test_cases().get(&snapshot_id)?;
            Ok(EngineQueryResult::TestCaseVersionGet(snapshot.clone()))
        }),

        EngineQuery::TestCaseRedline {
            old_snapshot_id,
            new_snapshot_id,
        } => instrumented(op, ctx, || {
            let store = repo.test_cases();
            let old = store.get(&old_snapshot_id)?;
            let new = store.get(&new_snapshot_id)?;
            let structured = compare_test_cases_checked(old, new, options)?;
            Ok(redline_result(EntityKind::TestCase, structured))
        }),
    }
}

fn redline_result(kind: EntityKind, structured: RedlineResult) -> EngineQueryResult {
    let human_summary = render_human_summary(kind, &structured);
    EngineQueryResult::Redline(RedlineQueryResult {
        entity_kind: kind,
        structured,
        human_summary,
    })
}
