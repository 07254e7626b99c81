//! Engine-level write commands.
//!
//! Each command records exactly one new snapshot. Version numbers and
//! snapshot IDs are assigned here, never supplied by the caller.

#![allow(clippy::result_large_err)]

use redline_core::errors::ExError;
use redline_core::model::{
    RequirementContent, RequirementSnapshot, TestCaseContent, TestCaseSnapshot,
};
use redline_core::ops::{commit_requirement_version, commit_test_case_version, VersionRepository};
use redline_core_types::RequestContext;

use crate::commands::instrument::instrumented;

/// Commands that append to the version repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Record the next version of a requirement.
    RequirementCommit {
        entity_id: String,
        content: RequirementContent,
        modified_by: String,
    },
    /// Record the next version of a test case.
    TestCaseCommit {
        entity_id: String,
        content: TestCaseContent,
        modified_by: String,
    },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    RequirementCommit(RequirementSnapshot),
    TestCaseCommit(TestCaseSnapshot),
}

/// Apply a write command.
///
/// # Errors
///
/// `ERR_INVALID_INPUT` for an empty entity ID or title.
pub fn apply_engine_command(
    cmd: EngineCommand,
    repo: &mut VersionRepository,
    ctx: &RequestContext,
) -> Result<EngineCommandResult, ExError> {
    match cmd {
        EngineCommand::RequirementCommit {
            entity_id,
            content,
            modified_by,
        } => instrumented("requirement_commit", ctx, || {
            let snapshot = commit_requirement_version(repo, &entity_id, content, &modified_by)?;
            tracing::debug!(
                entity_id = %snapshot.entity_id,
                version = snapshot.version,
                "requirement version recorded"
            );
            Ok(EngineCommandResult::RequirementCommit(snapshot))
        }),

        EngineCommand::TestCaseCommit {
            entity_id,
            content,
            modified_by,
        } => instrumented("test_case_commit", ctx, || {
            let snapshot = commit_test_case_version(repo, &entity_id, content, &modified_by)?;
            tracing::debug!(
                entity_id = %snapshot.entity_id,
                version = snapshot.version,
                "test case version recorded"
            );
            Ok(EngineCommandResult::TestCaseCommit(snapshot))
        }),
    }
}
