use redline_core::ops::VersionRepository;
use redline_core::{
    RequirementContent, RequirementStatus, RequirementType, TestCaseContent,
};
use redline_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use redline_core_types::RequestContext;

#[allow(dead_code)]
pub fn login_content() -> RequirementContent {
    RequirementContent::new("Login", RequirementType::Crs, RequirementStatus::Draft)
}

#[allow(dead_code)]
pub fn login_test_content() -> TestCaseContent {
    TestCaseContent::new("Login works", "Step1;Step2", "User is signed in")
}

/// Commit a requirement version and return its snapshot ID
#[allow(dead_code)]
pub fn commit_requirement(
    repo: &mut VersionRepository,
    entity_id: &str,
    content: RequirementContent,
) -> String {
    let cmd = EngineCommand::RequirementCommit {
        entity_id: entity_id.to_string(),
        content,
        modified_by: "alice".to_string(),
    };
    match apply_engine_command(cmd, repo, &RequestContext::new()).unwrap() {
        EngineCommandResult::RequirementCommit(s) => s.id,
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Commit a test case version and return its snapshot ID
#[allow(dead_code)]
pub fn commit_test_case(
    repo: &mut VersionRepository,
    entity_id: &str,
    content: TestCaseContent,
) -> String {
    let cmd = EngineCommand::TestCaseCommit {
        entity_id: entity_id.to_string(),
        content,
        modified_by: "bob".to_string(),
    };
    match apply_engine_command(cmd, repo, &RequestContext::new()).unwrap() {
        EngineCommandResult::TestCaseCommit(s) => s.id,
        other => panic!("unexpected result: {:?}", other),
    }
}
