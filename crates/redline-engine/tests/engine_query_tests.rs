//! Integration tests for `apply_engine_query`.
//!
//! Each test builds a repository through `apply_engine_command` and then
//! exercises one query.

mod common;

use common::{commit_requirement, commit_test_case, login_content, login_test_content};
use redline_core::errors::ExErrorKind;
use redline_core::ops::VersionRepository;
use redline_core::{ChangeType, EntityKind, RedlineOptions, RequirementStatus, TestCaseContent};
use redline_core_types::{RequestContext, RequestId, TraceId};
use redline_engine::commands::engine_query::{
    apply_engine_query, EngineQuery, EngineQueryResult, RedlineQueryResult,
};

fn query(repo: &VersionRepository, q: EngineQuery) -> EngineQueryResult {
    apply_engine_query(q, repo, &RedlineOptions::default(), &RequestContext::new()).unwrap()
}

fn redline(result: EngineQueryResult) -> RedlineQueryResult {
    match result {
        EngineQueryResult::Redline(r) => r,
        other => panic!("expected redline, got {:?}", other),
    }
}

#[test]
fn test_requirement_version_list_is_ascending() {
    let mut repo = VersionRepository::new();
    commit_requirement(&mut repo, "req-1", login_content());
    commit_requirement(&mut repo, "req-1", login_content().with_parent_id(4));
    commit_requirement(&mut repo, "req-2", login_content());

    let result = query(
        &repo,
        EngineQuery::RequirementVersionList {
            entity_id: "req-1".to_string(),
        },
    );
    match result {
        EngineQueryResult::RequirementVersionList(versions) => {
            let numbers: Vec<u32> = versions.iter().map(|s| s.version).collect();
            assert_eq!(numbers, vec![1, 2]);
            assert!(versions.iter().all(|s| s.entity_id == "req-1"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_version_list_for_unknown_entity_is_empty() {
    let repo = VersionRepository::new();
    let result = query(
        &repo,
        EngineQuery::TestCaseVersionList {
            entity_id: "missing".to_string(),
        },
    );
    assert_eq!(result, EngineQueryResult::TestCaseVersionList(Vec::new()));
}

#[test]
fn test_version_get_returns_snapshot() {
    let mut repo = VersionRepository::new();
    let id = commit_test_case(&mut repo, "tc-1", login_test_content());

    let result = query(&repo, EngineQuery::TestCaseVersionGet { snapshot_id: id.clone() });
    match result {
        EngineQueryResult::TestCaseVersionGet(snapshot) => {
            assert_eq!(snapshot.id, id);
            assert_eq!(snapshot.content.title, "Login works");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_version_get_unknown_snapshot_is_not_found() {
    let repo = VersionRepository::new();
    let ctx = RequestContext::with_request_id(RequestId::from_string("r-1".to_string()))
        .with_trace_id(TraceId::from_string("t-1".to_string()));

    let err = apply_engine_query(
        EngineQuery::RequirementVersionGet {
            snapshot_id: "nope".to_string(),
        },
        &repo,
        &RedlineOptions::default(),
        &ctx,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.op(), Some("requirement_version_get"));
    assert_eq!(err.snapshot_id(), Some("nope"));
    assert_eq!(err.request_id().map(|r| r.as_str()), Some("r-1"));
    assert_eq!(err.trace_id().map(|t| t.as_str()), Some("t-1"));
}

#[test]
fn test_requirement_redline_reports_status_change() {
    let mut repo = VersionRepository::new();
    let v1 = commit_requirement(&mut repo, "req-1", login_content());
    let mut approved = login_content();
    approved.status = RequirementStatus::Approved;
    let v2 = commit_requirement(&mut repo, "req-1", approved);

    let result = redline(query(
        &repo,
        EngineQuery::RequirementRedline {
            old_snapshot_id: v1,
            new_snapshot_id: v2,
        },
    ));

    assert_eq!(result.entity_kind, EntityKind::Requirement);
    assert_eq!(result.structured.old_version, 1);
    assert_eq!(result.structured.new_version, 2);
    assert_eq!(result.structured.changes.len(), 1);
    let change = &result.structured.changes[0];
    assert_eq!(change.field, "Status");
    assert_eq!(change.old_value.as_deref(), Some("Draft"));
    assert_eq!(change.new_value.as_deref(), Some("Approved"));
    assert_eq!(change.change_type, ChangeType::Modified);
    assert!(result.human_summary.contains("| Status | Modified | Draft | Approved |"));
}

#[test]
fn test_redline_of_snapshot_with_itself_is_empty() {
    let mut repo = VersionRepository::new();
    let v1 = commit_test_case(&mut repo, "tc-1", login_test_content());

    let result = redline(query(
        &repo,
        EngineQuery::TestCaseRedline {
            old_snapshot_id: v1.clone(),
            new_snapshot_id: v1,
        },
    ));

    assert!(result.structured.is_empty());
    assert!(result.human_summary.contains("_No changes between versions._"));
}

#[test]
fn test_test_case_redline_added_description_and_modified_steps() {
    let mut repo = VersionRepository::new();
    let v1 = commit_test_case(&mut repo, "tc-1", login_test_content());
    let v2 = commit_test_case(
        &mut repo,
        "tc-1",
        TestCaseContent::new("Login works", "Step1;Step2;Step3", "User is signed in")
            .with_description("Happy path"),
    );

    let result = redline(query(
        &repo,
        EngineQuery::TestCaseRedline {
            old_snapshot_id: v1,
            new_snapshot_id: v2,
        },
    ));

    let fields: Vec<&str> = result
        .structured
        .changes
        .iter()
        .map(|c| c.field.as_str())
        .collect();
    assert_eq!(fields, vec!["Description", "Steps"]);
    assert_eq!(result.structured.changes[0].change_type, ChangeType::Added);
    assert_eq!(result.structured.changes[1].change_type, ChangeType::Modified);
}

#[test]
fn test_redline_missing_new_snapshot_is_not_found() {
    let mut repo = VersionRepository::new();
    let v1 = commit_requirement(&mut repo, "req-1", login_content());

    let err = apply_engine_query(
        EngineQuery::RequirementRedline {
            old_snapshot_id: v1,
            new_snapshot_id: "ghost".to_string(),
        },
        &repo,
        &RedlineOptions::default(),
        &RequestContext::new(),
    )
    .unwrap_err();

    assert_eq!(err.code(), "ERR_NOT_FOUND");
    assert_eq!(err.op(), Some("requirement_redline"));
    assert_eq!(err.snapshot_id(), Some("ghost"));
}

#[test]
fn test_requirement_snapshot_ids_do_not_resolve_as_test_cases() {
    let mut repo = VersionRepository::new();
    let req = commit_requirement(&mut repo, "req-1", login_content());

    let err = apply_engine_query(
        EngineQuery::TestCaseVersionGet { snapshot_id: req },
        &repo,
        &RedlineOptions::default(),
        &RequestContext::new(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_cross_entity_redline_permitted_by_default() {
    let mut repo = VersionRepository::new();
    let a = commit_requirement(&mut repo, "req-1", login_content());
    let b = commit_requirement(&mut repo, "req-2", login_content().with_description("x"));

    let result = redline(query(
        &repo,
        EngineQuery::RequirementRedline {
            old_snapshot_id: a,
            new_snapshot_id: b,
        },
    ));
    assert_eq!(result.structured.changes.len(), 1);
}

#[test]
fn test_cross_entity_redline_rejected_when_strict() {
    let mut repo = VersionRepository::new();
    let a = commit_requirement(&mut repo, "req-1", login_content());
    let b = commit_requirement(&mut repo, "req-2", login_content());

    let err = apply_engine_query(
        EngineQuery::RequirementRedline {
            old_snapshot_id: a,
            new_snapshot_id: b,
        },
        &repo,
        &RedlineOptions::strict(),
        &RequestContext::new(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidComparison);
    assert_eq!(err.entity_id(), Some("req-1"));
}

#[test]
fn test_redline_result_serializes_camel_case() {
    let mut repo = VersionRepository::new();
    let v1 = commit_requirement(&mut repo, "req-1", login_content());
    let v2 = commit_requirement(&mut repo, "req-1", login_content().with_parent_id(9));

    let result = redline(query(
        &repo,
        EngineQuery::RequirementRedline {
            old_snapshot_id: v1,
            new_snapshot_id: v2,
        },
    ));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["entityKind"], "Requirement");
    assert_eq!(json["structured"]["oldVersion"], 1);
    assert_eq!(json["structured"]["changes"][0]["field"], "ParentId");
    assert_eq!(json["structured"]["changes"][0]["changeType"], "Added");
    assert!(json["structured"]["changes"][0]["oldValue"].is_null());
    assert!(json["humanSummary"].as_str().unwrap().starts_with("## Requirement Redline"));
}
