use chrono::{DateTime, TimeZone, Utc};
use redline_core::{
    RequirementContent, RequirementSnapshot, RequirementStatus, RequirementType, TestCaseContent,
    TestCaseSnapshot,
};

/// Fixed timestamp so snapshots built in tests compare equal by value
#[allow(dead_code)]
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

/// Baseline requirement content: "Login", CRS, Draft, no description, no parent
#[allow(dead_code)]
pub fn login_content() -> RequirementContent {
    RequirementContent::new("Login", RequirementType::Crs, RequirementStatus::Draft)
}

#[allow(dead_code)]
pub fn requirement(version: u32, content: RequirementContent) -> RequirementSnapshot {
    RequirementSnapshot::new(
        format!("req-1@v{}", version),
        "req-1",
        version,
        content,
        "tester",
        fixed_time(),
    )
}

/// Baseline test case content
#[allow(dead_code)]
pub fn login_test_content() -> TestCaseContent {
    TestCaseContent::new("Login works", "Step1;Step2", "User is signed in")
}

#[allow(dead_code)]
pub fn test_case(version: u32, content: TestCaseContent) -> TestCaseSnapshot {
    TestCaseSnapshot::new(
        format!("tc-1@v{}", version),
        "tc-1",
        version,
        content,
        "tester",
        fixed_time(),
    )
}
