//! Redline Core - versioned snapshots and field-level version diffs
//!
//! This crate provides:
//! - Requirement and test case snapshot models
//! - The redline comparator (ordered, classified field changes)
//! - An append-only in-memory version store and history import
//! - The structured error facility
//! - The structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod redline;

// Used by the logging macros
#[doc(hidden)]
pub use redline_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, RedlineError, Result};
pub use model::{
    EntityKind, RequirementContent, RequirementSnapshot, RequirementStatus, RequirementType,
    TestCaseContent, TestCaseSnapshot, VersionedSnapshot,
};
pub use ops::{SnapshotStore, VersionRepository};
pub use redline::{
    compare_requirements, compare_test_cases, ChangeType, FieldChange, RedlineOptions,
    RedlineResult,
};
