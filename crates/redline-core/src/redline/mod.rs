//! Redline (field-level version diff) engine.
//!
//! Compares two snapshots of the same entity kind and produces an ordered
//! list of field changes, each classified as added, removed or modified.
//!
//! ## Entry points
//!
//! ```
//! use redline_core::model::{RequirementContent, RequirementSnapshot, RequirementStatus, RequirementType};
//! use redline_core::redline::{compare_requirements, ChangeType};
//!
//! let at = "2026-01-01T00:00:00Z".parse().unwrap();
//! let content = RequirementContent::new("Login", RequirementType::Crs, RequirementStatus::Draft);
//! let v1 = RequirementSnapshot::new("s1", "req-1", 1, content.clone(), "alice", at);
//! let v2 = RequirementSnapshot::new("s2", "req-1", 2, content.with_description("Add SSO"), "bob", at);
//!
//! let result = compare_requirements(&v1, &v2);
//! assert_eq!(result.changes.len(), 1);
//! assert_eq!(result.changes[0].change_type, ChangeType::Added);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: no I/O, inputs are borrowed immutably, a fresh result is allocated.
//! - **Fixed field order**: changes follow the entity kind's field table,
//!   never the order in which differences happen to be found.
//! - **Value equality**: two absent values are equal; enums compare by their
//!   canonical string form.

pub mod engine;
pub mod human_summary;
pub mod model;
pub mod options;

pub use engine::{
    classify, compare_requirements, compare_requirements_checked, compare_test_cases,
    compare_test_cases_checked, field_order,
};
pub use human_summary::render_human_summary;
pub use model::{field, ChangeType, FieldChange, RedlineResult};
pub use options::{CrossEntityPolicy, RedlineOptions};
