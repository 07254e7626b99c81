pub mod requirement;
pub mod snapshot;
pub mod test_case;

pub use requirement::{RequirementContent, RequirementSnapshot, RequirementStatus, RequirementType};
pub use snapshot::{EntityKind, VersionedSnapshot};
pub use test_case::{TestCaseContent, TestCaseSnapshot};
