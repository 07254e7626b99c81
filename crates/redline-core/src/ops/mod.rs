pub mod history;
pub mod store;
pub mod version_ops;

pub use history::{load_history, parse_history, HistoryFile};
pub use store::{SnapshotStore, VersionRepository};
pub use version_ops::{
    commit_requirement_version, commit_requirement_version_at, commit_test_case_version,
    commit_test_case_version_at,
};
