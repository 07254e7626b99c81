use redline_core_types::{RequestContext, RequestId, TraceId};
use thiserror::Error;

/// Result type alias using RedlineError
pub type Result<T> = std::result::Result<T, RedlineError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (HTTP layers, the CLI,
/// tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,
    AlreadyExists,

    // Versioning
    InvalidVersion,
    VersionConflict,

    // Comparison
    /// The two snapshots belong to different logical entities
    InvalidComparison,

    // Validation
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::InvalidVersion => "ERR_INVALID_VERSION",
            ExErrorKind::VersionConflict => "ERR_VERSION_CONFLICT",
            ExErrorKind::InvalidComparison => "ERR_INVALID_COMPARISON",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context fields. Built with the
/// `with_*` methods:
///
/// ```
/// use redline_core::errors::{ExError, ExErrorKind};
///
/// let err = ExError::new(ExErrorKind::NotFound)
///     .with_op("requirement_redline")
///     .with_snapshot_id("snap-1")
///     .with_message("snapshot not found");
/// assert_eq!(err.code(), "ERR_NOT_FOUND");
/// ```
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    snapshot_id: Option<String>,
    version: Option<u32>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            snapshot_id: None,
            version: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add snapshot ID context
    pub fn with_snapshot_id(mut self, id: impl Into<String>) -> Self {
        self.snapshot_id = Some(id.into());
        self
    }

    /// Add version number context
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Copy request and trace IDs from a request context
    pub fn with_context(mut self, ctx: &RequestContext) -> Self {
        self.request_id = Some(ctx.request_id.clone());
        self.trace_id = ctx.trace_id.clone();
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    pub fn version(&self) -> Option<u32> {
        self.version
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(snapshot_id) = &self.snapshot_id {
            write!(f, " (snapshot_id: {})", snapshot_id)?;
        }
        if let Some(version) = self.version {
            write!(f, " (version: {})", version)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for snapshot storage and redline operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RedlineError {
    /// No snapshot with this identifier exists
    #[error("Snapshot not found: {snapshot_id}")]
    SnapshotNotFound { snapshot_id: String },

    /// No snapshot has ever been recorded for this entity
    #[error("Entity has no recorded versions: {entity_id}")]
    EntityNotFound { entity_id: String },

    /// The entity exists but has no snapshot with this version number
    #[error("Version {version} not found for entity {entity_id}")]
    VersionNotFound { entity_id: String, version: u32 },

    /// Snapshots from two different entities were submitted for comparison
    #[error("Cannot compare snapshots of different entities: {old_entity_id} vs {new_entity_id}")]
    InvalidComparison {
        old_entity_id: String,
        new_entity_id: String,
    },

    /// Version numbers start at 1
    #[error("Invalid version {version} for entity {entity_id}: versions start at 1")]
    InvalidVersion { entity_id: String, version: u32 },

    /// Appended version is not the successor of the latest stored version
    #[error("Version conflict for entity {entity_id}: expected version {expected}, got {actual}")]
    VersionConflict {
        entity_id: String,
        expected: u32,
        actual: u32,
    },

    /// Snapshot identifiers are unique across the store
    #[error("Snapshot already exists: {snapshot_id}")]
    SnapshotAlreadyExists { snapshot_id: String },

    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<RedlineError> for ExError {
    fn from(err: RedlineError) -> Self {
        match err {
            RedlineError::SnapshotNotFound { snapshot_id } => ExError::new(ExErrorKind::NotFound)
                .with_snapshot_id(snapshot_id)
                .with_message("Snapshot not found"),

            RedlineError::EntityNotFound { entity_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(entity_id)
                .with_message("Entity has no recorded versions"),

            RedlineError::VersionNotFound { entity_id, version } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(entity_id)
                    .with_version(version)
                    .with_message("Version not found")
            }

            RedlineError::InvalidComparison {
                old_entity_id,
                new_entity_id,
            } => ExError::new(ExErrorKind::InvalidComparison)
                .with_entity_id(old_entity_id)
                .with_message(format!(
                    "New snapshot belongs to a different entity: {}",
                    new_entity_id
                )),

            RedlineError::InvalidVersion { entity_id, version } => {
                ExError::new(ExErrorKind::InvalidVersion)
                    .with_entity_id(entity_id)
                    .with_version(version)
                    .with_message("Versions start at 1")
            }

            RedlineError::VersionConflict {
                entity_id,
                expected,
                actual,
            } => ExError::new(ExErrorKind::VersionConflict)
                .with_entity_id(entity_id)
                .with_version(actual)
                .with_message(format!("Expected version {}", expected)),

            RedlineError::SnapshotAlreadyExists { snapshot_id } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_snapshot_id(snapshot_id)
                    .with_message("Snapshot already exists")
            }

            RedlineError::InvalidInput { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid input: {}", reason)),

            RedlineError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            RedlineError::Io { message } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}

impl From<serde_json::Error> for RedlineError {
    fn from(err: serde_json::Error) -> Self {
        RedlineError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for RedlineError {
    fn from(err: std::io::Error) -> Self {
        RedlineError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::NotFound,
            ExErrorKind::AlreadyExists,
            ExErrorKind::InvalidVersion,
            ExErrorKind::VersionConflict,
            ExErrorKind::InvalidComparison,
            ExErrorKind::InvalidInput,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
            ExErrorKind::Internal,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("requirement_redline")
            .with_message("Snapshot not found")
            .with_snapshot_id("s-1");
        let rendered = err.to_string();
        assert_eq!(
            rendered,
            "[ERR_NOT_FOUND] in operation 'requirement_redline': Snapshot not found (snapshot_id: s-1)"
        );
    }

    #[test]
    fn test_with_context_copies_correlation_ids() {
        let ctx = RequestContext::with_request_id(RequestId::from_string("req-1".into()))
            .with_trace_id(TraceId::from_string("trace-1".into()));
        let err = ExError::new(ExErrorKind::Internal).with_context(&ctx);
        assert_eq!(err.request_id().map(|r| r.as_str()), Some("req-1"));
        assert_eq!(err.trace_id().map(|t| t.as_str()), Some("trace-1"));
    }
}
