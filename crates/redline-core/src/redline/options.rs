//! Comparison options.

use serde::{Deserialize, Serialize};

/// What to do when the two snapshots belong to different entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossEntityPolicy {
    /// Compare anyway; the caller is trusted to pass related snapshots
    #[default]
    Permissive,
    /// Fail with `InvalidComparison`
    Reject,
}

/// Options for the checked comparison entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RedlineOptions {
    pub cross_entity: CrossEntityPolicy,
}

impl RedlineOptions {
    /// Options that reject comparisons across entities
    pub fn strict() -> Self {
        Self {
            cross_entity: CrossEntityPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(
            RedlineOptions::default().cross_entity,
            CrossEntityPolicy::Permissive
        );
    }

    #[test]
    fn test_deserializes_from_partial_json() {
        let opts: RedlineOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, RedlineOptions::default());
        let opts: RedlineOptions = serde_json::from_str(r#"{"cross_entity":"reject"}"#).unwrap();
        assert_eq!(opts, RedlineOptions::strict());
    }
}
