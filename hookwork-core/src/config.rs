//! Runtime Configuration
//!
//! Knobs for the update loop and the hook-order diagnostic. A configuration
//! is attached to a [`HostContext`](crate::runtime::HostContext) and shared
//! by every component mounted with it.

use serde::Deserialize;

fn default_max_flush_rounds() -> usize {
    1000
}

fn default_check_hook_order() -> bool {
    cfg!(debug_assertions)
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    /// Upper bound on scheduler rounds in a single flush before it gives up
    /// with [`HookError::UpdateLoop`](crate::HookError::UpdateLoop).
    #[serde(default = "default_max_flush_rounds")]
    pub max_flush_rounds: usize,

    /// Record hook call sites and warn when a render pass calls hooks in a
    /// different order than the previous one.
    #[serde(default = "default_check_hook_order")]
    pub check_hook_order: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_flush_rounds: default_max_flush_rounds(),
            check_hook_order: default_check_hook_order(),
        }
    }
}

impl RuntimeConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let config = RuntimeConfig::from_json(r#"{ "max_flush_rounds": 8 }"#).unwrap();
        assert_eq!(config.max_flush_rounds, 8);
        assert_eq!(config.check_hook_order, cfg!(debug_assertions));
    }

    #[test]
    fn empty_object_is_default() {
        let config = RuntimeConfig::from_json("{}").unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(RuntimeConfig::from_json(r#"{ "check_hook_order": "yes" }"#).is_err());
    }
}
