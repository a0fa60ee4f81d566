//! Engine-wide switches.

use crate::pool::DEFAULT_POOL_SIZE;

/// Environment variable enabling verbose mount and layout tracing.
pub const DEBUG_ENV_VAR: &str = "TESSERA_DEBUG";

/// Environment variable turning mount content recycling off.
pub const DISABLE_RECYCLING_ENV_VAR: &str = "TESSERA_DISABLE_RECYCLING";

/// Configuration shared by every tree created from one context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentsConfiguration {
    /// Whether unmounted content is returned to recycle pools.
    pub recycling_enabled: bool,

    /// Pool capacity for components that do not pick their own.
    pub default_pool_size: usize,

    /// Emit per-item trace logs during mount passes.
    pub debug_logging: bool,
}

impl Default for ComponentsConfiguration {
    fn default() -> Self {
        Self {
            recycling_enabled: true,
            default_pool_size: DEFAULT_POOL_SIZE,
            debug_logging: false,
        }
    }
}

impl ComponentsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults adjusted by `TESSERA_DEBUG` and `TESSERA_DISABLE_RECYCLING`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if lookup(DEBUG_ENV_VAR).is_some() {
            config.debug_logging = true;
        }
        if lookup(DISABLE_RECYCLING_ENV_VAR).is_some() {
            config.recycling_enabled = false;
        }
        config
    }

    pub fn recycling_enabled(mut self, enabled: bool) -> Self {
        self.recycling_enabled = enabled;
        self
    }

    pub fn default_pool_size(mut self, size: usize) -> Self {
        self.default_pool_size = size;
        self
    }

    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_lookup_toggles_flags() {
        let config = ComponentsConfiguration::from_lookup(|key| {
            (key == DISABLE_RECYCLING_ENV_VAR).then(|| "1".to_string())
        });
        assert!(!config.recycling_enabled);
        assert!(!config.debug_logging);
        assert_eq!(config.default_pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn empty_env_keeps_defaults() {
        let config = ComponentsConfiguration::from_lookup(|_| None);
        assert_eq!(config, ComponentsConfiguration::default());
    }
}
