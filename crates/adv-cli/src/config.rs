//! Configuration for a play session.

use adv_core::{DeadEndPolicy, EngineConfig};

/// Shown for a disabled choice whose author gave no reason.
pub const DEFAULT_FALLBACK_REASON: &str = "That option is not available.";

/// Configuration for the console player.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Validation options passed to the engine.
    pub engine: EngineConfig,
    /// Fallback text for disabled choices.
    pub fallback_reason: String,
    /// Print disabled choices dimmed.
    pub dim_disabled: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            fallback_reason: DEFAULT_FALLBACK_REASON.to_string(),
            dim_disabled: false,
        }
    }
}

impl PlayConfig {
    /// Set the fallback reason.
    pub fn with_fallback_reason(mut self, reason: impl Into<String>) -> Self {
        self.fallback_reason = reason.into();
        self
    }

    /// Dim disabled choices when printing them.
    pub fn with_dim_disabled(mut self, dim: bool) -> Self {
        self.dim_disabled = dim;
        self
    }

    /// Turn dead-end scenes into load errors.
    pub fn with_deny_dead_ends(mut self, deny: bool) -> Self {
        let policy = if deny {
            DeadEndPolicy::Deny
        } else {
            DeadEndPolicy::Warn
        };
        self.engine = self.engine.with_dead_end_policy(policy);
        self
    }
}
