//! Engine configuration.

/// What to do with a non-end scene that offers no choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeadEndPolicy {
    /// Load the story and record a warning.
    #[default]
    Warn,
    /// Reject the story.
    Deny,
}

/// Options controlling story validation.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Handling of dead-end scenes.
    pub dead_end_policy: DeadEndPolicy,
}

impl EngineConfig {
    /// Set the dead-end policy.
    pub fn with_dead_end_policy(mut self, policy: DeadEndPolicy) -> Self {
        self.dead_end_policy = policy;
        self
    }

    /// Shorthand for rejecting dead ends.
    pub fn strict() -> Self {
        Self::default().with_dead_end_policy(DeadEndPolicy::Deny)
    }
}
