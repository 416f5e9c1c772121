//! Choice availability.

use crate::state::PlayerState;
use crate::story::Choice;

/// Whether a choice can be taken, and what to tell the player if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability<'a> {
    /// True if the choice can be taken.
    pub enabled: bool,
    /// The author's disabled reason. Always `None` when enabled, and
    /// `None` when disabled without a configured reason; the caller
    /// supplies fallback text.
    pub reason: Option<&'a str>,
}

impl Availability<'_> {
    const ENABLED: Availability<'static> = Availability {
        enabled: true,
        reason: None,
    };
}

/// Decides which choices are available for a given player state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceEvaluator;

impl ChoiceEvaluator {
    /// Create an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// A choice is enabled iff every `requires_all` flag is set and no
    /// `requires_none` flag is set. Only the author's single reason is
    /// ever reported, however many requirements fail.
    pub fn is_enabled<'a>(&self, choice: &'a Choice, state: &PlayerState) -> Availability<'a> {
        let all_present = choice.requires_all.iter().all(|f| state.has_flag(f));
        let none_present = !choice.requires_none.iter().any(|f| state.has_flag(f));

        if all_present && none_present {
            Availability::ENABLED
        } else {
            Availability {
                enabled: false,
                reason: choice.disabled_reason.as_deref(),
            }
        }
    }
}
