//! Scenes and the numbered choices they offer.

use std::collections::BTreeSet;

use super::effect::Effect;

/// A node in the story graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Unique identifier.
    pub id: String,
    /// Text shown when the player arrives.
    pub text: String,
    /// Terminal scenes end the playthrough and offer no choices.
    pub is_end: bool,
    /// Choices in authoring order.
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_end: false,
            choices: Vec::new(),
        }
    }

    /// Create a terminal scene.
    pub fn end(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            is_end: true,
            ..Self::new(id, text)
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Find a choice by its number.
    pub fn choice(&self, number: u32) -> Option<&Choice> {
        self.choices.iter().find(|c| c.number == number)
    }

    /// Every scene id this scene can jump to, in authoring order.
    pub fn goto_targets(&self) -> impl Iterator<Item = &str> {
        self.choices
            .iter()
            .flat_map(|c| c.effects.iter())
            .filter_map(Effect::goto_target)
    }
}

/// A numbered action within a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Number the player types to select this choice.
    pub number: u32,
    /// Text shown to the player.
    pub text: String,
    /// Flags that must all be set.
    pub requires_all: BTreeSet<String>,
    /// Flags that must all be clear.
    pub requires_none: BTreeSet<String>,
    /// Shown when the choice is unavailable.
    pub disabled_reason: Option<String>,
    /// Applied in order when the choice is taken.
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create an unconditional choice with no effects.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
            requires_all: BTreeSet::new(),
            requires_none: BTreeSet::new(),
            disabled_reason: None,
            effects: Vec::new(),
        }
    }

    /// Require a flag to be set.
    pub fn requires(mut self, flag: impl Into<String>) -> Self {
        self.requires_all.insert(flag.into());
        self
    }

    /// Require a flag to be clear.
    pub fn forbids(mut self, flag: impl Into<String>) -> Self {
        self.requires_none.insert(flag.into());
        self
    }

    /// Set the reason shown while disabled.
    pub fn with_disabled_reason(mut self, reason: impl Into<String>) -> Self {
        self.disabled_reason = Some(reason.into());
        self
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}
