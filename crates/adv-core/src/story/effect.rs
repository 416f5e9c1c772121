//! Effects applied when a choice is taken.

use std::fmt;

/// A state-mutating operation. The vocabulary is closed: adding a kind
/// means extending this enum and the executor together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Set the named flag.
    SetFlag(String),
    /// Clear the named flag.
    ClearFlag(String),
    /// Move the player to another scene.
    GotoScene(String),
}

impl Effect {
    /// Set a flag.
    pub fn set_flag(name: impl Into<String>) -> Self {
        Effect::SetFlag(name.into())
    }

    /// Clear a flag.
    pub fn clear_flag(name: impl Into<String>) -> Self {
        Effect::ClearFlag(name.into())
    }

    /// Go to a scene.
    pub fn goto(scene_id: impl Into<String>) -> Self {
        Effect::GotoScene(scene_id.into())
    }

    /// The tag used for this effect in story files.
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::SetFlag(_) => "SetFlag",
            Effect::ClearFlag(_) => "ClearFlag",
            Effect::GotoScene(_) => "GotoScene",
        }
    }

    /// The flag name or scene id carried by this effect.
    pub fn value(&self) -> &str {
        match self {
            Effect::SetFlag(v) | Effect::ClearFlag(v) | Effect::GotoScene(v) => v,
        }
    }

    /// The scene this effect jumps to, if any.
    pub fn goto_target(&self) -> Option<&str> {
        match self {
            Effect::GotoScene(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind(), self.value())
    }
}
