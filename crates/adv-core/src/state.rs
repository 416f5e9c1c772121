//! Player state for one playthrough.

use std::collections::BTreeSet;

/// Where the player is and which flags are set.
///
/// A flag that is absent is false; there is no separate "unset" state.
/// Nothing here is validated; the effect executor checks values before
/// they reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    current_scene_id: String,
    flags: BTreeSet<String>,
}

impl PlayerState {
    /// Create a player standing in the given scene with no flags set.
    pub fn new(start_scene_id: impl Into<String>) -> Self {
        Self {
            current_scene_id: start_scene_id.into(),
            flags: BTreeSet::new(),
        }
    }

    /// The scene the player is in.
    pub fn current_scene_id(&self) -> &str {
        &self.current_scene_id
    }

    /// Move the player to another scene.
    pub fn set_current_scene_id(&mut self, scene_id: impl Into<String>) {
        self.current_scene_id = scene_id.into();
    }

    /// Check whether a flag is set.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Set a flag.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.flags.insert(name.into());
    }

    /// Clear a flag. Returns whether it was set.
    pub fn clear_flag(&mut self, name: &str) -> bool {
        self.flags.remove(name)
    }

    /// All set flags, sorted by name.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }
}
