//! Error types for the story engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Structural defects in a story, found at load time or while applying
/// a malformed effect. These are authoring bugs, never transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two scenes share the same identifier.
    #[error("duplicate scene id: \"{0}\"")]
    DuplicateScene(String),

    /// The designated start scene does not exist.
    #[error("start scene not found: \"{0}\"")]
    MissingStartScene(String),

    /// A `GotoScene` effect points at a scene that does not exist.
    #[error("scene \"{scene}\", choice {choice}: goto target \"{target}\" does not exist")]
    DanglingTarget {
        /// Scene owning the choice.
        scene: String,
        /// Number of the offending choice.
        choice: u32,
        /// The unresolved target id.
        target: String,
    },

    /// Two choices in one scene share a number.
    #[error("scene \"{scene}\": duplicate choice number {number}")]
    DuplicateChoice {
        /// Scene owning the choices.
        scene: String,
        /// The repeated number.
        number: u32,
    },

    /// Choice numbers start at 1.
    #[error("scene \"{scene}\": choice numbers must be positive, found 0")]
    ZeroChoiceNumber {
        /// Scene owning the choice.
        scene: String,
    },

    /// A choice has no effects to apply.
    #[error("scene \"{scene}\", choice {choice}: no effects")]
    EmptyEffects {
        /// Scene owning the choice.
        scene: String,
        /// Number of the offending choice.
        choice: u32,
    },

    /// A non-end scene offers no choices.
    #[error("scene \"{scene}\" is not an end scene but has no choices")]
    DeadEnd {
        /// The dead-end scene.
        scene: String,
    },

    /// An effect carries an empty or whitespace-only value.
    #[error("{effect} requires a non-empty value")]
    BlankEffectValue {
        /// Name of the effect kind.
        effect: &'static str,
    },

    /// An effect tag outside the fixed vocabulary.
    #[error("unknown effect type: \"{tag}\"")]
    UnknownEffect {
        /// The unrecognized tag.
        tag: String,
    },
}

/// Errors that can occur while loading or playing a story.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story is structurally invalid.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A scene lookup missed. Unreachable after validation unless the
    /// caller corrupted the player state.
    #[error("scene not found: \"{0}\"")]
    SceneNotFound(String),

    /// The story document is not well-formed JSON.
    #[error("could not parse story: {0}")]
    Syntax(#[from] json5::Error),

    /// The story document does not match the story schema.
    #[error("could not parse story: {0}")]
    Parse(#[from] serde_json::Error),

    /// The story file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl StoryError {
    /// Returns true for content errors, as opposed to lookup or I/O failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoryError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = ValidationError::DanglingTarget {
            scene: "hallway".into(),
            choice: 2,
            target: "attic".into(),
        };
        assert_eq!(
            err.to_string(),
            "scene \"hallway\", choice 2: goto target \"attic\" does not exist"
        );

        let err: StoryError = ValidationError::BlankEffectValue { effect: "SetFlag" }.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "validation error: SetFlag requires a non-empty value"
        );
    }

    #[test]
    fn not_found_is_not_validation() {
        let err = StoryError::SceneNotFound("cellar".into());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "scene not found: \"cellar\"");
    }
}
