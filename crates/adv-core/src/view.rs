//! What a front end needs to draw the current scene.

use serde::Serialize;

use crate::evaluator::ChoiceEvaluator;
use crate::state::PlayerState;
use crate::story::Scene;

/// A scene as seen by the player right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneView<'a> {
    /// Scene id.
    pub id: &'a str,
    /// Scene text.
    pub text: &'a str,
    /// True for terminal scenes.
    pub is_end: bool,
    /// Choices sorted by number, each annotated with its availability.
    pub choices: Vec<ChoiceView<'a>>,
}

/// One choice with its availability for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceView<'a> {
    /// Number to type.
    pub number: u32,
    /// Choice text.
    pub text: &'a str,
    /// Whether it can be taken.
    pub enabled: bool,
    /// Author's reason when disabled, if any.
    pub reason: Option<&'a str>,
}

impl<'a> SceneView<'a> {
    /// Annotate every choice in `scene` for `state`.
    pub fn build(scene: &'a Scene, state: &PlayerState, evaluator: &ChoiceEvaluator) -> Self {
        let mut choices: Vec<ChoiceView<'a>> = scene
            .choices
            .iter()
            .map(|choice| {
                let availability = evaluator.is_enabled(choice, state);
                ChoiceView {
                    number: choice.number,
                    text: &choice.text,
                    enabled: availability.enabled,
                    reason: availability.reason,
                }
            })
            .collect();
        choices.sort_by_key(|c| c.number);

        Self {
            id: &scene.id,
            text: &scene.text,
            is_end: scene.is_end,
            choices,
        }
    }
}
