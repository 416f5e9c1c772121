//! Loading stories from JSON.
//!
//! A story file looks like:
//!
//! ```json
//! {
//!   "startSceneId": "hallway",
//!   "scenes": [
//!     {
//!       "id": "hallway",
//!       "text": "A dim hallway.",
//!       "choices": [
//!         {
//!           "number": 1,
//!           "text": "Try door",
//!           "requiresAll": ["doorUnlocked"],
//!           "disabledReason": "It's locked.",
//!           "effects": [{ "type": "GotoScene", "value": "kitchen" }]
//!         }
//!       ]
//!     },
//!     { "id": "kitchen", "text": "You made it.", "isEnd": true }
//!   ]
//! }
//! ```
//!
//! Keys are matched without regard to case or underscores, so
//! `startSceneId`, `StartSceneId` and `start_scene_id` all name the same
//! field. `//` and `/* */` comments and trailing commas are allowed.
//! Effect tags are matched case-insensitively. Loading only checks the
//! shape of the document; graph checks belong to
//! [`SceneRepository`](crate::SceneRepository).

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{StoryError, StoryResult, ValidationError};
use crate::story::{Choice, Effect, Scene, Story};

// Field names below are written in folded form; see `fold_key`.

#[derive(Debug, Deserialize)]
struct StoryDocument {
    #[serde(rename = "startsceneid")]
    start_scene_id: String,
    #[serde(default)]
    scenes: Vec<SceneDocument>,
}

#[derive(Debug, Deserialize)]
struct SceneDocument {
    id: String,
    #[serde(default)]
    text: String,
    #[serde(default, rename = "isend")]
    is_end: bool,
    #[serde(default)]
    choices: Vec<ChoiceDocument>,
}

#[derive(Debug, Deserialize)]
struct ChoiceDocument {
    number: u32,
    #[serde(default)]
    text: String,
    #[serde(default, rename = "requiresall")]
    requires_all: Vec<String>,
    #[serde(default, rename = "requiresnone")]
    requires_none: Vec<String>,
    #[serde(default, rename = "disabledreason")]
    disabled_reason: Option<String>,
    #[serde(default)]
    effects: Vec<EffectDocument>,
}

#[derive(Debug, Deserialize)]
struct EffectDocument {
    #[serde(rename = "type")]
    tag: String,
    #[serde(default)]
    value: String,
}

/// Lowercase a key and drop `_` and `-`.
fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Fold every object key in `value`, recursively. Values are untouched.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (fold_key(&key), fold_keys(value)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

impl EffectDocument {
    fn into_effect(self) -> Result<Effect, ValidationError> {
        let Self { tag, value } = self;
        if tag.eq_ignore_ascii_case("SetFlag") {
            Ok(Effect::SetFlag(value))
        } else if tag.eq_ignore_ascii_case("ClearFlag") {
            Ok(Effect::ClearFlag(value))
        } else if tag.eq_ignore_ascii_case("GotoScene") {
            Ok(Effect::GotoScene(value))
        } else {
            Err(ValidationError::UnknownEffect { tag })
        }
    }
}

impl ChoiceDocument {
    fn into_choice(self) -> Result<Choice, ValidationError> {
        Ok(Choice {
            number: self.number,
            text: self.text,
            requires_all: self.requires_all.into_iter().collect(),
            requires_none: self.requires_none.into_iter().collect(),
            disabled_reason: self.disabled_reason,
            effects: self
                .effects
                .into_iter()
                .map(EffectDocument::into_effect)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl SceneDocument {
    fn into_scene(self) -> Result<Scene, ValidationError> {
        Ok(Scene {
            id: self.id,
            text: self.text,
            is_end: self.is_end,
            choices: self
                .choices
                .into_iter()
                .map(ChoiceDocument::into_choice)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Parse a story from a JSON string.
pub fn from_json(json: &str) -> StoryResult<Story> {
    let raw: Value = json5::from_str(json)?;
    let doc: StoryDocument = serde_json::from_value(fold_keys(raw))?;
    let scenes = doc
        .scenes
        .into_iter()
        .map(SceneDocument::into_scene)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(scenes = scenes.len(), start = %doc.start_scene_id, "story parsed");
    Ok(Story {
        start_scene_id: doc.start_scene_id,
        scenes,
    })
}

/// Read and parse a story file.
pub fn from_path(path: &Path) -> StoryResult<Story> {
    let json = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "read story file");
    from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALLWAY: &str = r#"{
        "startSceneId": "hallway",
        "scenes": [
            {
                "id": "hallway",
                "text": "A dim hallway.",
                "choices": [
                    {
                        "number": 1,
                        "text": "Try door",
                        "requiresAll": ["doorUnlocked"],
                        "disabledReason": "It's locked.",
                        "effects": [{ "type": "GotoScene", "value": "kitchen" }]
                    },
                    {
                        "number": 2,
                        "text": "Check pocket",
                        "requiresNone": ["doorUnlocked"],
                        "effects": [{ "type": "setflag", "value": "doorUnlocked" }]
                    }
                ]
            },
            { "id": "kitchen", "text": "You made it.", "isEnd": true }
        ]
    }"#;

    #[test]
    fn parses_story() {
        let story = from_json(HALLWAY).unwrap();

        assert_eq!(story.start_scene_id, "hallway");
        assert_eq!(story.scenes.len(), 2);

        let hallway = &story.scenes[0];
        let door = hallway.choice(1).unwrap();
        assert!(door.requires_all.contains("doorUnlocked"));
        assert_eq!(door.disabled_reason.as_deref(), Some("It's locked."));
        assert_eq!(door.effects, vec![Effect::goto("kitchen")]);

        let pocket = hallway.choice(2).unwrap();
        assert!(pocket.requires_none.contains("doorUnlocked"));
        assert_eq!(pocket.effects, vec![Effect::set_flag("doorUnlocked")]);

        assert!(story.scenes[1].is_end);
        assert!(story.scenes[1].choices.is_empty());
    }

    #[test]
    fn accepts_snake_case_keys() {
        let story = from_json(
            r#"{
                "start_scene_id": "a",
                "scenes": [{ "id": "a", "text": "A", "is_end": true }]
            }"#,
        )
        .unwrap();

        assert_eq!(story.start_scene_id, "a");
        assert!(story.scenes[0].is_end);
    }

    #[test]
    fn rejects_unknown_effect_type() {
        let err = from_json(
            r#"{
                "startSceneId": "a",
                "scenes": [{
                    "id": "a",
                    "choices": [{
                        "number": 1,
                        "effects": [{ "type": "Teleport", "value": "b" }]
                    }]
                }]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            StoryError::Validation(ValidationError::UnknownEffect { ref tag }) if tag == "Teleport"
        ));
    }

    #[test]
    fn accepts_pascal_case_keys() {
        let story = from_json(
            r#"{
                "StartSceneId": "a",
                "Scenes": [
                    {
                        "Id": "a",
                        "Text": "A",
                        "Choices": [{
                            "Number": 1,
                            "RequiresNone": ["seen"],
                            "DisabledReason": "Been there.",
                            "Effects": [{ "Type": "GotoScene", "Value": "b" }]
                        }]
                    },
                    { "Id": "b", "Text": "B", "IsEnd": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(story.start_scene_id, "a");
        let choice = story.scenes[0].choice(1).unwrap();
        assert!(choice.requires_none.contains("seen"));
        assert_eq!(choice.disabled_reason.as_deref(), Some("Been there."));
        assert_eq!(choice.effects, vec![Effect::goto("b")]);
        assert!(story.scenes[1].is_end);
    }

    #[test]
    fn ids_keep_their_case() {
        let story = from_json(
            r#"{ "startSceneId": "Hallway", "scenes": [{ "id": "Hallway", "isEnd": true }] }"#,
        )
        .unwrap();

        assert_eq!(story.start_scene_id, "Hallway");
        assert_eq!(story.scenes[0].id, "Hallway");
    }

    #[test]
    fn allows_comments_and_trailing_commas() {
        let story = from_json(
            r#"// story
            {
                "startSceneId": "a", /* first scene */
                "scenes": [
                    { "id": "a", "text": "A", "isEnd": true, },
                ],
            }"#,
        )
        .unwrap();

        assert_eq!(story.start_scene_id, "a");
        assert_eq!(story.scenes.len(), 1);
        assert!(story.scenes[0].is_end);
    }

    #[test]
    fn malformed_json() {
        let err = from_json("{ \"scenes\": [").unwrap_err();
        assert!(matches!(err, StoryError::Syntax(_)));
    }

    #[test]
    fn missing_start_scene_key() {
        let err = from_json(r#"{ "scenes": [] }"#).unwrap_err();
        assert!(matches!(err, StoryError::Parse(_)));
        assert!(err.to_string().contains("startsceneid"));
    }

    #[test]
    fn missing_file() {
        let err = from_path(Path::new("/nonexistent/story.json")).unwrap_err();
        assert!(matches!(err, StoryError::Io { .. }));
    }

    #[test]
    fn blank_values_survive_loading() {
        let story = from_json(
            r#"{
                "startSceneId": "a",
                "scenes": [{
                    "id": "a",
                    "choices": [{ "number": 1, "effects": [{ "type": "SetFlag", "value": " " }] }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(story.scenes[0].choices[0].effects, vec![Effect::set_flag(" ")]);
    }
}
