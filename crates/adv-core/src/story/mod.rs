//! The story graph: scenes, choices and effects.
//!
//! These are plain data. Structural checks happen once, when a
//! [`SceneRepository`](crate::SceneRepository) is built from a [`Story`].

mod effect;
mod scene;

pub use effect::Effect;
pub use scene::{Choice, Scene};

/// An unvalidated story: scenes in authoring order plus the start scene id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Id of the scene a playthrough begins in.
    pub start_scene_id: String,
    /// All scenes.
    pub scenes: Vec<Scene>,
}

impl Story {
    /// Create an empty story starting at the given scene.
    pub fn new(start_scene_id: impl Into<String>) -> Self {
        Self {
            start_scene_id: start_scene_id.into(),
            scenes: Vec::new(),
        }
    }

    /// Add a scene.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }
}
