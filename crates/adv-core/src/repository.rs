//! Validated, indexed scene storage.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use tracing::debug;

use crate::config::{DeadEndPolicy, EngineConfig};
use crate::error::{StoryError, StoryResult, ValidationError};
use crate::story::{Scene, Story};

/// A non-fatal finding from story validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A non-end scene with no choices; a player reaching it is stuck.
    DeadEnd {
        /// The scene id.
        scene: String,
    },
    /// No chain of `GotoScene` effects leads here from the start scene.
    Unreachable {
        /// The scene id.
        scene: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::DeadEnd { scene } => {
                write!(f, "scene \"{scene}\" is not an end scene but has no choices")
            }
            LoadWarning::Unreachable { scene } => {
                write!(f, "scene \"{scene}\" is unreachable from the start scene")
            }
        }
    }
}

/// The immutable story graph, checked once at construction.
///
/// Holds no interior mutability, so a single repository can back any
/// number of playthroughs on any number of threads.
#[derive(Debug, Clone)]
pub struct SceneRepository {
    scenes: Vec<Scene>,
    by_id: HashMap<String, usize>,
    start_scene_id: String,
    warnings: Vec<LoadWarning>,
}

impl SceneRepository {
    /// Validate `story` with the default configuration.
    pub fn new(story: Story) -> StoryResult<Self> {
        Self::with_config(story, &EngineConfig::default())
    }

    /// Validate `story` and index its scenes.
    ///
    /// Fails on duplicate scene ids, a missing start scene, duplicate or
    /// zero choice numbers, choices without effects, and `GotoScene`
    /// targets that do not exist. Dead-end scenes fail only under
    /// [`DeadEndPolicy::Deny`].
    pub fn with_config(story: Story, config: &EngineConfig) -> StoryResult<Self> {
        let Story {
            start_scene_id,
            scenes,
        } = story;

        let mut by_id = HashMap::with_capacity(scenes.len());
        for (index, scene) in scenes.iter().enumerate() {
            if by_id.insert(scene.id.clone(), index).is_some() {
                return Err(ValidationError::DuplicateScene(scene.id.clone()).into());
            }
        }

        if !by_id.contains_key(&start_scene_id) {
            return Err(ValidationError::MissingStartScene(start_scene_id).into());
        }

        let mut warnings = Vec::new();
        for scene in &scenes {
            check_scene(scene, &by_id)?;

            if !scene.is_end && scene.choices.is_empty() {
                match config.dead_end_policy {
                    DeadEndPolicy::Deny => {
                        return Err(ValidationError::DeadEnd {
                            scene: scene.id.clone(),
                        }
                        .into());
                    }
                    DeadEndPolicy::Warn => {
                        debug!(scene = %scene.id, "dead-end scene");
                        warnings.push(LoadWarning::DeadEnd {
                            scene: scene.id.clone(),
                        });
                    }
                }
            }
        }

        let reachable = reachable_from(&start_scene_id, &scenes, &by_id);
        for scene in &scenes {
            if !reachable.contains(scene.id.as_str()) {
                debug!(scene = %scene.id, "unreachable scene");
                warnings.push(LoadWarning::Unreachable {
                    scene: scene.id.clone(),
                });
            }
        }

        debug!(
            scenes = scenes.len(),
            start = %start_scene_id,
            warnings = warnings.len(),
            "story validated"
        );

        Ok(Self {
            scenes,
            by_id,
            start_scene_id,
            warnings,
        })
    }

    /// Look up a scene by id.
    pub fn get(&self, scene_id: &str) -> StoryResult<&Scene> {
        self.by_id
            .get(scene_id)
            .map(|&index| &self.scenes[index])
            .ok_or_else(|| StoryError::SceneNotFound(scene_id.to_string()))
    }

    /// The scene every playthrough starts in.
    pub fn start_scene_id(&self) -> &str {
        &self.start_scene_id
    }

    /// All scenes in authoring order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always false for a validated repository, which holds its start scene.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Non-fatal findings from validation.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}

fn check_scene(scene: &Scene, by_id: &HashMap<String, usize>) -> Result<(), ValidationError> {
    let mut numbers = HashSet::with_capacity(scene.choices.len());
    for choice in &scene.choices {
        if choice.number == 0 {
            return Err(ValidationError::ZeroChoiceNumber {
                scene: scene.id.clone(),
            });
        }
        if !numbers.insert(choice.number) {
            return Err(ValidationError::DuplicateChoice {
                scene: scene.id.clone(),
                number: choice.number,
            });
        }
        if choice.effects.is_empty() {
            return Err(ValidationError::EmptyEffects {
                scene: scene.id.clone(),
                choice: choice.number,
            });
        }
        if let Some(target) = choice
            .effects
            .iter()
            .filter_map(|e| e.goto_target())
            .find(|target| !by_id.contains_key(*target))
        {
            return Err(ValidationError::DanglingTarget {
                scene: scene.id.clone(),
                choice: choice.number,
                target: target.to_string(),
            });
        }
    }
    Ok(())
}

/// Breadth-first walk over `GotoScene` edges.
fn reachable_from<'a>(
    start: &'a str,
    scenes: &'a [Scene],
    by_id: &HashMap<String, usize>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([start]);
    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(&index) = by_id.get(id) {
            queue.extend(scenes[index].goto_targets());
        }
    }
    seen
}
