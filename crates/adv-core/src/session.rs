//! A single playthrough.

use crate::error::StoryResult;
use crate::evaluator::ChoiceEvaluator;
use crate::executor::EffectExecutor;
use crate::repository::SceneRepository;
use crate::state::PlayerState;
use crate::view::SceneView;

/// Result of trying to take a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'r> {
    /// The choice's effects were applied.
    Applied,
    /// The current scene has no choice with this number.
    NoSuchChoice(u32),
    /// The choice exists but its requirements are not met.
    Disabled {
        /// Author's reason, if configured.
        reason: Option<&'r str>,
    },
}

/// One player's run through a story.
///
/// Borrows the repository, so several sessions can share one story.
#[derive(Debug, Clone)]
pub struct Session<'r> {
    repo: &'r SceneRepository,
    state: PlayerState,
    evaluator: ChoiceEvaluator,
    executor: EffectExecutor,
}

impl<'r> Session<'r> {
    /// Start a new playthrough at the story's start scene.
    pub fn new(repo: &'r SceneRepository) -> Self {
        Self {
            repo,
            state: PlayerState::new(repo.start_scene_id()),
            evaluator: ChoiceEvaluator::new(),
            executor: EffectExecutor::new(),
        }
    }

    /// The player's state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The current scene with its choices annotated.
    pub fn view(&self) -> StoryResult<SceneView<'r>> {
        let scene = self.repo.get(self.state.current_scene_id())?;
        Ok(SceneView::build(scene, &self.state, &self.evaluator))
    }

    /// True once the player stands in an end scene.
    pub fn is_finished(&self) -> StoryResult<bool> {
        Ok(self.repo.get(self.state.current_scene_id())?.is_end)
    }

    /// Take the choice with the given number.
    ///
    /// Unknown and disabled choices leave the state untouched. End scenes
    /// offer nothing, so every number is unknown there. Effect failures
    /// propagate and may leave the state partly updated.
    pub fn select(&mut self, number: u32) -> StoryResult<Selection<'r>> {
        let repo = self.repo;
        let scene = repo.get(self.state.current_scene_id())?;
        if scene.is_end {
            return Ok(Selection::NoSuchChoice(number));
        }
        let Some(choice) = scene.choice(number) else {
            return Ok(Selection::NoSuchChoice(number));
        };

        let availability = self.evaluator.is_enabled(choice, &self.state);
        if !availability.enabled {
            return Ok(Selection::Disabled {
                reason: availability.reason,
            });
        }

        self.executor.execute(&choice.effects, &mut self.state)?;
        Ok(Selection::Applied)
    }
}

/// Parse a player's typed selection.
pub fn parse_selection(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}
