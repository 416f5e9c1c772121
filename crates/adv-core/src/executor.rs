//! Applying effects to player state.

use crate::error::{StoryResult, ValidationError};
use crate::state::PlayerState;
use crate::story::Effect;

/// Applies effect sequences to a [`PlayerState`].
///
/// Effects run strictly in order with no rollback: if one fails, the
/// effects before it stay applied. Targets of `GotoScene` are not looked
/// up here; the repository checked them when the story was loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectExecutor;

impl EffectExecutor {
    /// Create an executor.
    pub fn new() -> Self {
        Self
    }

    /// Apply `effects` to `state` in order.
    pub fn execute(&self, effects: &[Effect], state: &mut PlayerState) -> StoryResult<()> {
        for effect in effects {
            self.apply(effect, state)?;
        }
        Ok(())
    }

    /// Apply one effect.
    pub fn apply(&self, effect: &Effect, state: &mut PlayerState) -> StoryResult<()> {
        let value = effect.value();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankEffectValue {
                effect: effect.kind(),
            }
            .into());
        }

        match effect {
            Effect::SetFlag(name) => state.set_flag(name.as_str()),
            Effect::ClearFlag(name) => {
                state.clear_flag(name);
            }
            Effect::GotoScene(scene_id) => state.set_current_scene_id(scene_id.as_str()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryError;
    use proptest::prelude::*;

    fn run(effects: &[Effect], state: &mut PlayerState) -> StoryResult<()> {
        EffectExecutor::new().execute(effects, state)
    }

    #[test]
    fn updates_state_and_scene() {
        let mut state = PlayerState::new("start");

        run(&[Effect::set_flag("k"), Effect::goto("hallway")], &mut state).unwrap();

        assert!(state.has_flag("k"));
        assert_eq!(state.current_scene_id(), "hallway");
    }

    #[test]
    fn set_then_clear() {
        let mut state = PlayerState::new("start");

        run(&[Effect::set_flag("x")], &mut state).unwrap();
        assert!(state.has_flag("x"));

        run(&[Effect::clear_flag("x")], &mut state).unwrap();
        assert!(!state.has_flag("x"));
    }

    #[test]
    fn clearing_absent_flag_is_noop() {
        let mut state = PlayerState::new("start");
        run(&[Effect::clear_flag("ghost")], &mut state).unwrap();
        assert_eq!(state, PlayerState::new("start"));
    }

    #[test]
    fn later_effects_see_earlier_ones() {
        let mut state = PlayerState::new("start");
        run(
            &[
                Effect::set_flag("lit"),
                Effect::clear_flag("lit"),
                Effect::goto("a"),
                Effect::goto("b"),
            ],
            &mut state,
        )
        .unwrap();

        assert!(!state.has_flag("lit"));
        assert_eq!(state.current_scene_id(), "b");
    }

    #[test]
    fn rejects_blank_scene_target() {
        let mut state = PlayerState::new("start");
        let err = run(&[Effect::goto(" ")], &mut state).unwrap_err();
        assert!(matches!(
            err,
            StoryError::Validation(ValidationError::BlankEffectValue { effect: "GotoScene" })
        ));
        assert_eq!(state.current_scene_id(), "start");
    }

    #[test]
    fn rejects_blank_flag_names() {
        let mut state = PlayerState::new("start");
        for effect in [Effect::set_flag(" "), Effect::set_flag(""), Effect::clear_flag("\t")] {
            let err = run(&[effect], &mut state).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(state.flags().count(), 0);
    }

    #[test]
    fn failure_keeps_earlier_effects() {
        let mut state = PlayerState::new("start");

        let err = run(
            &[
                Effect::set_flag("k"),
                Effect::goto(""),
                Effect::set_flag("never"),
            ],
            &mut state,
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(state.has_flag("k"));
        assert!(!state.has_flag("never"));
        assert_eq!(state.current_scene_id(), "start");
    }

    proptest! {
        #[test]
        fn final_flag_follows_last_write(ops in proptest::collection::vec(any::<bool>(), 1..16)) {
            let effects: Vec<Effect> = ops
                .iter()
                .map(|&set| if set { Effect::set_flag("f") } else { Effect::clear_flag("f") })
                .collect();
            let mut state = PlayerState::new("start");

            run(&effects, &mut state).unwrap();

            prop_assert_eq!(state.has_flag("f"), *ops.last().unwrap());
        }
    }
}
