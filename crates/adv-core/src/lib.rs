//! Story engine for the `adv` interactive fiction interpreter.
//!
//! A story is a graph of scenes. Each scene offers numbered choices that
//! may depend on boolean flags, and each choice applies an ordered list of
//! effects: setting or clearing flags and moving to another scene. The
//! graph is validated once when a [`SceneRepository`] is built, and is
//! read-only from then on.
//!
//! The engine does no console I/O. A front end drives a [`Session`] and
//! renders the [`SceneView`] it returns.

/// Engine configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Choice availability.
pub mod evaluator;
/// Effect application.
pub mod executor;
/// JSON story loading.
pub mod loader;
/// Validated scene storage.
pub mod repository;
/// Playthrough driver.
pub mod session;
/// Player state.
pub mod state;
/// Story graph data types.
pub mod story;
/// Render model for front ends.
pub mod view;

pub use config::{DeadEndPolicy, EngineConfig};
pub use error::{StoryError, StoryResult, ValidationError};
pub use evaluator::{Availability, ChoiceEvaluator};
pub use executor::EffectExecutor;
pub use repository::{LoadWarning, SceneRepository};
pub use session::{Selection, Session, parse_selection};
pub use state::PlayerState;
pub use story::{Choice, Effect, Scene, Story};
pub use view::{ChoiceView, SceneView};
