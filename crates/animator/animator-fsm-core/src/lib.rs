//! Layered animation state-machine core (engine-agnostic).
//!
//! This crate decides *which* animation clip (or blended set of clips) plays
//! on a character, *when* to switch, and *on which* joints each layer is
//! allowed to act. Clip sampling, pose blending, and layer compositing are
//! delegated to an external [`AnimationPlayer`] collaborator; skeleton data
//! is read through the [`Skeleton`] trait.
//!
//! Components, leaf-first: joint [`mask`] building over a skeleton tree, a
//! typed [`params`] store with self-resetting triggers, the [`motion`] model
//! (clip or 1D blend tree), condition-gated [`transition`]s, [`state`]s with
//! behaviour hooks, and the [`controller`] that ticks every layer once per
//! simulation frame.

pub mod controller;
pub mod error;
pub mod ids;
pub mod machine;
pub mod mask;
pub mod motion;
pub mod params;
pub mod player;
pub mod skeleton;
pub mod state;
pub mod transition;

pub use controller::{Controller, Layer};
pub use error::AnimatorError;
pub use ids::{JointId, LayerId, StateId};
pub use machine::StateMachine;
pub use mask::{JointMask, MaskBuilder};
pub use motion::{BlendTree, ChildMotion, Motion};
pub use params::{ParamKind, ParamValue, Parameters};
pub use player::AnimationPlayer;
pub use skeleton::{JointHierarchy, Skeleton};
pub use state::{BehaviourContext, State, StateBehaviour};
pub use transition::{Condition, ConditionMode, Transition};
