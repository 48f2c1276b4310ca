//! Error types for the animator core.
//!
//! Everything here is a configuration-time failure: an unknown name, a kind
//! mismatch, or a dangling state reference. Ticking a correctly configured
//! controller never produces an error for normal outcomes (no firing
//! transition, a state with no motion).

use crate::ids::StateId;
use crate::params::ParamKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnimatorError {
    /// A joint name has no match in the skeleton.
    #[error("cannot find joint '{name}'")]
    UnknownJoint { name: String },

    /// A parameter was accessed before being declared.
    #[error("unknown parameter '{name}'")]
    UnknownParameter { name: String },

    /// A parameter access did not match the declared kind.
    #[error("parameter '{name}' is {actual:?}, expected {expected:?}")]
    ParameterKindMismatch {
        name: String,
        expected: ParamKind,
        actual: ParamKind,
    },

    /// A parameter name was declared twice; kinds are immutable after declaration.
    #[error("parameter '{name}' is already declared")]
    DuplicateParameter { name: String },

    /// A state lookup by name found nothing.
    #[error("unknown state '{name}'")]
    UnknownState { name: String },

    /// A state id does not belong to the machine it was used with.
    #[error("state id {id:?} is not part of this state machine")]
    UnknownStateId { id: StateId },

    /// A state name already exists within the machine.
    #[error("state '{name}' already exists in this state machine")]
    DuplicateState { name: String },
}
