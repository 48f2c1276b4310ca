//! Identifiers for core entities.
//!
//! All three are dense indices into their owning collection: joints into the
//! host skeleton, states into a `StateMachine`, layers into a `Controller`.
//! They are opaque to external code.

use serde::{Deserialize, Serialize};

/// Stable identifier of a joint in the host skeleton, dense in `[0, joint_count)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct JointId(pub u32);

/// Identifier of a state within its owning `StateMachine`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StateId(pub u32);

/// Identifier of a layer within its owning `Controller`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u32);

impl JointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl LayerId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
